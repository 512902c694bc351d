//! Resources from textual configuration.
//!
//! Configuration spells quantities as strings (`"500m"`, `"4Gi"`). The
//! [`CPU`] type is parsed into millicores, every other type with the
//! generic quantity parser. Construction is all-or-nothing.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ResourceResult;
use crate::parse::{parse_quantity, parse_vcore};
use crate::resource::Resource;

/// Resource type name for CPU, in millicores.
pub const CPU: &str = "vcore";

/// Resource type name for memory, in bytes.
pub const MEMORY: &str = "memory";

impl Resource {
    /// Build a resource from a name → quantity-string map.
    ///
    /// Fails on the first value that does not parse; no partial resource
    /// is returned.
    pub fn from_conf(conf: &HashMap<String, String>) -> ResourceResult<Resource> {
        parse_all(conf)
    }
}

fn parse_all<'a>(pairs: impl IntoIterator<Item = (&'a String, &'a String)>) -> ResourceResult<Resource> {
    let mut res = Resource::new();
    for (name, value) in pairs {
        let quantity = match name.as_str() {
            CPU => parse_vcore(value)?,
            _ => parse_quantity(value)?,
        };
        res.set(name.as_str(), quantity);
    }
    Ok(res)
}

/// A resource section of a TOML configuration file.
///
/// ```toml
/// vcore = "500m"
/// memory = "4Gi"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceConf {
    pub quantities: BTreeMap<String, String>,
}

impl ResourceConf {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parse every quantity into a [`Resource`].
    pub fn to_resource(&self) -> ResourceResult<Resource> {
        parse_all(&self.quantities)
    }
}
