//! Wire form of a resource: `{"resources": {"memory": {"value": 10}}}`.
//!
//! This is the shape resources take in messages exchanged with resource
//! managers. Conversion never produces a partial vector: a malformed
//! message fails as a whole.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ResourceResult;
use crate::resource::Resource;

/// A resource as carried on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceProto {
    #[serde(default)]
    pub resources: BTreeMap<String, QuantityProto>,
}

/// A single quantity as carried on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityProto {
    #[serde(default)]
    pub value: i64,
}

impl Resource {
    /// Build a resource from its wire form. `None` gives an empty resource.
    pub fn from_proto(proto: Option<&ResourceProto>) -> Resource {
        proto
            .map(|p| p.resources.iter().map(|(k, q)| (k.as_str(), q.value)).collect::<Resource>())
            .unwrap_or_default()
    }

    /// Parse the JSON encoding of the wire form.
    ///
    /// A JSON `null` gives an empty resource.
    pub fn from_json_str(s: &str) -> ResourceResult<Resource> {
        let proto: Option<ResourceProto> = serde_json::from_str(s)?;
        Ok(Resource::from_proto(proto.as_ref()))
    }
}

/// Wire form of a resource. `None` gives an empty message, never a null one.
pub fn to_proto(r: Option<&Resource>) -> ResourceProto {
    let resources: BTreeMap<String, QuantityProto> = r
        .map(|r| {
            r.iter()
                .map(|(k, v)| (k.to_string(), QuantityProto { value: v }))
                .collect()
        })
        .unwrap_or_default();
    ResourceProto { resources }
}
