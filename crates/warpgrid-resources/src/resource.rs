//! The sparse resource vector.
//!
//! A [`Resource`] maps resource-type names (`"vcore"`, `"memory"`,
//! `"nvidia.com/gpu"`, ...) to quantities. Absence of a key is not the same
//! as an explicit zero: pruning removes explicit zeros, and quota checks
//! read an absent key as "no limit".
//!
//! A nullable vector is spelled `Option<&Resource>` throughout the crate;
//! `None` behaves as the empty vector unless an operation says otherwise.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quantity::{Quantity, add_safe, mul_safe_ratio, sub_safe};

/// The shared additive identity. Never mutated: clone before accumulating.
pub static ZERO: Resource = Resource {
    resources: BTreeMap::new(),
};

/// Sparse vector of quantities keyed by resource-type name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource {
    resources: BTreeMap<String, Quantity>,
}

impl Resource {
    /// Create an empty resource.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing map. The map is taken as is, zeros included.
    pub fn from_map(resources: BTreeMap<String, Quantity>) -> Self {
        Self { resources }
    }

    pub fn get(&self, name: &str) -> Option<Quantity> {
        self.resources.get(name).copied()
    }

    /// Value for `name`, reading an absent key as 0.
    pub fn get_or_zero(&self, name: &str) -> Quantity {
        self.get(name).unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Quantity) {
        self.resources.insert(name.into(), value);
    }

    pub fn remove(&mut self, name: &str) -> Option<Quantity> {
        self.resources.remove(name)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Quantity)> {
        self.resources.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = Quantity> + '_ {
        self.resources.values().copied()
    }

    pub fn as_map(&self) -> &BTreeMap<String, Quantity> {
        &self.resources
    }

    pub fn into_map(self) -> BTreeMap<String, Quantity> {
        self.resources
    }

    /// Remove every type with an explicit zero value.
    pub fn prune(&mut self) {
        self.resources.retain(|_, v| *v != 0);
    }

    // ── Accumulators ───────────────────────────────────────────────
    //
    // These update the receiver in place and are meant for temporary,
    // locally owned vectors only. `None` deltas leave the receiver as is.

    /// Add `delta` into this resource.
    pub fn add_to(&mut self, delta: Option<&Resource>) {
        let Some(delta) = delta else { return };
        for (k, v) in delta.iter() {
            let entry = self.resources.entry(k.to_string()).or_insert(0);
            *entry = add_safe(*entry, v);
        }
    }

    /// Subtract `delta` from this resource. Values may go negative.
    pub fn sub_from(&mut self, delta: Option<&Resource>) {
        let Some(delta) = delta else { return };
        for (k, v) in delta.iter() {
            let entry = self.resources.entry(k.to_string()).or_insert(0);
            *entry = sub_safe(*entry, v);
        }
    }

    /// Multiply every value by `ratio`, flooring the result.
    pub fn multiply_to(&mut self, ratio: f64) {
        for v in self.resources.values_mut() {
            *v = mul_safe_ratio(*v, ratio);
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Quantity)> for Resource {
    fn from_iter<I: IntoIterator<Item = (K, Quantity)>>(iter: I) -> Self {
        Self {
            resources: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Quantity); N]> for Resource {
    fn from(pairs: [(K, Quantity); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.resources.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        f.write_str("}")
    }
}

/// Independent copy of a nullable resource. `None` stays `None`.
pub fn clone_resource(r: Option<&Resource>) -> Option<Resource> {
    r.cloned()
}

/// Human readable form of a nullable resource.
pub fn describe(r: Option<&Resource>) -> String {
    match r {
        Some(r) => r.to_string(),
        None => "nil resource".to_string(),
    }
}

/// Plain name → value map for reporting. Empty for `None`.
pub fn dao_map(r: Option<&Resource>) -> BTreeMap<String, i64> {
    r.map(|r| r.resources.clone()).unwrap_or_default()
}
