//! Vector algebra on resources.
//!
//! Every function here leaves its inputs untouched and returns a new
//! vector. Unless documented otherwise the result holds the union of the
//! keys of both operands, an absent key contributes 0, and `None` is read
//! as [`ZERO`].

use tracing::debug;

use crate::error::{ResourceError, ResourceResult};
use crate::quantity::{add_safe, mul_safe, mul_safe_ratio, sub_safe};
use crate::resource::{Resource, ZERO};

/// `left + right`.
pub fn add(left: Option<&Resource>, right: Option<&Resource>) -> Resource {
    let mut out = left.unwrap_or(&ZERO).clone();
    out.add_to(right);
    out
}

/// `left - right`. Values may go negative.
pub fn sub(left: Option<&Resource>, right: Option<&Resource>) -> Resource {
    let mut out = left.unwrap_or(&ZERO).clone();
    out.sub_from(right);
    out
}

/// `base - delta` restricted to the types defined in `base`.
///
/// Types only present in `delta` are ignored. If either side is `None`
/// the result is a copy of `base`.
pub fn sub_only_existing(base: Option<&Resource>, delta: Option<&Resource>) -> Option<Resource> {
    only_existing(base, delta, sub_safe)
}

/// `base + delta` restricted to the types defined in `base`.
///
/// Types only present in `delta` are ignored. If either side is `None`
/// the result is a copy of `base`.
pub fn add_only_existing(base: Option<&Resource>, delta: Option<&Resource>) -> Option<Resource> {
    only_existing(base, delta, add_safe)
}

fn only_existing(
    base: Option<&Resource>,
    delta: Option<&Resource>,
    op: fn(i64, i64) -> i64,
) -> Option<Resource> {
    let (Some(base), Some(delta)) = (base, delta) else {
        return base.cloned();
    };
    Some(
        base.iter()
            .map(|(k, v)| (k, op(v, delta.get_or_zero(k))))
            .collect(),
    )
}

/// `left - right` with every negative result reset to 0.
pub fn sub_eliminate_negative(left: Option<&Resource>, right: Option<&Resource>) -> Resource {
    sub_non_negative(left, right).0
}

/// `left - right` with every negative result reset to 0, reporting the
/// types that went negative.
///
/// On error the clamped result is still available through
/// [`ResourceError::clamped`]; callers that only need a best-effort value
/// can take it from there.
pub fn sub_error_negative(
    left: Option<&Resource>,
    right: Option<&Resource>,
) -> ResourceResult<Resource> {
    let (clamped, types) = sub_non_negative(left, right);
    if types.is_empty() {
        Ok(clamped)
    } else {
        Err(ResourceError::NegativeQuantity { types, clamped })
    }
}

fn sub_non_negative(left: Option<&Resource>, right: Option<&Resource>) -> (Resource, Vec<String>) {
    let mut out = left.unwrap_or(&ZERO).clone();
    let mut negative = Vec::new();
    let Some(right) = right else {
        return (out, negative);
    };
    for (k, v) in right.iter() {
        let mut value = sub_safe(out.get_or_zero(k), v);
        if value < 0 {
            negative.push(k.to_string());
            value = 0;
        }
        out.set(k, value);
    }
    if !negative.is_empty() {
        debug!(types = %negative.join(", "), "resource quantity less than zero, reset to 0");
    }
    (out, negative)
}

/// Multiply every value by an integer ratio.
///
/// `None` or a zero ratio gives an empty vector.
pub fn multiply(base: Option<&Resource>, ratio: i64) -> Resource {
    match base {
        Some(base) if ratio != 0 => base.iter().map(|(k, v)| (k, mul_safe(v, ratio))).collect(),
        _ => Resource::new(),
    }
}

/// Multiply every value by a floating point ratio, flooring the result.
///
/// `None` or a zero ratio gives an empty vector.
pub fn multiply_by(base: Option<&Resource>, ratio: f64) -> Resource {
    match base {
        Some(base) if ratio != 0.0 => {
            base.iter().map(|(k, v)| (k, mul_safe_ratio(v, ratio))).collect()
        }
        _ => Resource::new(),
    }
}

/// Smallest value per type.
///
/// A type missing on one side takes the other side's value. One `None`
/// side gives a copy of the other; both `None` gives `None`.
pub fn component_wise_min(left: Option<&Resource>, right: Option<&Resource>) -> Option<Resource> {
    let (left, right) = match (left, right) {
        (None, None) => return None,
        (None, Some(r)) => return Some(r.clone()),
        (Some(l), None) => return Some(l.clone()),
        (Some(l), Some(r)) => (l, r),
    };
    let mut out = left.clone();
    for (k, v) in right.iter() {
        let value = match left.get(k) {
            Some(l) => l.min(v),
            None => v,
        };
        out.set(k, value);
    }
    Some(out)
}

/// Largest value per type, with an absent type reading as 0.
///
/// Unlike [`component_wise_min`], a `None` on either side gives an empty
/// vector, never `None`.
pub fn component_wise_max(left: Option<&Resource>, right: Option<&Resource>) -> Resource {
    let (Some(left), Some(right)) = (left, right) else {
        return Resource::new();
    };
    let mut out = Resource::new();
    for (k, v) in left.iter() {
        out.set(k, v.max(right.get_or_zero(k)));
    }
    for (k, v) in right.iter() {
        out.set(k, v.max(left.get_or_zero(k)));
    }
    out
}

/// Smallest value per type, restricted to the types of `left`.
pub fn component_wise_min_only_existing(
    left: Option<&Resource>,
    right: Option<&Resource>,
) -> Option<Resource> {
    let left = left?;
    let Some(right) = right else {
        return Some(left.clone());
    };
    Some(
        left.iter()
            .map(|(k, v)| (k, right.get(k).map_or(v, |r| v.min(r))))
            .collect(),
    )
}

/// Copy of `left` extended with the types of `right` that `left` lacks.
pub fn merge_if_not_present(left: Option<&Resource>, right: Option<&Resource>) -> Option<Resource> {
    let (left, right) = match (left, right) {
        (None, None) => return None,
        (None, Some(r)) => return Some(r.clone()),
        (Some(l), None) => return Some(l.clone()),
        (Some(l), Some(r)) => (l, r),
    };
    let mut out = left.clone();
    for (k, v) in right.iter() {
        if !left.contains(k) {
            out.set(k, v);
        }
    }
    Some(out)
}
