//! Fair-share and dominance calculations.
//!
//! Two independent ways of ranking usage live here:
//!
//! - **Dominant share** ([`fair_share`], [`comp_usage_ratio_separately`]):
//!   each entity's usage is divided by its own guaranteed resources,
//!   falling back to a fair-max cap, and the largest ratio wins (DRF).
//! - **Sorted shares** ([`shares`], [`compare_shares`], [`comp_usage_ratio`]):
//!   both usages are divided by a common total, sorted, and compared from
//!   the largest share downward.

use std::cmp::Ordering;

use tracing::debug;

use crate::quantity::Quantity;
use crate::resource::Resource;

/// Share of `allocated` against the denominator for `resource_type`.
///
/// `None` when the denominator is not defined for the type. A defined
/// denominator of 0 or below gives 1.0 when there is usage and 0.0 when
/// there is none.
pub fn share_for_denominator(
    resource_type: &str,
    allocated: Quantity,
    denominator: Option<&Resource>,
) -> Option<f64> {
    let denominator = denominator?.get(resource_type)?;
    if denominator <= 0 {
        return Some(if allocated > 0 { 1.0 } else { 0.0 });
    }
    Some(allocated as f64 / denominator as f64)
}

/// Dominant share of `allocated`.
///
/// Each type is measured against `guaranteed` first and `fair_max` when
/// no guarantee is defined for it. Types with negative usage have no
/// share. Types without either denominator are skipped.
pub fn fair_share(
    allocated: Option<&Resource>,
    guaranteed: Option<&Resource>,
    fair_max: Option<&Resource>,
) -> f64 {
    let Some(allocated) = allocated else {
        return 0.0;
    };
    let mut max_share = 0.0;
    for (k, v) in allocated.iter() {
        if v < 0 {
            continue;
        }
        let share = share_for_denominator(k, v, guaranteed)
            .or_else(|| share_for_denominator(k, v, fair_max));
        if let Some(share) = share {
            max_share = f64::max(max_share, share);
        }
    }
    max_share
}

/// Compare two entities by their dominant shares, each measured against
/// its own guaranteed and fair-max resources.
///
/// Returns 1 when the left share is larger, -1 when the right one is, and
/// 0 when they are equal.
pub fn comp_usage_ratio_separately(
    left_allocated: Option<&Resource>,
    left_guaranteed: Option<&Resource>,
    left_fair_max: Option<&Resource>,
    right_allocated: Option<&Resource>,
    right_guaranteed: Option<&Resource>,
    right_fair_max: Option<&Resource>,
) -> i32 {
    let left = fair_share(left_allocated, left_guaranteed, left_fair_max);
    let right = fair_share(right_allocated, right_guaranteed, right_fair_max);
    match left.partial_cmp(&right) {
        Some(Ordering::Greater) => 1,
        Some(Ordering::Less) => -1,
        _ => 0,
    }
}

/// Share of each used type against `total`, sorted ascending.
///
/// The share is the raw usage when `total` is `None` or has no non-zero
/// value for the type. Types with zero usage are left out. Shares can be
/// negative.
pub fn shares(usage: Option<&Resource>, total: Option<&Resource>) -> Vec<f64> {
    let Some(usage) = usage else {
        return Vec::new();
    };
    let mut shares = Vec::with_capacity(usage.len());
    for (k, v) in usage.iter() {
        if v == 0 {
            continue;
        }
        let total_value = total.map_or(0, |t| t.get_or_zero(k));
        let share = if total_value == 0 {
            if v < 0 {
                debug!(resource = k, quantity = v, "usage is negative without total, share is negative");
            }
            v as f64
        } else {
            let share = v as f64 / total_value as f64;
            if share < 0.0 {
                debug!(
                    resource = k,
                    quantity = v,
                    total = total_value,
                    "share is negative"
                );
            }
            share
        };
        shares.push(share);
    }
    // no NaN can be produced above
    shares.sort_by(f64::total_cmp);
    shares
}

/// Compare two ascending share lists from their largest entries down.
///
/// The first differing pair decides. When one list runs out, the sign of
/// the next non-zero leftover entry decides: positive wins for its side,
/// negative loses. Returns 1, 0 or -1 like [`comp_usage_ratio`].
pub fn compare_shares(left: &[f64], right: &[f64]) -> i32 {
    let mut l = left.iter().rev();
    let mut r = right.iter().rev();
    loop {
        match (l.next(), r.next()) {
            (Some(a), Some(b)) => {
                if a > b {
                    return 1;
                }
                if a < b {
                    return -1;
                }
            }
            (Some(a), None) => return leftover_sign(std::iter::once(a).chain(l), 1),
            (None, Some(b)) => return leftover_sign(std::iter::once(b).chain(r), -1),
            (None, None) => return 0,
        }
    }
}

/// Sign of the first non-zero leftover share, from the owning side's view.
fn leftover_sign<'a>(rest: impl Iterator<Item = &'a f64>, side: i32) -> i32 {
    for v in rest {
        if *v > 0.0 {
            return side;
        }
        if *v < 0.0 {
            return -side;
        }
    }
    0
}

/// Compare the usage of `left` and `right`, both measured against `total`.
///
/// Returns 1 when left uses the larger share, -1 when right does, and 0
/// when the shares are equal.
pub fn comp_usage_ratio(
    left: Option<&Resource>,
    right: Option<&Resource>,
    total: Option<&Resource>,
) -> i32 {
    compare_shares(&shares(left, total), &shares(right, total))
}

/// Largest share of `left` divided by the largest share of `right`.
///
/// An undefined ratio (0 / 0) is reported as 1.0.
pub fn fairness_ratio(
    left: Option<&Resource>,
    right: Option<&Resource>,
    total: Option<&Resource>,
) -> f64 {
    let left_share = shares(left, total).last().copied().unwrap_or(0.0);
    let right_share = shares(right, total).last().copied().unwrap_or(0.0);
    let ratio = left_share / right_share;
    if ratio.is_nan() { 1.0 } else { ratio }
}

/// Resource type with the highest usage to capacity ratio.
///
/// A capacity of 0 counts as fully used when there is usage and as empty
/// otherwise. Types used but missing from `capacity` are ignored. Ties go
/// to the lexicographically smallest type name, and only ratios of 0 or
/// more are considered. Returns an empty string when nothing qualifies.
pub fn dominant_resource_type(usage: Option<&Resource>, capacity: Option<&Resource>) -> String {
    let (Some(usage), Some(capacity)) = (usage, capacity) else {
        return String::new();
    };
    let mut dominant: Option<(&str, f64)> = None;
    for (name, used) in usage.iter() {
        let Some(cap) = capacity.get(name) else {
            debug!(resource = name, "missing resource in dominant calculation");
            continue;
        };
        let ratio = if cap == 0 {
            if used == 0 { 0.0 } else { 1.0 }
        } else {
            used as f64 / cap as f64
        };
        // keys arrive in ascending order: only a strictly larger ratio
        // replaces the current pick
        let better = match dominant {
            None => ratio >= 0.0,
            Some((_, best)) => ratio > best,
        };
        if better {
            dominant = Some((name, ratio));
        }
    }
    dominant.map(|(name, _)| name.to_string()).unwrap_or_default()
}
