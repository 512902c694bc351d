//! Capacity statistics used for reporting and admission heuristics.

use tracing::debug;

use crate::quantity::Quantity;
use crate::resource::Resource;

/// Absolute used capacity, as an integer percentage per type of `capacity`.
///
/// - usage of 0 or below is 0%
/// - capacity of 0 or below is 100%
/// - otherwise `usage / capacity * 100`, truncated and capped at `i32::MAX`
///
/// Types in `capacity` without usage are left out of the result. `None`
/// for either side gives an empty result.
pub fn calculate_abs_used_capacity(
    capacity: Option<&Resource>,
    usage: Option<&Resource>,
) -> Resource {
    let (Some(capacity), Some(usage)) = (capacity, usage) else {
        debug!("cannot calculate absolute capacity because of missing capacity or usage");
        return Resource::new();
    };

    let mut abs = Resource::new();
    let mut missing: Vec<&str> = Vec::new();
    for (name, cap) in capacity.iter() {
        let Some(used) = usage.get(name) else {
            missing.push(name);
            continue;
        };
        abs.set(name, used_percentage(cap, used));
    }
    if !missing.is_empty() {
        debug!(
            missing = %missing.join(", "),
            "absolute usage result is missing resource information"
        );
    }
    abs
}

fn used_percentage(capacity: Quantity, used: Quantity) -> Quantity {
    if used <= 0 {
        return 0;
    }
    if capacity <= 0 {
        return 100;
    }
    let pct = used as f64 / capacity as f64 * 100.0;
    if pct > f64::from(i32::MAX) {
        Quantity::from(i32::MAX)
    } else {
        pct as Quantity
    }
}

/// How far `receiver` falls short of `fit`. 0 is a perfect fit.
///
/// Each type of `fit` with a positive value adds `(fit - receiver) / fit`
/// when the receiver is smaller, 1 when the receiver is 0 or below, and
/// nothing otherwise. The maximum score is the number of types in `fit`,
/// which is also what a `None` receiver scores. A `None` fit scores 0.
pub fn fit_in_score(receiver: Option<&Resource>, fit: Option<&Resource>) -> f64 {
    let Some(fit) = fit else {
        return 0.0;
    };
    let Some(receiver) = receiver else {
        return fit.len() as f64;
    };
    let mut score = 0.0;
    for (name, fit_value) in fit.iter() {
        if fit_value <= 0 {
            continue;
        }
        let value = receiver.get_or_zero(name);
        if value <= 0 {
            score += 1.0;
        } else if fit_value > value {
            score += (fit_value - value) as f64 / fit_value as f64;
        }
    }
    score
}
