//! Overflow-safe scalar arithmetic on single quantities.
//!
//! All calculators are total: a result that cannot be represented is
//! clamped to `i64::MIN` or `i64::MAX` and a `warn` event is emitted.
//! Zero operands are short-circuited because zero-valued entries are the
//! most common input on the scheduling hot path.

use tracing::warn;

/// A single amount of one resource type. Unitless, caller-defined.
pub type Quantity = i64;

/// Add two quantities, clamping on overflow.
pub fn add_safe(a: Quantity, b: Quantity) -> Quantity {
    match a.checked_add(b) {
        Some(v) => v,
        // Overflow needs both operands on the same side of zero.
        None if a < 0 => clamp_min(a, b),
        None => clamp_max(a, b),
    }
}

/// Subtract `b` from `a`, clamping on overflow.
///
/// Equivalent to `add_safe(a, -b)` without negating `b`, so `b == i64::MIN`
/// is handled like any other value.
pub fn sub_safe(a: Quantity, b: Quantity) -> Quantity {
    match a.checked_sub(b) {
        Some(v) => v,
        None if b < 0 => clamp_max(a, b),
        None => clamp_min(a, b),
    }
}

/// Multiply two quantities, clamping on overflow.
///
/// `i64::MIN * -1` is treated as an overflow and returns `i64::MAX`.
pub fn mul_safe(a: Quantity, b: Quantity) -> Quantity {
    if a == 0 || b == 0 {
        return 0;
    }
    match a.checked_mul(b) {
        Some(v) => v,
        None if (a < 0) != (b < 0) => clamp_min(a, b),
        None => clamp_max(a, b),
    }
}

/// Multiply a quantity by a floating point ratio.
///
/// The product is floored toward negative infinity. The float intermediate
/// can leave the integer range in either direction, so both bounds are
/// checked before converting back.
pub fn mul_safe_ratio(value: Quantity, ratio: f64) -> Quantity {
    if value == 0 || ratio == 0.0 {
        return 0;
    }
    let result = (value as f64 * ratio).floor();
    if result >= i64::MAX as f64 {
        warn!(value, ratio, "multiplication result positive overflow");
        return i64::MAX;
    }
    if result < i64::MIN as f64 {
        warn!(value, ratio, "multiplication result negative overflow");
        return i64::MIN;
    }
    result as Quantity
}

fn clamp_max(a: Quantity, b: Quantity) -> Quantity {
    warn!(
        value_a = a,
        value_b = b,
        "resource calculation wrapped: returned maximum value possible"
    );
    i64::MAX
}

fn clamp_min(a: Quantity, b: Quantity) -> Quantity {
    warn!(
        value_a = a,
        value_b = b,
        "resource calculation wrapped: returned minimum value possible"
    );
    i64::MIN
}
