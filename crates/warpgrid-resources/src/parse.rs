//! Quantity string parsing for textual configuration.
//!
//! Accepts a non-negative integer followed by an optional unit suffix:
//! decimal (`k`, `M`, `G`, `T`, `P`, `E`) or binary (`Ki`, `Mi`, `Gi`,
//! `Ti`, `Pi`, `Ei`). CPU values additionally accept the milli suffix `m`
//! and are always returned in millicores.

use regex::Regex;

use crate::error::{ResourceError, ResourceResult};
use crate::quantity::Quantity;

const QUANTITY_PATTERN: &str = r"^(\d+)(m|k|Ki|M|Mi|G|Gi|T|Ti|P|Pi|E|Ei)?$";

/// Parse a generic quantity such as `"10"`, `"5M"` or `"1Gi"`.
pub fn parse_quantity(value: &str) -> ResourceResult<Quantity> {
    parse(value, false)
}

/// Parse a CPU quantity into millicores: `"1"` is 1000, `"250m"` is 250.
pub fn parse_vcore(value: &str) -> ResourceResult<Quantity> {
    parse(value, true)
}

fn parse(value: &str, milli: bool) -> ResourceResult<Quantity> {
    let value = value.trim();
    let re = Regex::new(QUANTITY_PATTERN)
        .map_err(|e| ResourceError::InvalidQuantity(e.to_string()))?;
    let caps = re
        .captures(value)
        .ok_or_else(|| ResourceError::InvalidQuantity(value.to_string()))?;

    let number: i64 = caps[1]
        .parse()
        .map_err(|_| ResourceError::QuantityOverflow(value.to_string()))?;

    let suffix = caps.get(2).map_or("", |m| m.as_str());
    let scale = suffix_scale(suffix, milli)
        .ok_or_else(|| ResourceError::InvalidQuantity(value.to_string()))?;
    // Whole cores are converted to millicores after scaling.
    let milli_scale = if milli && suffix != "m" { 1_000 } else { 1 };

    number
        .checked_mul(scale)
        .and_then(|v| v.checked_mul(milli_scale))
        .ok_or_else(|| ResourceError::QuantityOverflow(value.to_string()))
}

/// Multiplier for a unit suffix. `None` when the suffix is not allowed.
fn suffix_scale(suffix: &str, milli: bool) -> Option<i64> {
    let scale = match suffix {
        "" => 1,
        "m" if milli => 1,
        "k" => 1_000,
        "M" => 1_000_000,
        "G" => 1_000_000_000,
        "T" => 1_000_000_000_000,
        "P" => 1_000_000_000_000_000,
        "E" => 1_000_000_000_000_000_000,
        "Ki" => 1 << 10,
        "Mi" => 1 << 20,
        "Gi" => 1 << 30,
        "Ti" => 1 << 40,
        "Pi" => 1 << 50,
        "Ei" => 1 << 60,
        _ => return None,
    };
    Some(scale)
}
