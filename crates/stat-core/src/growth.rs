//! Extraction of numeric growth measurements from free-text columns.
//!
//! Growth rows carry their values as strings like `"7.3kg"` or `"68.5cm"`.
//! Parsing is deliberately lenient: a missing suffix or a non-numeric
//! remainder produces a missing value rather than an error, since growth rows
//! are sparse and optional.

/// Parse a measurement string by stripping `suffix` and reading the remainder
/// as a float.
///
/// Returns `None` when the suffix is absent or the remainder is not a number.
pub fn parse_measurement(raw: &str, suffix: &str) -> Option<f64> {
    let stripped = raw.trim().strip_suffix(suffix)?;
    stripped.trim().parse::<f64>().ok()
}

/// Parse a `"<float>kg"` weight value.
pub fn parse_weight(raw: &str) -> Option<f64> {
    parse_measurement(raw, "kg")
}

/// Parse a `"<float>cm"` length value (height or head circumference).
pub fn parse_length(raw: &str) -> Option<f64> {
    parse_measurement(raw, "cm")
}
