//! Result formatting
//!
//! Round to a bounded number of decimals, then trim trailing zeros from the
//! fractional part only: `3.1400` -> `3.14`, `3.0000` -> `3`, `100` stays
//! `100`.

use metron_core::DEFAULT_DECIMALS;

/// Format with the default precision (4 decimals)
pub fn format(value: f64) -> String {
    format_with(value, DEFAULT_DECIMALS)
}

/// Format with at most `decimals` fractional digits
///
/// Non-finite values fall through to Rust's own rendering ("NaN", "inf").
pub fn format_with(value: f64, decimals: u32) -> String {
    try_format(value, decimals).unwrap_or_else(|| value.to_string())
}

/// Format a finite value, or `None` for NaN and infinities
pub fn try_format(value: f64, decimals: u32) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let rendered = format!("{:.*}", decimals as usize, value);
    let trimmed = trim_fraction(&rendered);

    // -0.00001 rounds to "-0.0000"
    if trimmed == "-0" {
        return Some("0".to_string());
    }
    Some(trimmed.to_string())
}

fn trim_fraction(rendered: &str) -> &str {
    if !rendered.contains('.') {
        return rendered;
    }
    rendered.trim_end_matches('0').trim_end_matches('.')
}
