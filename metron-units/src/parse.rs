//! Input and unit-name parsing

use crate::Unit;
use crate::unit::ConversionError;
use crate::units::UNITS;

/// Outcome of parsing raw input text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseResult {
    /// Zero-length input
    Empty,
    /// A base-10 real number
    Valid(f64),
    /// Anything else
    Invalid,
}

impl ParseResult {
    pub fn value(&self) -> Option<f64> {
        match self {
            ParseResult::Valid(v) => Some(*v),
            _ => None,
        }
    }
}

/// Parse raw input into a number
///
/// Accepted form: optional sign, then digits with at most one decimal
/// point, with at least one digit overall ("12", "12.5", ".5", "5.").
/// Whitespace is not stripped, so " 5" is invalid. Exponents, "inf" and
/// "NaN" are rejected even though `f64::from_str` would take them.
pub fn parse(text: &str) -> ParseResult {
    if text.is_empty() {
        return ParseResult::Empty;
    }
    if !is_decimal_literal(text) {
        return ParseResult::Invalid;
    }
    match text.parse::<f64>() {
        Ok(v) => ParseResult::Valid(v),
        Err(_) => ParseResult::Invalid,
    }
}

fn is_decimal_literal(text: &str) -> bool {
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);

    let mut digits = 0;
    let mut points = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}

/// Look up a unit by symbol or name ("km", "kilometers")
pub fn parse_unit(s: &str) -> Result<Unit, ConversionError> {
    let s = s.trim();
    UNITS.get(s)
        .or_else(|| UNITS.get(&s.to_lowercase()))
        .copied()
        .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}
