//! Conversion engine
//!
//! Every conversion is mediated by the category's base unit:
//! `result = value * from.factor_to_base / to.factor_to_base`.

use crate::Unit;
use crate::unit::ConversionError;

/// Convert `value` from one unit to another of the same category
///
/// The category match is the caller's responsibility. Mismatched units
/// still produce a number (both factors are positive), just not a
/// meaningful one; use [`convert_checked`] when the pair is untrusted.
/// NaN and infinities propagate as IEEE-754 dictates.
pub fn convert(value: f64, from: &Unit, to: &Unit) -> f64 {
    if from == to {
        return value;
    }
    value * from.factor_to_base / to.factor_to_base
}

/// Convert, rejecting cross-category pairs and non-finite results
pub fn convert_checked(value: f64, from: &Unit, to: &Unit) -> Result<f64, ConversionError> {
    if !from.is_compatible(to) {
        return Err(ConversionError::IncompatibleCategories {
            from: from.symbol.to_string(),
            to: to.symbol.to_string(),
            from_category: from.category,
            to_category: to.category,
        });
    }

    let result = convert(value, from, to);
    if !result.is_finite() {
        return Err(ConversionError::NonFinite);
    }
    Ok(result)
}
