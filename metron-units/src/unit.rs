//! Unit representation with conversion factors

use std::fmt;
use serde::Serialize;
use thiserror::Error;
use metron_core::MeasureError;
use crate::Category;

/// A linear unit of measure within one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    /// The unit symbol (e.g., "m", "kg", "mi")
    pub symbol: &'static str,
    /// The display name (e.g., "meter", "kilogram", "mile")
    pub name: &'static str,
    /// Category the unit belongs to
    pub category: Category,
    /// One of this unit equals `factor_to_base` base units (value_base = value * factor)
    pub factor_to_base: f64,
}

impl Unit {
    /// Create a new unit. Factors must be strictly positive.
    pub const fn new(
        symbol: &'static str,
        name: &'static str,
        category: Category,
        factor_to_base: f64,
    ) -> Self {
        Unit { symbol, name, category, factor_to_base }
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        self.factor_to_base == 1.0
    }

    /// Check if two units share a category (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }

    /// Convert a value in this unit to the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor_to_base
    }

    /// Convert a value in the category's base unit to this unit
    pub fn from_base(&self, value_base: f64) -> f64 {
        value_base / self.factor_to_base
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Units belong to different categories
    #[error("cannot convert {from} ({from_category}) to {to} ({to_category}): incompatible categories")]
    IncompatibleCategories {
        from: String,
        to: String,
        from_category: Category,
        to_category: Category,
    },

    /// A unit was offered to a session whose active category differs
    #[error("unit {unit} does not belong to category {category}")]
    UnitNotInCategory {
        unit: String,
        category: Category,
    },

    /// Unknown unit symbol or alias
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Unknown category name
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The result is NaN or infinite
    #[error("conversion produced a non-finite value")]
    NonFinite,
}

impl From<ConversionError> for MeasureError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::IncompatibleCategories { .. }
            | ConversionError::UnitNotInCategory { .. } => {
                MeasureError::invariant_violation(err.to_string())
            }
            ConversionError::UnknownUnit(ref symbol) => MeasureError::unknown_unit(symbol),
            ConversionError::UnknownCategory(ref name) => MeasureError::unknown_category(name),
            ConversionError::NonFinite => MeasureError::non_finite(),
        }
    }
}
