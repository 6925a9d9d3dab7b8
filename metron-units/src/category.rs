//! Measurement categories
//!
//! Every unit belongs to exactly one category, and every category has a
//! base unit that all of its conversion factors are expressed against.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::unit::ConversionError;

/// A group of mutually convertible units sharing one base unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Length, based on the meter
    #[default]
    Distance,
    /// Mass, based on the kilogram
    Mass,
}

impl Category {
    /// All categories in presentation order
    pub const ALL: [Category; 2] = [Category::Distance, Category::Mass];

    /// Lowercase name (e.g., "distance")
    pub fn name(&self) -> &'static str {
        match self {
            Category::Distance => "distance",
            Category::Mass => "mass",
        }
    }

    /// Symbol of the category's base unit
    pub fn base_unit(&self) -> &'static str {
        match self {
            Category::Distance => "m",
            Category::Mass => "kg",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "distance" | "length" => Ok(Category::Distance),
            "mass" | "weight" => Ok(Category::Mass),
            other => Err(ConversionError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_units() {
        assert_eq!(Category::Distance.base_unit(), "m");
        assert_eq!(Category::Mass.base_unit(), "kg");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("distance".parse::<Category>().unwrap(), Category::Distance);
        assert_eq!(" Mass ".parse::<Category>().unwrap(), Category::Mass);
        assert_eq!("length".parse::<Category>().unwrap(), Category::Distance);
        assert!("temperature".parse::<Category>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Category::Distance), "distance");
        assert_eq!(Category::default(), Category::Distance);
    }
}
