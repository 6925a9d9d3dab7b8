//! The displayed outcome of a conversion
//!
//! A `Reading` is what a session hands to its UI shell after every state
//! change. Empty input, a formatted number, and an error are three distinct
//! variants so a shell can never mistake a failed parse for a zero.

use crate::{FormatConfig, MeasureError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Reading {
    /// No input yet
    #[default]
    Empty,
    /// A formatted conversion result
    Number(String),
    Error(MeasureError),
}

impl Reading {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reading::Number(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&MeasureError> {
        match self {
            Reading::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Reading::Empty)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reading::Error(_))
    }

    /// Text a shell should render for this reading
    pub fn display<'a>(&'a self, config: &'a FormatConfig) -> &'a str {
        match self {
            Reading::Empty => &config.placeholder,
            Reading::Number(s) => s,
            Reading::Error(_) => &config.invalid_marker,
        }
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reading::Empty => write!(f, "(empty)"),
            Reading::Number(s) => write!(f, "{}", s),
            Reading::Error(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_config() {
        let config = FormatConfig::default();
        assert_eq!(Reading::Empty.display(&config), "0");
        assert_eq!(Reading::Number("3.14".to_string()).display(&config), "3.14");

        let invalid = Reading::Error(MeasureError::invalid_input("abc"));
        assert_eq!(invalid.display(&config), "Invalid Input");
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(Reading::default(), Reading::Empty);
    }

    #[test]
    fn test_accessors() {
        let r = Reading::Number("12".to_string());
        assert_eq!(r.as_text(), Some("12"));
        assert!(r.as_error().is_none());
        assert!(!r.is_empty());

        let r = Reading::Error(MeasureError::non_finite());
        assert!(r.is_error());
        assert!(r.as_text().is_none());
    }

    #[test]
    fn test_serialized_tagging() {
        let json = serde_json::to_value(Reading::Number("1.5".to_string())).unwrap();
        assert_eq!(json["type"], "Number");
        assert_eq!(json["value"], "1.5");

        let json = serde_json::to_value(Reading::Empty).unwrap();
        assert_eq!(json["type"], "Empty");
    }
}
