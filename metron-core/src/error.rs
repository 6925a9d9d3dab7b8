//! Structured errors for conversion sessions
//!
//! Errors are values. A failed parse never unwinds out of a session: it is
//! recorded as a `MeasureError` inside the session's `Reading` and rendered
//! as a sentinel string by the UI shell.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const NON_FINITE: &str = "NON_FINITE";
    pub const INVARIANT_VIOLATION: &str = "INVARIANT_VIOLATION";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The current input cannot produce a value
    Error,
    /// The caller broke a contract; this is a defect, not user input
    Fatal,
}

/// Structured error record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl MeasureError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }

    // ========== Common Error Constructors ==========

    pub fn invalid_input(text: &str) -> Self {
        Self::new(codes::INVALID_INPUT, format!("Not a number: {:?}", text))
            .with_suggestion("Enter digits with at most one decimal point")
    }

    pub fn non_finite() -> Self {
        Self::new(codes::NON_FINITE, "Conversion produced a non-finite value")
            .with_suggestion("Check the conversion factors of the selected units")
    }

    pub fn invariant_violation(details: impl Into<String>) -> Self {
        Self::new(codes::INVARIANT_VIOLATION, format!("Invariant violation: {}", details.into()))
            .with_suggestion("Only offer units of the active category")
            .with_severity(Severity::Fatal)
    }

    pub fn unknown_unit(symbol: &str) -> Self {
        Self::new(codes::UNKNOWN_UNIT, format!("Unknown unit: {}", symbol))
            .with_suggestion(format!("Check the spelling of '{}'", symbol))
    }

    pub fn unknown_category(name: &str) -> Self {
        Self::new(codes::UNKNOWN_CATEGORY, format!("Unknown category: {}", name))
    }
}

impl std::fmt::Display for MeasureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for MeasureError {}
