//! Metron Core - Shared types
//!
//! This crate provides the types shared by the conversion core and any
//! UI shell that drives it:
//! - `Reading`: The displayed outcome of a conversion (empty, number, error)
//! - `MeasureError`: Structured error record
//! - `FormatConfig`: Result formatting policy

mod reading;
mod error;
mod config;

pub use reading::Reading;
pub use error::{MeasureError, Severity, codes};
pub use config::{FormatConfig, ConfigError, DECIMALS_ENV, DEFAULT_DECIMALS, MAX_DECIMALS};
