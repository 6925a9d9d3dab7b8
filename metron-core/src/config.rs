//! Formatting policy for session results

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Environment variable overriding the number of decimal places
pub const DECIMALS_ENV: &str = "METRON_DECIMALS";

/// Default number of decimal places kept before trimming
pub const DEFAULT_DECIMALS: u32 = 4;

/// Upper bound on decimal places; beyond this f64 output is noise
pub const MAX_DECIMALS: u32 = 12;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid METRON_DECIMALS value: {0}")]
    InvalidDecimals(String),
}

/// How a session renders its result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Maximum decimal places before trailing zeros are trimmed
    pub decimals: u32,
    /// Shown when there is no input
    pub placeholder: String,
    /// Shown when the input cannot be converted
    pub invalid_marker: String,
}

impl FormatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals.min(MAX_DECIMALS);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_invalid_marker(mut self, marker: impl Into<String>) -> Self {
        self.invalid_marker = marker.into();
        self
    }

    /// Read overrides from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_default()
    }

    pub fn try_from_env() -> Result<Self, ConfigError> {
        match env::var(DECIMALS_ENV) {
            Ok(raw) => Self::default().with_decimals_str(&raw),
            Err(_) => Ok(Self::default()),
        }
    }

    fn with_decimals_str(self, raw: &str) -> Result<Self, ConfigError> {
        let decimals: u32 = raw.trim().parse()
            .map_err(|_| ConfigError::InvalidDecimals(raw.to_string()))?;
        Ok(self.with_decimals(decimals))
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            placeholder: "0".to_string(),
            invalid_marker: "Invalid Input".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FormatConfig::default();
        assert_eq!(config.decimals, 4);
        assert_eq!(config.placeholder, "0");
        assert_eq!(config.invalid_marker, "Invalid Input");
    }

    #[test]
    fn test_decimals_clamped() {
        let config = FormatConfig::new().with_decimals(40);
        assert_eq!(config.decimals, MAX_DECIMALS);
    }

    #[test]
    fn test_decimals_from_text() {
        let config = FormatConfig::default().with_decimals_str(" 2 ").unwrap();
        assert_eq!(config.decimals, 2);

        let err = FormatConfig::default().with_decimals_str("two").unwrap_err();
        assert_eq!(err, ConfigError::InvalidDecimals("two".to_string()));
    }

    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn test_decimals_from_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        env::set_var(DECIMALS_ENV, "2");
        assert_eq!(FormatConfig::try_from_env().unwrap().decimals, 2);
        assert_eq!(FormatConfig::from_env().decimals, 2);

        env::set_var(DECIMALS_ENV, "two");
        assert_eq!(
            FormatConfig::try_from_env(),
            Err(ConfigError::InvalidDecimals("two".to_string()))
        );
        assert_eq!(FormatConfig::from_env(), FormatConfig::default());

        env::remove_var(DECIMALS_ENV);
        assert_eq!(FormatConfig::try_from_env().unwrap(), FormatConfig::default());
        assert_eq!(FormatConfig::from_env().decimals, DEFAULT_DECIMALS);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FormatConfig = serde_json::from_str(r#"{"decimals": 2}"#).unwrap();
        assert_eq!(config.decimals, 2);
        assert_eq!(config.invalid_marker, "Invalid Input");
    }
}
