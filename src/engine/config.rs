//! Engine Configuration
//!
//! Configuration carried by a query engine and inherited by every engine
//! derived from it through `filter`.

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use crate::observability::Severity;

/// Query engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum severity to log (default: none, logging disabled)
    #[serde(default = "default_log_level")]
    pub log_level: Option<Severity>,
}

fn default_log_level() -> Option<Severity> {
    None
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl EngineConfig {
    /// Create a config logging at the given severity and above
    pub fn with_log_level(level: Severity) -> Self {
        Self {
            log_level: Some(level),
        }
    }

    /// Parse a config from JSON; missing keys take defaults
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_from_json_with_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());

        let config = EngineConfig::from_json(r#"{"log_level": "WARN"}"#).unwrap();
        assert_eq!(config.log_level, Some(Severity::Warn));
    }

    #[test]
    fn test_from_json_invalid() {
        let err = EngineConfig::from_json(r#"{"log_level": "LOUD"}"#).unwrap_err();
        assert_eq!(err.code(), "DOCQ_CONFIG_INVALID");
    }

    #[test]
    fn test_with_log_level() {
        let config = EngineConfig::with_log_level(Severity::Trace);
        assert_eq!(config.log_level, Some(Severity::Trace));
    }
}
