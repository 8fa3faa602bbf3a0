//! Engine configuration.
//!
//! Every field has a default, so a partial JSON document such as
//! `{"max_tests": 1000}` is a complete config.

use serde::{Deserialize, Serialize};
use tierwise_explore::NumericMode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum argument tuples a check evaluates.
    pub max_tests: usize,
    /// Values shown by bounded renderings before `...`.
    pub render_len: usize,
    /// Which numbers `int`, `float` and `range` produce.
    pub numeric: NumericMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_tests: 360,
            render_len: 6,
            numeric: NumericMode::Default,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tests == 0 {
            return Err(ConfigError::Invalid {
                field: "max_tests",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_tests, 360);
        assert_eq!(config.render_len, 6);
        assert_eq!(config.numeric, NumericMode::Default);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = EngineConfig::from_json(r#"{"numeric": "only_positives"}"#).unwrap();
        assert_eq!(config.numeric, NumericMode::OnlyPositives);
        assert_eq!(config.max_tests, 360);
    }

    #[test]
    fn test_zero_max_tests_rejected() {
        let err = EngineConfig::from_json(r#"{"max_tests": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_tests", .. }));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = EngineConfig::from_json(r#"{"numeric": "only_negatives"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_serializes_snake_case_mode() {
        let config = EngineConfig {
            numeric: NumericMode::OnlyNonNegatives,
            ..EngineConfig::default()
        };
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"max_tests": 360, "render_len": 6, "numeric": "only_non_negatives"})
        );
    }
}
