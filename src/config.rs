//! Rule-set configuration
//!
//! The concrete predicates behind `IsValidForRegistration` and `CanMakeOrders`
//! are configuration, not code. They are loaded from JSON such as:
//!
//! ```json
//! {
//!   "registration": { "max_company_name_length": 40 },
//!   "ordering": { "require_phone_number": true, "min_orders": 0 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for both customer rule sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rules checked before registration and before every save
    pub registration: RuleSetConfig,
    /// Rules checked before a customer may place orders
    pub ordering: RuleSetConfig,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            registration: RuleSetConfig::default(),
            ordering: RuleSetConfig {
                require_phone_number: true,
                ..RuleSetConfig::default()
            },
        }
    }
}

impl RulesConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::Io {
                path: path.display().to_string(),
                source: e,
            })?;
        log::debug!("loaded rule configuration from {}", path.display());
        Self::from_json_str(&content)
    }
}

/// Predicates of a single rule set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSetConfig {
    /// A disabled rule set always passes
    pub enabled: bool,
    pub require_phone_number: bool,
    pub require_fax_number: bool,
    pub max_company_name_length: Option<usize>,
    pub max_contact_name_length: Option<usize>,
    /// Minimum number of orders already on record
    pub min_orders: usize,
}

impl Default for RuleSetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            require_phone_number: false,
            require_fax_number: false,
            max_company_name_length: None,
            max_contact_name_length: None,
            min_orders: 0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {message}")]
    Parse { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_require_phone_for_ordering_only() {
        let config = RulesConfig::default();
        assert!(config.registration.enabled);
        assert!(!config.registration.require_phone_number);
        assert!(config.ordering.require_phone_number);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = RulesConfig::from_json_str(
            r#"{ "registration": { "max_company_name_length": 40 } }"#,
        )
        .unwrap();

        assert_eq!(config.registration.max_company_name_length, Some(40));
        assert!(config.registration.enabled);
        assert_eq!(config.ordering, RulesConfig::default().ordering);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = RulesConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
