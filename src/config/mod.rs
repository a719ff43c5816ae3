//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::order::OrderConfirmationTarget;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Where orders are sent and where the customer goes afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Origin of the backend (e.g., "http://localhost:3000")
    #[serde(default)]
    pub base_url: String,

    /// Path of the order creation endpoint
    #[serde(default = "default_orders_path")]
    pub orders_path: String,

    /// Route prefix of the confirmation view
    #[serde(default = "default_confirmation_path")]
    pub confirmation_path: String,

    /// Request timeout in milliseconds; none by default
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_orders_path() -> String {
    "/api/orders".to_string()
}

fn default_confirmation_path() -> String {
    OrderConfirmationTarget::DEFAULT_PREFIX.to_string()
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            orders_path: default_orders_path(),
            confirmation_path: default_confirmation_path(),
            timeout_ms: None,
        }
    }
}

impl WorkflowConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            message: format!("{}: {}", path, e),
        })?;
        Self::parse(&content, Some(path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Self::parse(yaml, None)
    }

    fn parse(yaml: &str, file: Option<&str>) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: file.map(str::to_string),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that paths are absolute and the timeout is usable
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (field, value) in [
            ("orders_path", &self.orders_path),
            ("confirmation_path", &self.confirmation_path),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("must start with '/' (value: {})", value),
                });
            }
        }

        if self.timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Full URL of the order creation endpoint
    pub fn orders_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.orders_path)
    }
}
