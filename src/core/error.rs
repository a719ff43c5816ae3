//! Typed error handling for the order workflow
//!
//! Callers can tell a blocked submit (invalid fields) apart from a failed
//! order creation and react to each one specifically.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: the draft cannot be submitted
//! - [`SubmissionError`]: the order request failed or was refused
//! - [`ConfigError`]: configuration could not be loaded or is inconsistent
//!
//! # Example
//!
//! ```rust,ignore
//! match workflow.submit().await {
//!     Ok(target) => router.push(target.as_str()),
//!     Err(OrderError::Validation(ValidationError::Incomplete(failure))) => {
//!         show_banner(&failure.message);
//!     }
//!     Err(OrderError::Submission(SubmissionError::Rejected { status })) => {
//!         tracing::warn!(status, "order refused");
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use crate::core::validation::ValidationFailure;
use std::fmt;

/// The main error type for the order workflow
#[derive(Debug)]
pub enum OrderError {
    /// The draft failed client-side validation
    Validation(ValidationError),

    /// Creating the order failed
    Submission(SubmissionError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::Validation(e) => write!(f, "{}", e),
            OrderError::Submission(e) => write!(f, "{}", e),
            OrderError::Config(e) => write!(f, "{}", e),
            OrderError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for OrderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrderError::Validation(e) => Some(e),
            OrderError::Submission(e) => Some(e),
            OrderError::Config(e) => Some(e),
            OrderError::Internal(_) => None,
        }
    }
}

impl OrderError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::Validation(e) => e.error_code(),
            OrderError::Submission(e) => e.error_code(),
            OrderError::Config(_) => "CONFIG_ERROR",
            OrderError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// True when the submit was blocked before any request was made
    pub fn is_validation(&self) -> bool {
        matches!(self, OrderError::Validation(_))
    }

    /// Whether the customer can usefully press "Place Order" again
    pub fn is_retryable(&self) -> bool {
        match self {
            OrderError::Submission(e) => e.is_retryable(),
            _ => false,
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised before a request is sent
#[derive(Debug)]
pub enum ValidationError {
    /// One or more fields are missing or malformed
    Incomplete(ValidationFailure),

    /// A field name outside `name`, `phone`, `address`
    UnknownField { field: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Incomplete(failure) => write!(f, "{}", failure),
            ValidationError::UnknownField { field } => {
                write!(f, "Unknown order field: {}", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::Incomplete(_) => "VALIDATION_ERROR",
            ValidationError::UnknownField { .. } => "UNKNOWN_FIELD",
        }
    }
}

impl From<ValidationError> for OrderError {
    fn from(err: ValidationError) -> Self {
        OrderError::Validation(err)
    }
}

// =============================================================================
// Submission Errors
// =============================================================================

/// Errors raised while creating the order
#[derive(Debug)]
pub enum SubmissionError {
    /// The backend answered with a status other than 200
    Rejected { status: u16 },

    /// The request never produced a response
    Transport { message: String },

    /// A 200 response whose body has no usable order id
    InvalidResponse { message: String },

    /// The order was already created by this workflow
    AlreadySubmitted,
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Rejected { status } => {
                write!(f, "Order rejected by backend (status {})", status)
            }
            SubmissionError::Transport { message } => {
                write!(f, "Order request failed: {}", message)
            }
            SubmissionError::InvalidResponse { message } => {
                write!(f, "Invalid order response: {}", message)
            }
            SubmissionError::AlreadySubmitted => {
                write!(f, "The order has already been submitted")
            }
        }
    }
}

impl std::error::Error for SubmissionError {}

impl SubmissionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SubmissionError::Rejected { .. } => "ORDER_REJECTED",
            SubmissionError::Transport { .. } => "ORDER_TRANSPORT_ERROR",
            SubmissionError::InvalidResponse { .. } => "ORDER_INVALID_RESPONSE",
            SubmissionError::AlreadySubmitted => "ORDER_ALREADY_SUBMITTED",
        }
    }

    /// Whether the customer can usefully press "Place Order" again
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SubmissionError::Rejected { .. }
                | SubmissionError::Transport { .. }
                | SubmissionError::InvalidResponse { .. }
        )
    }
}

impl From<SubmissionError> for OrderError {
    fn from(err: SubmissionError) -> Self {
        OrderError::Submission(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read a configuration file
    IoError { message: String },

    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// A configuration value is unusable
    InvalidValue { field: String, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError { message } => write!(f, "Config IO error: {}", message),
            ConfigError::ParseError { file, message } => match file {
                Some(file) => write!(f, "Failed to parse config '{}': {}", file, message),
                None => write!(f, "Failed to parse config: {}", message),
            },
            ConfigError::InvalidValue { field, message } => {
                write!(f, "Invalid config value for '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for OrderError {
    fn from(err: ConfigError) -> Self {
        OrderError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<reqwest::Error> for OrderError {
    fn from(err: reqwest::Error) -> Self {
        OrderError::Submission(SubmissionError::Transport {
            message: err.to_string(),
        })
    }
}

impl From<serde_json::Error> for OrderError {
    fn from(err: serde_json::Error) -> Self {
        OrderError::Submission(SubmissionError::InvalidResponse {
            message: err.to_string(),
        })
    }
}

impl From<anyhow::Error> for OrderError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<ConfigError>() {
            Ok(config_err) => OrderError::Config(config_err),
            Err(err) => OrderError::Internal(err.to_string()),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for order workflow operations
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::draft::OrderField;

    fn incomplete() -> OrderError {
        OrderError::Validation(ValidationError::Incomplete(ValidationFailure {
            fields: vec![OrderField::Name, OrderField::Address],
            message: "Please complete these sections: name, address".to_string(),
        }))
    }

    #[test]
    fn test_validation_error_display_is_aggregated_message() {
        assert_eq!(
            incomplete().to_string(),
            "Please complete these sections: name, address"
        );
    }

    #[test]
    fn test_validation_error_code() {
        assert_eq!(incomplete().error_code(), "VALIDATION_ERROR");
        assert!(incomplete().is_validation());
    }

    #[test]
    fn test_rejected_display_and_code() {
        let err = OrderError::from(SubmissionError::Rejected { status: 503 });
        assert_eq!(err.to_string(), "Order rejected by backend (status 503)");
        assert_eq!(err.error_code(), "ORDER_REJECTED");
        assert!(!err.is_validation());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_non_submission_errors_are_not_retryable() {
        assert!(!incomplete().is_retryable());
        assert!(!OrderError::Internal("boom".to_string()).is_retryable());
    }

    #[test]
    fn test_retryable_submission_errors() {
        assert!(SubmissionError::Rejected { status: 500 }.is_retryable());
        assert!(
            SubmissionError::Transport {
                message: "connection refused".to_string()
            }
            .is_retryable()
        );
        assert!(!SubmissionError::AlreadySubmitted.is_retryable());
    }

    #[test]
    fn test_unknown_field_display() {
        let err = ValidationError::UnknownField {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown order field: email");
        assert_eq!(err.error_code(), "UNKNOWN_FIELD");
    }

    #[test]
    fn test_from_serde_json_error_is_invalid_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: OrderError = json_err.into();
        assert!(matches!(
            err,
            OrderError::Submission(SubmissionError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_from_anyhow_keeps_config_error() {
        let err: OrderError = anyhow::Error::new(ConfigError::InvalidValue {
            field: "orders_path".to_string(),
            message: "must start with '/'".to_string(),
        })
        .into();
        assert!(matches!(
            err,
            OrderError::Config(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_from_anyhow_other_is_internal() {
        let err: OrderError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "Internal error: boom");
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let err = OrderError::from(SubmissionError::AlreadySubmitted);
        assert!(err.source().is_some());
        assert!(OrderError::Internal("x".to_string()).source().is_none());
    }
}
