//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Base URLs are non-blank absolute URLs
//! - Timeouts are non-zero
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use crate::config::schema::ClientConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    BlankBaseUrl { key: String },
    InvalidBaseUrl { key: String, reason: String },
    ZeroTimeout { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::BlankBaseUrl { key } => {
                write!(f, "base_urls.{} is blank", key)
            }
            ValidationError::InvalidBaseUrl { key, reason } => {
                write!(f, "base_urls.{} is not a valid URL: {}", key, reason)
            }
            ValidationError::ZeroTimeout { field } => {
                write!(f, "transport.{} must be greater than zero", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a parsed configuration.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut keys: Vec<_> = config.base_urls.keys().collect();
    keys.sort();
    for key in keys {
        let value = &config.base_urls[key];
        if value.trim().is_empty() {
            errors.push(ValidationError::BlankBaseUrl { key: key.clone() });
        } else if let Err(e) = url::Url::parse(value) {
            errors.push(ValidationError::InvalidBaseUrl {
                key: key.clone(),
                reason: e.to_string(),
            });
        }
    }

    if config.transport.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "connect_timeout_secs" });
    }
    if config.transport.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "request_timeout_secs" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
