//! Response classification.
//!
//! # Responsibilities
//! - Decide whether an executed call succeeded
//! - Classify failures as transport-level or status-level, in that order
//!
//! # Design Decisions
//! - Only `200 OK` counts as success by default; the 2xx family is opt-in

use serde::{Deserialize, Serialize};

use crate::error::HttpError;
use crate::http::transport::HttpOutcome;

/// Which status codes count as success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessPolicy {
    /// Only `200`.
    #[default]
    ExactOk,
    /// Any `2xx`.
    AnySuccess,
}

impl SuccessPolicy {
    pub fn is_success(&self, status: u16) -> bool {
        match self {
            SuccessPolicy::ExactOk => status == 200,
            SuccessPolicy::AnySuccess => (200..300).contains(&status),
        }
    }
}

/// Validate an outcome, returning its body on success.
pub fn validate(outcome: HttpOutcome, policy: SuccessPolicy) -> Result<String, HttpError> {
    if let Some(error) = outcome.transport_error {
        return Err(HttpError::Transport {
            message: error.to_string(),
            source: error,
        });
    }

    if !policy.is_success(outcome.status) {
        return Err(HttpError::Status {
            status: outcome.status,
            description: outcome.status_description,
        });
    }

    Ok(outcome.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn outcome(status: u16, description: &str) -> HttpOutcome {
        HttpOutcome {
            status,
            status_description: description.to_string(),
            content: "body".to_string(),
            transport_error: None,
        }
    }

    #[test]
    fn test_exact_ok_policy() {
        let policy = SuccessPolicy::ExactOk;
        assert!(policy.is_success(200));
        assert!(!policy.is_success(201));
        assert!(!policy.is_success(204));
        assert!(!policy.is_success(404));
    }

    #[test]
    fn test_any_success_policy() {
        let policy = SuccessPolicy::AnySuccess;
        assert!(policy.is_success(200));
        assert!(policy.is_success(201));
        assert!(policy.is_success(204));
        assert!(!policy.is_success(199));
        assert!(!policy.is_success(300));
    }

    #[test]
    fn test_ok_returns_body() {
        let body = validate(outcome(200, "OK"), SuccessPolicy::ExactOk).unwrap();
        assert_eq!(body, "body");
    }

    #[test]
    fn test_created_rejected_by_default() {
        let err = validate(outcome(201, "Created"), SuccessPolicy::ExactOk).unwrap_err();
        assert!(err.to_string().contains("Created"));
        assert_eq!(err.status(), Some(201));
    }

    #[test]
    fn test_created_accepted_by_any_success() {
        assert!(validate(outcome(201, "Created"), SuccessPolicy::AnySuccess).is_ok());
    }

    #[test]
    fn test_status_description_in_message() {
        let err = validate(outcome(503, "Service Unavailable"), SuccessPolicy::ExactOk).unwrap_err();
        assert_eq!(err.to_string(), "Server returned error: Service Unavailable");
    }

    #[test]
    fn test_transport_error_checked_first() {
        let mut outcome = outcome(200, "OK");
        outcome.transport_error = Some(Box::new(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "operation timed out",
        )));

        let err = validate(outcome, SuccessPolicy::ExactOk).unwrap_err();
        assert!(err.to_string().contains("operation timed out"));
        let io = err
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>())
            .unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::TimedOut);
    }
}
