//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::http::status::SuccessPolicy;
use crate::routing::template::PlaceholderPolicy;

/// Root configuration for REST clients.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URLs by setting key, as referenced by `#[service(setting = "...")]`.
    pub base_urls: HashMap<String, String>,

    /// HTTP transport settings.
    pub transport: TransportConfig,

    /// Response and template handling policies.
    pub policy: PolicyConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Parse a configuration from TOML text (no semantic validation).
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Transport configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TransportConfig {
    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Total request timeout in seconds.
    pub request_timeout_secs: u64,

    /// `User-Agent` header sent with every call.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 5,
            request_timeout_secs: 30,
            user_agent: concat!("rest-proxy/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Policies for the two behaviors left open by the protocol.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PolicyConfig {
    /// Which statuses count as success.
    pub success: SuccessPolicy,

    /// What to do with a placeholder the request has no value for.
    pub unresolved_placeholder: PlaceholderPolicy,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "rest_proxy=info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert!(config.base_urls.is_empty());
        assert_eq!(config.transport.connect_timeout_secs, 5);
        assert_eq!(config.transport.request_timeout_secs, 30);
        assert_eq!(config.policy.success, SuccessPolicy::ExactOk);
        assert_eq!(config.policy.unresolved_placeholder, PlaceholderPolicy::Verbatim);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(ClientConfig::from_toml_str("").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = ClientConfig::from_toml_str(
            r#"
            [base_urls]
            ServerEndpoint = "http://localhost:5000"

            [transport]
            connect_timeout_secs = 2
            request_timeout_secs = 10
            user_agent = "orders-client"

            [policy]
            success = "any_success"
            unresolved_placeholder = "reject"

            [logging]
            filter = "rest_proxy=debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_urls["ServerEndpoint"], "http://localhost:5000");
        assert_eq!(config.transport.connect_timeout_secs, 2);
        assert_eq!(config.transport.user_agent, "orders-client");
        assert_eq!(config.policy.success, SuccessPolicy::AnySuccess);
        assert_eq!(config.policy.unresolved_placeholder, PlaceholderPolicy::Reject);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(ClientConfig::from_toml_str("[policy]\nsuccess = \"sometimes\"").is_err());
    }
}
