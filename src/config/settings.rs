//! Base URL lookup for `#[service(setting = "...")]` interfaces.

use std::collections::HashMap;

use crate::config::schema::ClientConfig;
use crate::error::ConfigurationError;

/// Prefix under which base URL settings are reported.
pub const SETTING_PREFIX: &str = "rest.proxy";

/// Resolves a setting key to a base URL.
pub trait SettingsProvider: Send + Sync {
    /// Fails with [`ConfigurationError::MissingSetting`] when the key is
    /// unknown or its value is blank.
    fn get_base_url(&self, key: &str) -> Result<String, ConfigurationError>;
}

/// Settings read from the `[base_urls]` table of a [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigSettings {
    base_urls: HashMap<String, String>,
}

impl ConfigSettings {
    pub fn new(base_urls: HashMap<String, String>) -> Self {
        Self { base_urls }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_urls.clone())
    }
}

impl SettingsProvider for ConfigSettings {
    fn get_base_url(&self, key: &str) -> Result<String, ConfigurationError> {
        match self.base_urls.get(key) {
            Some(value) if !value.trim().is_empty() => Ok(value.clone()),
            _ => Err(ConfigurationError::MissingSetting {
                setting: format!("{SETTING_PREFIX}:{key}"),
            }),
        }
    }
}
