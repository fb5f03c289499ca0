//! Cart configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Directory under the workspace root holding config and local storage.
pub const CONFIG_DIR: &str = ".rocketcart";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "ROCKETCART_API_URL";

/// Configuration loaded from `.rocketcart/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartConfig {
    /// Storefront API configuration.
    #[serde(default)]
    pub api: ApiConfig,
    /// Local storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Where `clear` sends the user afterwards.
    #[serde(default)]
    pub navigation: NavigationConfig,
}

impl CartConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

/// Storefront API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL serving `stock/{id}` and `products/{id}`.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum attempts per request, counting the first one.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay between attempts in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("api.timeout_secs must be greater than 0"));
        }
        if self.max_retries == 0 {
            return Err(AppError::config_error("api.max_retries must be greater than 0"));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(AppError::config_error(format!(
                "api.base_url cannot be used as a base URL: {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

/// Local storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Key holding the serialized cart.
    #[serde(default = "default_storage_key")]
    pub key: String,
    /// Storage file name inside [`CONFIG_DIR`].
    #[serde(default = "default_storage_file")]
    pub file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { key: default_storage_key(), file: default_storage_file() }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.key.trim().is_empty() {
            return Err(AppError::config_error("storage.key must not be empty"));
        }
        if self.file.trim().is_empty() {
            return Err(AppError::config_error("storage.file must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationConfig {
    #[serde(default = "default_root_url")]
    pub root_url: Url,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { root_url: default_root_url() }
    }
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:3333/").expect("Default API URL must be valid")
}

fn default_root_url() -> Url {
    Url::parse("http://localhost:3000/").expect("Default root URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    1
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_storage_key() -> String {
    "@RocketShoes:cart".to_string()
}

fn default_storage_file() -> String {
    "local_storage.json".to_string()
}
