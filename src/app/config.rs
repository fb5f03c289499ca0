//! Configuration loading for a cart workspace.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::{API_URL_ENV, AppError, CONFIG_DIR, CONFIG_FILE, CartConfig};

/// Directory holding config and local storage for the workspace at `root`.
pub fn config_dir(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR)
}

/// Load `.rocketcart/config.toml` under `root`, falling back to defaults when absent.
///
/// `ROCKETCART_API_URL` takes precedence over `api.base_url`.
pub fn load_config(root: &Path) -> Result<CartConfig, AppError> {
    let path = config_dir(root).join(CONFIG_FILE);
    let mut config = match fs::read_to_string(&path) {
        Ok(content) => toml::from_str(&content)?,
        Err(err) if err.kind() == ErrorKind::NotFound => CartConfig::default(),
        Err(err) => return Err(err.into()),
    };

    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

fn apply_env_overrides(config: &mut CartConfig) -> Result<(), AppError> {
    if let Ok(value) = std::env::var(API_URL_ENV) {
        let value = value.trim();
        if !value.is_empty() {
            config.api.base_url = Url::parse(value).map_err(|e| AppError::InvalidUrl {
                url: value.to_string(),
                details: e.to_string(),
            })?;
        }
    }
    Ok(())
}
