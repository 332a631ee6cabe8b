//! Configuration loader for Ebios.
//!
//! Reads `config.toml` from the data directory (`~/.ebios/` in production)
//! into [`GlobalConfig`], falling back to defaults when the file is missing
//! or malformed, then applies environment overrides. A `.env` file in the
//! working directory is loaded first so its values count as environment.

use std::path::Path;

use secrecy::SecretString;

use ebios_types::config::GlobalConfig;
use ebios_types::error::ConfigError;

use crate::filesystem::config_path;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Load `.env` from the working directory, if present.
pub fn load_env_file() {
    match dotenv::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!("Failed to load .env: {err}"),
    }
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Apply environment overrides on top of file configuration.
///
/// `lookup` is `std::env::var` in production; tests pass a map.
pub fn apply_env_overrides<F>(config: &mut GlobalConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT") {
        config.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: "PORT",
            value: port,
        })?;
    }
    if let Some(host) = lookup("EBIOS_HOST") {
        config.server.host = host;
    }
    if let Some(model) = lookup("GEMINI_MODEL") {
        config.server.model = model;
    }
    if let Some(dir) = lookup("EBIOS_PUBLIC_DIR") {
        config.server.public_dir = dir;
    }
    if let Some(url) = lookup("EBIOS_API_BASE_URL") {
        config.client.api_base_url = url.trim_end_matches('/').to_string();
    }
    Ok(())
}

/// Load the file configuration and apply process environment overrides.
pub async fn load_config(data_dir: &Path) -> Result<GlobalConfig, ConfigError> {
    let mut config = load_global_config(data_dir).await;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

/// Read the upstream API key. Empty values count as missing.
pub fn resolve_api_key<F>(lookup: F) -> Result<SecretString, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(API_KEY_ENV)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .map(SecretString::from)
        .ok_or(ConfigError::MissingApiKey(API_KEY_ENV))
}
