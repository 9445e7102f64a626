//! Configuration file lookup and parsing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppConfig, AppError};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "WXDESK_CONFIG";

/// Environment variable overriding the state directory's parent.
pub const HOME_ENV: &str = "WXDESK_HOME";

/// Directory holding `config.toml` and `session.json`.
pub fn state_dir() -> Result<PathBuf, AppError> {
    let home = match std::env::var_os(HOME_ENV) {
        Some(home) => PathBuf::from(home),
        None => dirs::home_dir().ok_or_else(|| {
            AppError::config_error("Cannot determine home directory; set WXDESK_HOME")
        })?,
    };
    Ok(home.join(".wxdesk"))
}

/// Load configuration from `$WXDESK_CONFIG`, the state directory, or defaults.
pub fn load_config() -> Result<AppConfig, AppError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return load_config_from(Path::new(&path));
    }

    let path = state_dir()?.join("config.toml");
    if path.exists() {
        return load_config_from(&path);
    }

    debug!("no config file found, using defaults");
    Ok(AppConfig::default())
}

/// Load and validate configuration from an explicit path.
pub fn load_config_from(path: &Path) -> Result<AppConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        AppError::Configuration(format!("Cannot read config {}: {}", path.display(), err))
    })?;
    debug!(path = %path.display(), "loading config");
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
