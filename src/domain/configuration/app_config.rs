//! Client configuration models.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, FeedbackTiming};

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Remote observation store.
    #[serde(default)]
    pub store: StoreConfig,
    /// Admin credential pair checked at login.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Persisted role attribute settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Feedback banner timing.
    #[serde(default)]
    pub feedback: FeedbackConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.store.validate()?;
        self.auth.validate()?;
        self.session.validate()?;
        self.feedback.validate()?;
        Ok(())
    }
}

/// Observation store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Base URL of the store API.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout() }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "base_url must be a base URL: {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:8080").expect("Default store URL must be valid")
}

fn default_timeout() -> u64 {
    10
}

/// Fixed admin credential pair.
#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    #[serde(default = "default_admin")]
    pub username: String,
    #[serde(default = "default_admin")]
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { username: default_admin(), password: default_admin() }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.username.is_empty() {
            return Err(AppError::InvalidConfig("auth.username must not be empty".to_string()));
        }
        if self.password.is_empty() {
            return Err(AppError::InvalidConfig("auth.password must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_admin() -> String {
    "admin".to_string()
}

/// Lifetime and scope of the persisted role attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    #[serde(default = "default_lifetime_hours")]
    pub lifetime_hours: u32,
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { lifetime_hours: default_lifetime_hours(), path: default_path() }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.lifetime_hours == 0 {
            return Err(AppError::InvalidConfig(
                "session.lifetime_hours must be greater than 0".to_string(),
            ));
        }
        if !self.path.starts_with('/') {
            return Err(AppError::InvalidConfig("session.path must start with '/'".to_string()));
        }
        Ok(())
    }

    pub fn lifetime(&self) -> chrono::Duration {
        chrono::Duration::hours(i64::from(self.lifetime_hours))
    }
}

fn default_lifetime_hours() -> u32 {
    24
}

fn default_path() -> String {
    "/".to_string()
}

/// Feedback banner timing in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeedbackConfig {
    #[serde(default = "default_visible_secs")]
    pub visible_secs: u64,
    #[serde(default = "default_fade_secs")]
    pub fade_secs: u64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self { visible_secs: default_visible_secs(), fade_secs: default_fade_secs() }
    }
}

impl FeedbackConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.visible_secs == 0 || self.fade_secs == 0 {
            return Err(AppError::InvalidConfig(
                "feedback delays must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timing(&self) -> FeedbackTiming {
        FeedbackTiming {
            visible_for: Duration::from_secs(self.visible_secs),
            fade_for: Duration::from_secs(self.fade_secs),
        }
    }
}

fn default_visible_secs() -> u64 {
    5
}

fn default_fade_secs() -> u64 {
    1
}
