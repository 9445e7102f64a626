pub mod app_config;
pub mod loader;

pub use app_config::{AppConfig, AuthConfig, FeedbackConfig, SessionConfig, StoreConfig};
pub use loader::{CONFIG_ENV, HOME_ENV, load_config, load_config_from, parse_config_content, state_dir};
