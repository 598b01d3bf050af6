//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Backend API configuration.
    #[serde(default)]
    pub api: ApiConfig,
    /// User interface configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend. Empty means same origin / local proxy.
    #[serde(default)]
    pub base_url: String,
    /// Fixed request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

/// User interface configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Path of the persisted theme preference file.
    #[serde(default = "default_theme_file")]
    pub theme_file: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_file: default_theme_file(),
        }
    }
}

fn default_theme_file() -> String {
    ".arca-theme".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ARCA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
