//! Application configuration.
//!
//! `config.toml` next to the crate manifest is embedded at build time. Every
//! field has a default, so a partial file is valid; a file that fails to
//! parse is logged and replaced by [`AppConfig::default`].

use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub default_locale: String,
    pub toast_timeout_ms: u32,
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: 3000,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_locale: "en-US".to_string(),
            toast_timeout_ms: 4000,
            log_level: "debug".to_string(),
        }
    }
}

impl AppConfig {
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.ui.log_level)
            .map_err(|_| ConfigError::LogLevel(self.ui.log_level.clone()))
    }
}

pub fn parse_config(source: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(source)?;
    config.log_level()?;
    Ok(config)
}

/// Loads the embedded configuration, falling back to defaults.
pub fn load_config() -> AppConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; using default configuration", e);
            AppConfig::default()
        }
    }
}

pub fn use_app_config() -> AppConfig {
    leptos::prelude::use_context::<AppConfig>().expect("AppConfig not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = parse_config(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.ui.default_locale, "en-US");
        assert_eq!(config.log_level().unwrap(), log::Level::Debug);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = parse_config("[api]\nbase_url = \"https://api.example.com\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_invalid_config_is_reported() {
        assert!(matches!(parse_config("[api]\nport = \"x\""), Err(ConfigError::Parse(_))));
        assert!(matches!(
            parse_config("[ui]\nlog_level = \"loud\""),
            Err(ConfigError::LogLevel(level)) if level == "loud"
        ));
    }
}
