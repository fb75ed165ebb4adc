/// Application configuration
///
/// Settings are read from `config.json` in the user's config directory:
/// - Linux: ~/.config/styleshift/config.json
/// - macOS: ~/Library/Application Support/styleshift/config.json
/// - Windows: %APPDATA%\styleshift\config.json
///
/// Every field is optional. Environment variables override the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

const ENV_TRANSFER_DELAY_MS: &str = "STYLESHIFT_TRANSFER_DELAY_MS";
const ENV_THEME: &str = "STYLESHIFT_THEME";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeChoice::Light),
            "dark" => Some(ThemeChoice::Dark),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// How long a simulated transfer keeps the processing state (ms)
    pub transfer_delay_ms: u64,
    pub theme: ThemeChoice,
    /// Fetched images are downsized to fit this square (px)
    pub image_max_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            transfer_delay_ms: 1500,
            theme: ThemeChoice::Light,
            image_max_size: 512,
        }
    }
}

impl AppConfig {
    /// Load the config, falling back to defaults on any problem.
    pub fn load() -> Self {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => match Self::from_file(&path) {
                Ok(config) => {
                    info!("⚙️  Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Ignoring config file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            _ => Self::default(),
        };

        if let Err(e) = config.apply_env(|key| std::env::var(key).ok()) {
            warn!("Ignoring environment override: {}", e);
        }

        config
    }

    /// Where the config file lives, if the platform has a config directory
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("styleshift");
        path.push("config.json");
        Some(path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup. Stops at the first bad value;
    /// earlier overrides stay applied.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_TRANSFER_DELAY_MS) {
            let delay = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: ENV_TRANSFER_DELAY_MS,
                    value: value.clone(),
                })?;
            self.transfer_delay_ms = delay;
        }

        if let Some(value) = lookup(ENV_THEME) {
            self.theme = ThemeChoice::parse(&value).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_THEME,
                value: value.clone(),
            })?;
        }

        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.transfer_delay_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "transfer_delay_ms",
                value: "0".to_string(),
            });
        }
        if self.image_max_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "image_max_size",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    pub fn transfer_delay(&self) -> Duration {
        Duration::from_millis(self.transfer_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.transfer_delay(), Duration::from_millis(1500));
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.image_max_size, 512);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(config.theme, ThemeChoice::Dark);
        assert_eq!(config.transfer_delay_ms, 1500);
    }

    #[test]
    fn test_zero_delay_rejected() {
        let err = AppConfig::from_json(r#"{"transfer_delay_ms": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "transfer_delay_ms", .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"transfer_delay_ms": 250, "image_max_size": 128}"#).unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.transfer_delay_ms, 250);
        assert_eq!(config.image_max_size, 128);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_env(env(&[(ENV_TRANSFER_DELAY_MS, "300"), (ENV_THEME, "Dark")]))
            .unwrap();

        assert_eq!(config.transfer_delay_ms, 300);
        assert_eq!(config.theme, ThemeChoice::Dark);
    }

    #[test]
    fn test_bad_env_value_rejected() {
        let mut config = AppConfig::default();
        let err = config
            .apply_env(env(&[(ENV_TRANSFER_DELAY_MS, "soon")]))
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert_eq!(config.transfer_delay_ms, 1500);
    }
}
