//! Application Configuration
//! Explicit settings object built once at startup and owned by the app state.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "volley_panel.json";

/// Hard upper bound for the trial count slider.
pub const TRIALS_LIMIT: u64 = 50;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Separator must be a single ASCII character, got {0:?}")]
    BadSeparator(String),
    #[error("max_trials must be in 1..=50, got {0}")]
    BadMaxTrials(u64),
}

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub export_file_name: String,
    pub separator: String,
    pub victory_label: String,
    pub max_trials: u64,
    pub default_trials: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("tecnico_volei.csv"),
            export_file_name: "tecnico_volei_export.csv".to_string(),
            separator: ";".to_string(),
            victory_label: "Vitória".to_string(),
            max_trials: TRIALS_LIMIT,
            default_trials: 10,
        }
    }
}

impl AppConfig {
    /// Parse a config from JSON text and validate it.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            log::info!("Loading config from {}", path.display());
            Self::load(path)
        } else {
            log::warn!("{} not found, using default settings", path.display());
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.separator_byte()?;
        if self.max_trials == 0 || self.max_trials > TRIALS_LIMIT {
            return Err(ConfigError::BadMaxTrials(self.max_trials));
        }
        Ok(())
    }

    /// Field separator as the byte polars expects.
    pub fn separator_byte(&self) -> Result<u8, ConfigError> {
        match self.separator.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(ConfigError::BadSeparator(self.separator.clone())),
        }
    }

    /// Default trial count, clamped into the slider range.
    pub fn initial_trials(&self) -> u64 {
        self.default_trials.clamp(1, self.max_trials.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard() {
        let config = AppConfig::default();
        assert_eq!(config.data_path, PathBuf::from("tecnico_volei.csv"));
        assert_eq!(config.export_file_name, "tecnico_volei_export.csv");
        assert_eq!(config.separator_byte().unwrap(), b';');
        assert_eq!(config.max_trials, 50);
        assert_eq!(config.initial_trials(), 10);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "victory_label": "Victory" }"#).unwrap();
        assert_eq!(config.victory_label, "Victory");
        assert_eq!(config.separator, ";");
        assert_eq!(config.default_trials, 10);
    }

    #[test]
    fn rejects_multi_char_separator() {
        let err = AppConfig::from_json(r#"{ "separator": ";;" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::BadSeparator(_)));
    }

    #[test]
    fn rejects_out_of_range_max_trials() {
        let err = AppConfig::from_json(r#"{ "max_trials": 80 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::BadMaxTrials(80)));
    }

    #[test]
    fn initial_trials_is_clamped() {
        let config = AppConfig {
            default_trials: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.initial_trials(), 1);

        let config = AppConfig {
            default_trials: 99,
            max_trials: 20,
            ..AppConfig::default()
        };
        assert_eq!(config.initial_trials(), 20);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
