//! User settings for Spendbook
//!
//! Settings live in `config.json` under the base directory. The storage
//! backend is chosen here once at start-up; nothing switches it afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// Which backend the repositories are built on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// JSON collection files in the data directory (default)
    #[default]
    Local,
    /// Webhook-style HTTP API
    Remote,
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

impl FromStr for StorageMode {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" | "api" => Ok(Self::Remote),
            other => Err(TrackerError::Config(format!(
                "Unknown storage mode '{}' (expected 'local' or 'remote')",
                other
            ))),
        }
    }
}

/// Remote API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sent as `X-API-Key` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
        }
    }
}

/// User settings for Spendbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub storage: StorageMode,

    #[serde(default)]
    pub remote: RemoteSettings,

    /// Currency prefix used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_base_url() -> String {
    "http://localhost:5678".to_string()
}

fn default_currency() -> String {
    "RM".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            storage: StorageMode::default(),
            remote: RemoteSettings::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub storage: Option<StorageMode>,
    pub api_url: Option<String>,
    pub api_key: Option<String>,
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Apply start-up overrides; empty strings count as "not given"
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(mode) = overrides.storage {
            self.storage = mode;
        }
        if let Some(url) = overrides.api_url.filter(|u| !u.trim().is_empty()) {
            self.remote.base_url = url;
        }
        if let Some(key) = overrides.api_key.filter(|k| !k.trim().is_empty()) {
            self.remote.api_key = Some(key);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.storage, StorageMode::Local);
        assert_eq!(settings.remote.base_url, "http://localhost:5678");
        assert!(settings.remote.api_key.is_none());
        assert_eq!(settings.currency_symbol, "RM");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.storage = StorageMode::Remote;
        settings.remote.api_key = Some("secret".into());
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.storage, StorageMode::Remote);
        assert_eq!(loaded.remote.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"storage": "remote"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.storage, StorageMode::Remote);
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default().with_overrides(SettingsOverrides {
            storage: Some(StorageMode::Remote),
            api_url: Some("https://n8n.example.com".into()),
            api_key: Some("".into()),
        });

        assert_eq!(settings.storage, StorageMode::Remote);
        assert_eq!(settings.remote.base_url, "https://n8n.example.com");
        assert!(settings.remote.api_key.is_none());
    }

    #[test]
    fn test_storage_mode_parse() {
        assert_eq!("Local".parse::<StorageMode>().unwrap(), StorageMode::Local);
        assert_eq!("remote".parse::<StorageMode>().unwrap(), StorageMode::Remote);
        assert!("sqlite".parse::<StorageMode>().is_err());
    }
}
