//! Starterpack configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use starterpack_store::{FileStorage, StoreOptions, DEFAULT_STORAGE_KEY};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::features::Features;

/// Default config file name
pub const CONFIG_FILE: &str = "starterpack.toml";

/// Top-level configuration (starterpack.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how the theme config is persisted
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory for stored files; the platform config dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_key")]
    pub key: String,
    /// Quiet period before an edit is written
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_debounce_ms() -> u64 {
    500
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            key: default_key(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl StorageConfig {
    /// Configured dir, else [`FileStorage::default_dir`]
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.dir.clone().or_else(FileStorage::default_dir)
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions::default()
            .with_key(self.key.clone())
            .with_debounce(Duration::from_millis(self.debounce_ms))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is not set
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file, or from `starterpack.toml` in a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = Self::resolve_path(path);

        if !config_path.exists() {
            anyhow::bail!("No {} found at {}", CONFIG_FILE, path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        tracing::debug!(path = %config_path.display(), "loaded app config");
        Ok(config)
    }

    /// Like [`AppConfig::load`], but a missing file yields the default config
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if Self::resolve_path(path).exists() {
            return Self::load(path);
        }
        tracing::warn!(path = %path.display(), "no app config found, using defaults");
        Ok(Self::default())
    }

    fn resolve_path(path: &Path) -> PathBuf {
        if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage.key, "starterpack-theme-config");
        assert_eq!(config.storage.debounce_ms, 500);
        assert_eq!(config.logging.level, "info");
        assert!(!config.features.dev_pages);
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [storage]
            dir = "/var/lib/starterpack"

            [features]
            dev_pages = true
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.dir, Some(PathBuf::from("/var/lib/starterpack")));
        assert_eq!(config.storage.key, default_key());
        assert!(config.features.dev_pages);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.storage.debounce_ms = 250;
        config.logging.level = "starterpack_store=trace".into();

        let text = config.to_toml().unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_store_options() {
        let storage = StorageConfig {
            dir: None,
            key: "k".into(),
            debounce_ms: 20,
        };
        let options = storage.store_options();
        assert_eq!(options.storage_key, "k");
        assert_eq!(options.debounce, Duration::from_millis(20));
    }
}
