//! Configuration management for dramalines
//!
//! Config is stored at ~/.config/dramalines/config.toml. Every key is
//! optional; command-line flags and environment variables take precedence.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{DataClient, LoadError, DEFAULT_CATALOG_PATH};

/// Environment variable overriding the data location
pub const BASE_ENV: &str = "DRAMALINES_BASE";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Data location: HTTP(S) base URL or local directory
    pub base: Option<String>,
    /// Catalog reference relative to the base
    pub catalog: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Log filter directive (e.g. "dramalines=debug")
    pub log_filter: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/dramalines/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dramalines").join("config.toml"))
    }

    /// Load config from the default path, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| Self::load_from(&p).ok())
            .unwrap_or_default()
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("Could not parse {}", path.display()))?;
        Ok(config)
    }

    /// Data location with fallback chain:
    /// 1. Explicit override (command-line flag)
    /// 2. Environment variable DRAMALINES_BASE
    /// 3. `base` from the config file
    /// 4. Current directory
    pub fn base_location(&self, flag: Option<&str>) -> String {
        if let Some(base) = flag {
            return base.to_string();
        }

        if let Ok(base) = std::env::var(BASE_ENV) {
            if !base.trim().is_empty() {
                return base;
            }
        }

        self.base.clone().unwrap_or_else(|| ".".to_string())
    }

    /// Catalog reference, flag first
    pub fn catalog_path(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.catalog.clone())
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string())
    }

    /// Request timeout, if configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs)
    }

    /// Build the data client described by this config and any flag overrides
    pub fn client(&self, base: Option<&str>, catalog: Option<&str>) -> Result<DataClient, LoadError> {
        let mut client = DataClient::new(&self.base_location(base))?
            .with_catalog_path(self.catalog_path(catalog));
        if let Some(timeout) = self.timeout() {
            client = client.with_timeout(timeout);
        }
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.base.is_none());
        assert!(config.timeout().is_none());
        assert_eq!(config.catalog_path(None), "data/catalog.yaml");
    }

    #[test]
    fn test_flag_wins() {
        let config = Config {
            base: Some("/srv/drama".into()),
            catalog: Some("index.yaml".into()),
            ..Config::default()
        };
        assert_eq!(config.base_location(Some("http://localhost:8000")), "http://localhost:8000");
        assert_eq!(config.catalog_path(Some("other.yaml")), "other.yaml");
        assert_eq!(config.catalog_path(None), "index.yaml");
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
base = "https://example.com/drama"
timeout_secs = 5
log_filter = "dramalines=debug"
"#,
        )
        .unwrap();
        assert_eq!(config.base.as_deref(), Some("https://example.com/drama"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_zero_timeout_is_ignored() {
        let config = Config {
            timeout_secs: Some(0),
            ..Config::default()
        };
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        assert!(Config::load_from(Path::new("/nonexistent/dramalines.toml")).is_err());
    }
}
