//! Configuration loading for the artgrid TUI.
//!
//! Read from TOML when a path is given via `--config` or `ARTGRID_CONFIG`.
//! Without one, the built-in defaults point at the public artworks API.

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Ceiling for `bulk_select.max_extra_pages`: 100 rows never need more.
pub const MAX_EXTRA_PAGES_LIMIT: usize = 9;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuiConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub tick_rate_ms: u64,
    pub log_path: PathBuf,
    pub bulk_select: BulkSelectConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BulkSelectConfig {
    /// Pages one bulk selection may fetch beyond the current page.
    pub max_extra_pages: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: 10_000,
            tick_rate_ms: 250,
            log_path: PathBuf::from("artgrid.log"),
            bulk_select: BulkSelectConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for BulkSelectConfig {
    fn default() -> Self {
        Self { max_extra_pages: 8 }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "gallery".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = match config_path_from_args().or_else(config_path_from_env) {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must be an http(s) URL".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.bulk_select.max_extra_pages > MAX_EXTRA_PAGES_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "bulk_select.max_extra_pages",
                reason: format!("must be <= {}", MAX_EXTRA_PAGES_LIMIT),
            });
        }
        if self.theme.name.to_ascii_lowercase() != "gallery" {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'gallery' is supported".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("ARTGRID_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TuiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = TuiConfig::from_toml(
            r#"
            request_timeout_ms = 2500

            [bulk_select]
            max_extra_pages = 1
            "#,
        )
        .unwrap();

        assert_eq!(config.request_timeout_ms, 2500);
        assert_eq!(config.bulk_select.max_extra_pages, 1);
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_example_config_is_valid() {
        let config = TuiConfig::from_toml(include_str!("../artgrid.example.toml")).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.bulk_select.max_extra_pages, 8);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = TuiConfig::from_toml("page_size = 50");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artgrid.toml");
        std::fs::write(&path, "api_base_url = \"http://localhost:8080/api/v1\"\n").unwrap();

        let config = TuiConfig::from_path(&path).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080/api/v1");
    }
}
