//! Application configuration
//!
//! Optional `revenue_calculator.json` in the working directory. Any field
//! left out keeps its default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::revenue::CellPolicy;

pub const CONFIG_FILE_NAME: &str = "revenue_calculator.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid year range {first}..={last}")]
    YearRange { first: i32, last: i32 },
    #[error("Default year {year} is outside {first}..={last}")]
    DefaultYear { year: i32, first: i32, last: i32 },
}

/// Window and table settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub first_year: i32,
    pub last_year: i32,
    pub default_year: i32,
    pub chart_cell_policy: CellPolicy,
    pub open_after_export: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Revenue Calculator".to_string(),
            window_size: [600.0, 700.0],
            min_window_size: [480.0, 560.0],
            first_year: 2015,
            last_year: 2025,
            default_year: 2015,
            chart_cell_policy: CellPolicy::default(),
            open_after_export: true,
        }
    }
}

impl AppConfig {
    /// Config file path in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// Load from `path`; a missing file gives the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the working directory, falling back to defaults on error.
    pub fn load_or_default() -> Self {
        let path = Self::config_path();
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_year > self.last_year {
            return Err(ConfigError::YearRange {
                first: self.first_year,
                last: self.last_year,
            });
        }
        if !self.years().contains(&self.default_year) {
            return Err(ConfigError::DefaultYear {
                year: self.default_year,
                first: self.first_year,
                last: self.last_year,
            });
        }
        Ok(())
    }

    /// Years offered by the year selector.
    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.first_year..=self.last_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.years().count(), 11);
        assert_eq!(config.default_year, 2015);
        assert_eq!(config.chart_cell_policy, CellPolicy::DigitsOnly);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config(r#"{ "chart_cell_policy": "decimal", "last_year": 2030 }"#);
        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.chart_cell_policy, CellPolicy::Decimal);
        assert_eq!(config.last_year, 2030);
        assert_eq!(config.first_year, 2015);
        assert_eq!(config.window_title, "Revenue Calculator");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let file = write_config("{ not json");
        assert!(matches!(
            AppConfig::load_from(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_inverted_year_range_is_rejected() {
        let file = write_config(r#"{ "first_year": 2025, "last_year": 2015 }"#);
        assert!(matches!(
            AppConfig::load_from(file.path()),
            Err(ConfigError::YearRange { .. })
        ));
    }

    #[test]
    fn test_default_year_outside_range_is_rejected() {
        let config = AppConfig {
            default_year: 2040,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DefaultYear { year: 2040, .. })
        ));
    }
}
