// Configuration loading and parsing (config/settings.toml).
//
// The settings file is optional: every section has built-in defaults, so
// the tool runs with no files on disk at all. When the file is present it
// is parsed strictly and validated field-by-field.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use chrono::Datelike;

use crate::stats::scoring::ScoringWeights;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    FileUnreadable { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub season: SeasonConfig,
    pub fetch: FetchConfig,
    pub scoring: ScoringWeights,
    pub export: ExportConfig,
}

/// `[season]`: which NBA season to fetch. When `year` is omitted the
/// current season is inferred from the calendar.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeasonConfig {
    pub year: Option<u16>,
}

/// `[fetch]`: per-request timeout for the provider endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig { timeout_secs: 30 }
    }
}

/// `[export]`: where export files are written, relative to the working
/// directory.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            dir: "exports".to_string(),
        }
    }
}

impl Config {
    /// The season to fetch: the configured year, or the current season.
    pub fn resolved_season(&self) -> u16 {
        self.season.year.unwrap_or_else(current_season)
    }
}

/// Infer the current NBA season year. Seasons start in October, so before
/// October the previous year's season is still the one with data.
pub fn current_season() -> u16 {
    let now = chrono::Local::now();
    let year = now.year() as u16;
    if now.month() < 10 {
        year - 1
    } else {
        year
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `config/settings.toml` under `base_dir`,
/// falling back to defaults when the file does not exist.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("settings.toml");

    let config = if path.exists() {
        let text = std::fs::read_to_string(&path).map_err(|_| ConfigError::FileUnreadable {
            path: path.clone(),
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?
    } else {
        Config::default()
    };

    validate(&config)?;

    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working
/// directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileUnreadable {
        path: PathBuf::from("."),
    })?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.fetch.timeout_secs == 0 {
        return Err(ConfigError::ValidationError {
            field: "fetch.timeout_secs".into(),
            message: "must be greater than 0".into(),
        });
    }

    if !config.scoring.all_finite() {
        return Err(ConfigError::ValidationError {
            field: "scoring".into(),
            message: "all weights must be finite numbers".into(),
        });
    }

    if config.export.dir.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "export.dir".into(),
            message: "must not be empty".into(),
        });
    }

    if let Some(year) = config.season.year {
        if !(2000..=2100).contains(&year) {
            return Err(ConfigError::ValidationError {
                field: "season.year".into(),
                message: format!("implausible season year {year}"),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
