//! Configuration management for flightdesk.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::collections::HashSet;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::validation::{normalize, CityRegistry, Validator, DEFAULT_CITIES, DEFAULT_SUGGESTION_CUTOFF};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "flightdesk";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "flights.db";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "FLIGHTDESK_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FLIGHTDESK_`, sections split on `__`)
/// 2. TOML config file at `~/.config/flightdesk/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Validation configuration.
    pub validation: ValidationConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    /// Defaults to `~/.local/share/flightdesk/flights.db`
    pub database_path: Option<PathBuf>,
}

/// Validation-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Recognized departure and destination cities, in title case.
    pub cities: Vec<String>,
    /// Minimum similarity (0.0 to 1.0) for a did-you-mean suggestion.
    pub suggestion_cutoff: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            cities: DEFAULT_CITIES.iter().map(ToString::to_string).collect(),
            suggestion_cutoff: DEFAULT_SUGGESTION_CUTOFF,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let validation = &self.validation;

        if validation.cities.is_empty() {
            return Err(Error::ConfigValidation {
                message: "validation.cities must name at least one city".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for city in &validation.cities {
            let normalized = normalize(city);
            if normalized.is_empty() {
                return Err(Error::ConfigValidation {
                    message: "validation.cities contains an empty name".to_string(),
                });
            }
            if *city != normalized {
                return Err(Error::ConfigValidation {
                    message: format!(
                        "city '{city}' must be written in title case as '{normalized}'"
                    ),
                });
            }
            if !seen.insert(normalized) {
                return Err(Error::ConfigValidation {
                    message: format!("duplicate city: {city}"),
                });
            }
        }

        if !(0.0..=1.0).contains(&validation.suggestion_cutoff) {
            return Err(Error::ConfigValidation {
                message: format!(
                    "suggestion_cutoff ({}) must be between 0.0 and 1.0",
                    validation.suggestion_cutoff
                ),
            });
        }

        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }

    /// Build the city registry described by this configuration.
    #[must_use]
    pub fn city_registry(&self) -> CityRegistry {
        CityRegistry::new(&self.validation.cities).with_cutoff(self.validation.suggestion_cutoff)
    }

    /// Build a validator over the configured city registry.
    #[must_use]
    pub fn validator(&self) -> Validator {
        Validator::new(self.city_registry())
    }
}
