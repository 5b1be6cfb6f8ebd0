use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::search::{SearchOptions, DEFAULT_DISTANCE, DEFAULT_LOCATION, DEFAULT_THRESHOLD};
use crate::core::deck::DEFAULT_SWIPE_THRESHOLD_PX;
use crate::core::engine::DEFAULT_CACHE_SIZE;
use crate::models::requests::{DEFAULT_GUESTS, DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};
use crate::models::{FilterCriteria, PriceRange};
use crate::services::DEFAULT_CATALOG_SIZE;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub filters: FilterDefaults,
    #[serde(default)]
    pub deck: DeckSettings,
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_size")]
    pub size: usize,
    /// Fixed seed for a reproducible catalogue; random when absent
    pub seed: Option<u64>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            size: default_catalog_size(),
            seed: None,
        }
    }
}

fn default_catalog_size() -> usize { DEFAULT_CATALOG_SIZE }

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_distance")]
    pub distance: u32,
    #[serde(default = "default_location")]
    pub location: usize,
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            distance: default_distance(),
            location: default_location(),
            cache_size: default_cache_size(),
        }
    }
}

impl SearchSettings {
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            threshold: self.threshold,
            distance: self.distance,
            location: self.location,
        }
    }
}

fn default_threshold() -> f64 { DEFAULT_THRESHOLD }
fn default_distance() -> u32 { DEFAULT_DISTANCE }
fn default_location() -> usize { DEFAULT_LOCATION }
fn default_cache_size() -> usize { DEFAULT_CACHE_SIZE }

/// Values the matches view resets its filters to
#[derive(Debug, Clone, Deserialize)]
pub struct FilterDefaults {
    #[serde(default = "default_price_min")]
    pub price_min: u32,
    #[serde(default = "default_price_max")]
    pub price_max: u32,
    #[serde(default = "default_guests")]
    pub guests: u32,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            price_min: default_price_min(),
            price_max: default_price_max(),
            guests: default_guests(),
        }
    }
}

impl FilterDefaults {
    pub fn price(&self) -> PriceRange {
        PriceRange::new(self.price_min, self.price_max)
    }
}

fn default_price_min() -> u32 { DEFAULT_PRICE_MIN }
fn default_price_max() -> u32 { DEFAULT_PRICE_MAX }
fn default_guests() -> u32 { DEFAULT_GUESTS }

#[derive(Debug, Clone, Deserialize)]
pub struct DeckSettings {
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold_px: f64,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            swipe_threshold_px: default_swipe_threshold(),
        }
    }
}

fn default_swipe_threshold() -> f64 { DEFAULT_SWIPE_THRESHOLD_PX }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with QUICKSTAY__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., QUICKSTAY__CRITERIA__SEARCH -> criteria.search
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Parse settings from TOML text, without consulting the environment
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Message(e.to_string()))
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("QUICKSTAY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
