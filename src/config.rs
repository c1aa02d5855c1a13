use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::models::{DealCategory, ListingRequest, UserRole};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub listing: ListingSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> String { "fixtures/catalog.json".to_string() }

/// Listing the preview binary renders
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingSettings {
    #[serde(default)]
    pub query: String,
    pub category: Option<DealCategory>,
    #[serde(default)]
    pub free_only: bool,
    pub radius_km: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub max_results: Option<usize>,
}

impl ListingSettings {
    pub fn to_request(&self) -> ListingRequest {
        ListingRequest {
            query: self.query.clone(),
            category: self.category,
            free_only: self.free_only,
            radius_km: self.radius_km,
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// Which fixture user the session impersonates; anonymous when unset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionSettings {
    pub role: Option<UserRole>,
}

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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SURPLUS__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SURPLUS__LISTING__RADIUS_KM -> listing.radius_km
            .add_source(
                Environment::with_prefix("SURPLUS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
