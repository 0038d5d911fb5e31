use std::collections::HashMap;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use url::Url;

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub portal_url: Url,
    pub api_url: Url,
    /// Resource filter for hall bookings; any resource of type Hall at Sit.
    pub resource_id: u32,
    pub debug: bool,
    /// Filled from `SIT_PASSWORD`, consumed when the CLI password is `ENV`.
    pub password: Option<String>,
    #[serde(default = "default_studios")]
    pub studios: HashMap<String, u32>,
    #[serde(default = "default_activities")]
    pub activities: HashMap<String, u64>,
}

/// iBooking studio ids.
pub fn default_studios() -> HashMap<String, u32> {
    HashMap::from([
        ("gløshaugen".to_string(), 306),
        ("dragvoll".to_string(), 307),
        ("portalen".to_string(), 308),
        ("dmmh".to_string(), 402),
        ("moholt".to_string(), 540),
    ])
}

/// iBooking activity ids.
pub fn default_activities() -> HashMap<String, u64> {
    HashMap::from([
        ("egentrening".to_string(), 419380),
        ("hall4".to_string(), 75606),
        ("halladragvoll".to_string(), 516131),
    ])
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Load from environment variables with SIT_ prefix
            .add_source(Environment::with_prefix("SIT"))
            .set_default("portal_url", "https://www.sit.no")?
            .set_default("api_url", "https://ibooking.sit.no")?
            .set_default("resource_id", 324)?
            .set_default("debug", false)?
            .build()?;

        config.try_deserialize()
    }

    pub fn studio_id(&self, name: &str) -> Result<u32, ConfigError> {
        self.studios
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::NotFound(format!("studios.{name}")))
    }

    pub fn activity_id(&self, name: &str) -> Result<u64, ConfigError> {
        self.activities
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::NotFound(format!("activities.{name}")))
    }
}
