//! Places service configuration

use serde::{Deserialize, Serialize};

/// Nearby Search JSON endpoint
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

/// Search radius used when none is configured, in meters
pub const DEFAULT_RADIUS_METERS: u32 = 100;

/// Largest radius the provider accepts, in meters
pub const MAX_RADIUS_METERS: u32 = 50_000;

/// Configuration for the Google Places Nearby Search client
#[derive(Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// Nearby Search endpoint URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Places API key
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Search radius in meters
    #[serde(default = "default_radius_meters")]
    pub radius_meters: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for PlacesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_empty() {
                    None
                } else {
                    Some("[REDACTED]")
                },
            )
            .field("radius_meters", &self.radius_meters)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_radius_meters() -> u32 {
    DEFAULT_RADIUS_METERS
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            radius_meters: default_radius_meters(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PlacesConfig {
    /// Default configuration with the given API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Check if an API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if url::Url::parse(&self.base_url).is_err() {
            return Err(format!("base_url is not a valid URL: {}", self.base_url));
        }

        if !self.has_api_key() {
            return Err("api_key must be set".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.radius_meters == 0 {
            return Err("radius_meters must be greater than 0".to_string());
        }

        if self.radius_meters > MAX_RADIUS_METERS {
            return Err(format!(
                "radius_meters must be {MAX_RADIUS_METERS} or less"
            ));
        }

        Ok(())
    }
}
