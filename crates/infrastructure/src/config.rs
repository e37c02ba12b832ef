//! Application configuration
//!
//! Loaded from built-in defaults, an optional `config.toml` (or an explicit
//! file) and `PLACETYPES__*` environment variables, in that order.

use std::path::Path;

use config::Source;
use integration_places::{DEFAULT_BASE_URL, DEFAULT_RADIUS_METERS, MAX_RADIUS_METERS, PlacesConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables that override file settings
pub const ENV_PREFIX: &str = "PLACETYPES";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Places API configuration
    #[serde(default)]
    pub places: PlacesAppConfig,

    /// Device location configuration
    #[serde(default)]
    pub device_location: DeviceLocationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Places API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct PlacesAppConfig {
    /// Nearby Search endpoint URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Places API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Search radius in meters
    #[serde(default = "default_radius_meters")]
    pub radius_meters: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Type filter applied when none is given on the command line
    #[serde(default)]
    pub included_types: Vec<String>,
}

impl std::fmt::Debug for PlacesAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("radius_meters", &self.radius_meters)
            .field("timeout_secs", &self.timeout_secs)
            .field("included_types", &self.included_types)
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

impl Default for PlacesAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            radius_meters: default_radius_meters(),
            timeout_secs: default_timeout_secs(),
            included_types: Vec::new(),
        }
    }
}

impl PlacesAppConfig {
    /// Get the API key as a string reference (for API calls)
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Replace the API key
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(SecretString::from(api_key.into()));
    }

    /// Convert to the client configuration
    #[must_use]
    pub fn to_places_config(&self) -> PlacesConfig {
        PlacesConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key_str().unwrap_or_default().to_string(),
            radius_meters: self.radius_meters,
            timeout_secs: self.timeout_secs,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key_str().is_none_or(|key| key.trim().is_empty()) {
            return Err(format!(
                "places.api_key is not set (use {ENV_PREFIX}__PLACES__API_KEY or --api-key)"
            ));
        }

        if self.radius_meters == 0 || self.radius_meters > MAX_RADIUS_METERS {
            return Err(format!(
                "places.radius_meters must be between 1 and {MAX_RADIUS_METERS}"
            ));
        }

        self.to_places_config().validate()
    }
}

/// Device location configuration
///
/// Describes the location source the host offers. There is no portable
/// geolocation API, so the position itself is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceLocationConfig {
    /// Whether location services are switched on
    #[serde(default)]
    pub enabled: bool,

    /// Whether the user granted location access
    #[serde(default = "default_true")]
    pub permission_granted: bool,

    /// Reported latitude
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Reported longitude
    #[serde(default)]
    pub longitude: Option<f64>,

    /// How long to wait for a fix, in milliseconds
    #[serde(default = "default_wait_ms")]
    pub wait_ms: u64,

    /// How long the location source takes to start, in milliseconds
    #[serde(default)]
    pub startup_ms: u64,
}

const fn default_true() -> bool {
    true
}

const fn default_wait_ms() -> u64 {
    5000
}

impl Default for DeviceLocationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            permission_granted: true,
            latitude: None,
            longitude: None,
            wait_ms: default_wait_ms(),
            startup_ms: 0,
        }
    }
}

impl DeviceLocationConfig {
    /// Enabled source reporting a fixed position
    #[must_use]
    pub fn fixed(latitude: f64, longitude: f64) -> Self {
        Self {
            enabled: true,
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if only one half of the position is set.
    pub fn validate(&self) -> Result<(), String> {
        if self.latitude.is_some() != self.longitude.is_some() {
            return Err(
                "device_location.latitude and device_location.longitude must be set together"
                    .to_string(),
            );
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from environment and the given file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path.as_ref()).required(true))
    }

    fn build(file: impl Source + Send + Sync + 'static) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("places.base_url", DEFAULT_BASE_URL)?
            .set_default("places.radius_meters", i64::from(DEFAULT_RADIUS_METERS))?
            .set_default("logging.level", default_log_level())?
            .add_source(file)
            // Override with environment variables (e.g., PLACETYPES__PLACES__API_KEY)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("places.included_types")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        self.places.validate()?;
        self.device_location.validate()
    }
}
