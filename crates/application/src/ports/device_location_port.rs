//! Device location port
//!
//! Defines the interface for obtaining the host device's current position.

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Reasons a device location could not be obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The location source is running but has no position
    #[error("No location data available")]
    NoFix,

    /// The user has not granted location access
    #[error("Geolocation permission has not been granted")]
    PermissionDenied,

    /// Location services are switched off
    #[error("Geolocation is disabled")]
    Disabled,

    /// The location source did not produce a position in time
    #[error("Could not start the geolocator in time")]
    Timeout,
}

/// Port for device location lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DeviceLocationPort: Send + Sync {
    /// Current position of the device
    async fn current_location(&self) -> Result<Coordinate, LocationError>;
}
