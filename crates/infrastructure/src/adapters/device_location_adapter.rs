//! Device location adapter - Implements DeviceLocationPort from configuration

use std::time::Duration;

use application::ports::{DeviceLocationPort, LocationError};
use async_trait::async_trait;
use domain::Coordinate;
use tracing::{debug, instrument, warn};

use crate::config::DeviceLocationConfig;

/// Location source backed by `[device_location]` settings
///
/// Waits for the source to start, then checks permission and status in
/// the same order a platform geolocator would.
#[derive(Debug, Clone)]
pub struct ConfiguredDeviceLocation {
    config: DeviceLocationConfig,
}

impl ConfiguredDeviceLocation {
    /// Create a new adapter
    #[must_use]
    pub const fn new(config: DeviceLocationConfig) -> Self {
        Self { config }
    }

    /// Maximum time to wait for a fix
    #[must_use]
    pub const fn wait_time(&self) -> Duration {
        Duration::from_millis(self.config.wait_ms)
    }

    async fn acquire(&self) -> Result<Coordinate, LocationError> {
        if self.config.startup_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.startup_ms)).await;
        }

        if !self.config.permission_granted {
            return Err(LocationError::PermissionDenied);
        }

        if !self.config.enabled {
            return Err(LocationError::Disabled);
        }

        let (Some(latitude), Some(longitude)) = (self.config.latitude, self.config.longitude)
        else {
            return Err(LocationError::NoFix);
        };

        Coordinate::new(latitude, longitude).map_err(|e| {
            warn!(error = %e, "Configured device location is invalid");
            LocationError::NoFix
        })
    }
}

#[async_trait]
impl DeviceLocationPort for ConfiguredDeviceLocation {
    #[instrument(skip(self), fields(wait_ms = self.config.wait_ms))]
    async fn current_location(&self) -> Result<Coordinate, LocationError> {
        debug!("Waiting for the geolocator to start");

        let result = tokio::time::timeout(self.wait_time(), self.acquire())
            .await
            .unwrap_or(Err(LocationError::Timeout));

        match &result {
            Ok(coordinate) => debug!(location = %coordinate.to_lat_lng(), "Got device location"),
            Err(e) => debug!(error = %e, "Device location unavailable"),
        }

        result
    }
}
