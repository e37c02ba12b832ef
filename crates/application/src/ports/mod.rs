//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod device_location_port;
mod nearby_places_port;

#[cfg(test)]
pub use device_location_port::MockDeviceLocationPort;
pub use device_location_port::{DeviceLocationPort, LocationError};
#[cfg(test)]
pub use nearby_places_port::MockNearbyPlacesPort;
pub use nearby_places_port::{NearbyPlace, NearbyPlacesPort, NearbySearchOutcome};
