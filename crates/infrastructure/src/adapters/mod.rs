//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod device_location_adapter;
mod places_adapter;

pub use device_location_adapter::ConfiguredDeviceLocation;
pub use places_adapter::GooglePlacesAdapter;
