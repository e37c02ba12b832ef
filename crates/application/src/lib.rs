//! Application layer - Use cases and orchestration
//!
//! Defines the ports the nearby-search use case depends on and the service
//! that turns a coordinate into a ranked list of place types.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
