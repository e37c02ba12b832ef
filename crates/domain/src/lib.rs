//! Domain layer for PlaceTypes
//!
//! Contains the coordinate value object, the place-type frequency ranking
//! and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
