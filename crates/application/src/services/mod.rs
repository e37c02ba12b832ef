//! Application services - Use case implementations

pub mod location_helper;
mod place_types_service;

pub use place_types_service::{NoResultsReason, PlaceTypesOutcome, PlaceTypesService};
