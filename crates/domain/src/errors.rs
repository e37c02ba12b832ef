//! Domain-level errors

use thiserror::Error;

use crate::value_objects::{CoordinateField, CoordinateRejection};

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A latitude or longitude could not be accepted
    #[error("Invalid {field} '{raw_value}': {reason}")]
    InvalidCoordinate {
        /// Which half of the coordinate was rejected
        field: CoordinateField,
        /// The input exactly as it was received
        raw_value: String,
        /// Why the input was rejected
        reason: CoordinateRejection,
    },

    /// The search results carried no place type labels at all
    #[error("No place types found in the search results")]
    EmptyResult,
}

impl DomainError {
    /// Create an invalid coordinate error
    pub fn invalid_coordinate(
        field: CoordinateField,
        raw_value: impl Into<String>,
        reason: CoordinateRejection,
    ) -> Self {
        Self::InvalidCoordinate {
            field,
            raw_value: raw_value.into(),
            reason,
        }
    }

    /// Returns true if the caller can recover by asking for new input
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidCoordinate { .. })
    }
}
