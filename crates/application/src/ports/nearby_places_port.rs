//! Nearby places port
//!
//! Defines the interface for searching places around a coordinate.

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A place returned by a nearby search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyPlace {
    /// Display name
    pub name: Option<String>,
    /// Short address
    pub vicinity: Option<String>,
    /// Category labels; `None` when the provider sent none
    pub types: Option<Vec<String>>,
}

impl NearbyPlace {
    /// Create a place with only category labels
    #[must_use]
    pub fn with_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: Some(types.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }
}

/// Result of a nearby search that reached the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NearbySearchOutcome {
    /// The provider answered `OK`
    Places(Vec<NearbyPlace>),
    /// The provider answered with any other status
    NoResults {
        /// The provider's status string
        status: String,
    },
}

/// Port for nearby place searches
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NearbyPlacesPort: Send + Sync {
    /// Search for places within `radius_meters` of `coordinate`
    ///
    /// An empty `included_types` means no type filter.
    async fn search_nearby(
        &self,
        coordinate: &Coordinate,
        radius_meters: u32,
        included_types: &[String],
    ) -> Result<NearbySearchOutcome, ApplicationError>;
}
