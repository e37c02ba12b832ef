//! Place types service - Ranks the place categories around a coordinate

use std::{fmt, sync::Arc};

use domain::{Coordinate, DomainError, TypeFrequency};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{DeviceLocationPort, LocationError, NearbyPlacesPort, NearbySearchOutcome},
};

/// Why a search produced no ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoResultsReason {
    /// The provider answered with a status other than `OK`
    ProviderStatus(String),
    /// The provider answered `OK` but no result carried a type label
    NoPlaceTypes,
}

impl fmt::Display for NoResultsReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProviderStatus(status) => write!(f, "Provider returned status {status}"),
            Self::NoPlaceTypes => write!(f, "No place types found in the response"),
        }
    }
}

/// Result of a place type lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceTypesOutcome {
    /// Labels ranked by descending count
    Found(TypeFrequency),
    /// The search completed but there is nothing to rank
    NoResults(NoResultsReason),
}

impl PlaceTypesOutcome {
    /// Whether a ranking was produced
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The ranking, if one was produced
    #[must_use]
    pub const fn frequency(&self) -> Option<&TypeFrequency> {
        match self {
            Self::Found(frequency) => Some(frequency),
            Self::NoResults(_) => None,
        }
    }
}

/// Service that searches around a coordinate and ranks the place types found
pub struct PlaceTypesService {
    places: Arc<dyn NearbyPlacesPort>,
    device_location: Option<Arc<dyn DeviceLocationPort>>,
    radius_meters: u32,
    default_types: Vec<String>,
}

impl fmt::Debug for PlaceTypesService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceTypesService")
            .field("radius_meters", &self.radius_meters)
            .field("default_types", &self.default_types)
            .field("has_device_location", &self.device_location.is_some())
            .finish_non_exhaustive()
    }
}

impl PlaceTypesService {
    /// Create a new service searching within `radius_meters`
    pub fn new(places: Arc<dyn NearbyPlacesPort>, radius_meters: u32) -> Self {
        Self {
            places,
            device_location: None,
            radius_meters,
            default_types: Vec::new(),
        }
    }

    /// Type filter used when a caller does not pass one
    #[must_use]
    pub fn with_default_types(mut self, types: Vec<String>) -> Self {
        self.default_types = types;
        self
    }

    /// Attach a device location source
    #[must_use]
    pub fn with_device_location(mut self, device_location: Arc<dyn DeviceLocationPort>) -> Self {
        self.device_location = Some(device_location);
        self
    }

    /// Configured search radius in meters
    #[must_use]
    pub const fn radius_meters(&self) -> u32 {
        self.radius_meters
    }

    /// Search around `coordinate` and rank the place types found
    ///
    /// `None` uses the default type filter; `Some(&[])` searches without a
    /// filter. A provider status other than `OK` and a result set without any
    /// labels are both reported as [`PlaceTypesOutcome::NoResults`], not as
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached, times out, or
    /// sends a response that cannot be understood.
    #[instrument(skip(self, included_types), fields(location = %coordinate.to_lat_lng(), radius = self.radius_meters))]
    pub async fn find_nearby_place_types(
        &self,
        coordinate: &Coordinate,
        included_types: Option<&[String]>,
    ) -> Result<PlaceTypesOutcome, ApplicationError> {
        let included_types = included_types.unwrap_or(self.default_types.as_slice());
        debug!(?included_types, "Getting nearby place types");

        let places = match self
            .places
            .search_nearby(coordinate, self.radius_meters, included_types)
            .await?
        {
            NearbySearchOutcome::Places(places) => places,
            NearbySearchOutcome::NoResults { status } => {
                info!(%status, "Nearby search returned no results");
                return Ok(PlaceTypesOutcome::NoResults(NoResultsReason::ProviderStatus(
                    status,
                )));
            },
        };

        match TypeFrequency::aggregate(places.iter().map(|place| place.types.as_deref())) {
            Ok(frequency) => {
                info!(
                    places = places.len(),
                    types = frequency.len(),
                    "Ranked nearby place types"
                );
                Ok(PlaceTypesOutcome::Found(frequency))
            },
            Err(DomainError::EmptyResult) => {
                info!(places = places.len(), "No place types found in the response");
                Ok(PlaceTypesOutcome::NoResults(NoResultsReason::NoPlaceTypes))
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Current device location
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Location` if no location source is attached
    /// or the source cannot provide a position.
    #[instrument(skip(self))]
    pub async fn current_location(&self) -> Result<Coordinate, ApplicationError> {
        let Some(device_location) = &self.device_location else {
            return Err(LocationError::Disabled.into());
        };

        let coordinate = device_location.current_location().await?;
        debug!(location = %coordinate.to_lat_lng(), "Got the device's current location");
        Ok(coordinate)
    }

    /// Rank the place types around the current device location
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be obtained or the search fails.
    pub async fn find_nearby_place_types_here(
        &self,
        included_types: Option<&[String]>,
    ) -> Result<(Coordinate, PlaceTypesOutcome), ApplicationError> {
        let coordinate = self.current_location().await?;
        let outcome = self
            .find_nearby_place_types(&coordinate, included_types)
            .await?;
        Ok((coordinate, outcome))
    }
}
