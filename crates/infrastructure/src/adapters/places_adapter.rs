//! Places adapter - Implements NearbyPlacesPort using integration_places

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{NearbyPlace, NearbyPlacesPort, NearbySearchOutcome};
use async_trait::async_trait;
use domain::Coordinate;
use integration_places::{
    GooglePlacesClient, PlaceResult, PlacesClient, PlacesConfig, PlacesError, SearchRequest,
};
use tracing::{debug, instrument, warn};

/// Adapter for nearby searches using the Google Places API
pub struct GooglePlacesAdapter {
    client: Arc<dyn PlacesClient>,
    api_key: String,
}

impl std::fmt::Debug for GooglePlacesAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GooglePlacesAdapter")
            .field("client", &"PlacesClient")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl GooglePlacesAdapter {
    /// Create an adapter backed by the `reqwest` client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &PlacesConfig) -> Result<Self, ApplicationError> {
        let client = GooglePlacesClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(Arc::new(client), config.api_key.clone()))
    }

    /// Create an adapter over any client implementation
    pub fn with_client(client: Arc<dyn PlacesClient>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    /// Map integration places error to application error
    fn map_error(err: PlacesError) -> ApplicationError {
        match err {
            PlacesError::Network(e) => ApplicationError::Network(e),
            PlacesError::Timeout { timeout_secs } => ApplicationError::Timeout { timeout_secs },
            PlacesError::MalformedResponse(e) => ApplicationError::MalformedResponse(e),
            PlacesError::Configuration(e) => ApplicationError::Configuration(e),
            // Search results turn provider statuses into NoResults before
            // reaching here; construction never yields one
            err @ PlacesError::Provider { .. } => ApplicationError::Configuration(err.to_string()),
        }
    }

    /// Convert an integration place to an application place
    fn map_place(place: PlaceResult) -> NearbyPlace {
        NearbyPlace {
            name: place.name,
            vicinity: place.vicinity,
            types: place.types,
        }
    }
}

#[async_trait]
impl NearbyPlacesPort for GooglePlacesAdapter {
    #[instrument(skip(self, included_types), fields(location = %coordinate.to_lat_lng(), radius = radius_meters))]
    async fn search_nearby(
        &self,
        coordinate: &Coordinate,
        radius_meters: u32,
        included_types: &[String],
    ) -> Result<NearbySearchOutcome, ApplicationError> {
        let request = SearchRequest::new(
            *coordinate,
            radius_meters,
            included_types,
            self.api_key.clone(),
        )
        .map_err(Self::map_error)?;

        match self.client.nearby_search(&request).await {
            Ok(response) => {
                let places: Vec<NearbyPlace> = response
                    .into_results()
                    .into_iter()
                    .map(Self::map_place)
                    .collect();
                debug!(count = places.len(), "Retrieved nearby places");
                Ok(NearbySearchOutcome::Places(places))
            },
            Err(PlacesError::Provider { status, message }) => {
                warn!(%status, message = ?message, "Places provider returned no usable results");
                Ok(NearbySearchOutcome::NoResults { status })
            },
            Err(e) => {
                debug!(error = %e, "Nearby search failed");
                Err(Self::map_error(e))
            },
        }
    }
}
