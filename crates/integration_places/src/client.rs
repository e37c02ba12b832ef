//! Google Places Nearby Search client
//!
//! Performs exactly one HTTP GET per search; retries are left to callers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::PlacesConfig;
use crate::error::PlacesError;
use crate::models::SearchResponse;
use crate::request::SearchRequest;

/// Trait for nearby search transports
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Run a nearby search
    ///
    /// Returns the parsed response only when its status is `OK`; any other
    /// status is reported as [`PlacesError::Provider`].
    async fn nearby_search(&self, request: &SearchRequest) -> Result<SearchResponse, PlacesError>;
}

/// `reqwest`-based client for the Google Places Nearby Search endpoint
#[derive(Debug)]
pub struct GooglePlacesClient {
    client: Client,
    config: PlacesConfig,
}

impl GooglePlacesClient {
    /// Create a new Places client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        config.validate().map_err(PlacesError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("PlaceTypes/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PlacesError::Configuration(e.without_url().to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// The configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &PlacesConfig {
        &self.config
    }

    /// Map a transport error, dropping the URL so the key cannot leak
    fn map_transport_error(&self, error: reqwest::Error) -> PlacesError {
        if error.is_timeout() {
            PlacesError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            PlacesError::Network(error.without_url().to_string())
        }
    }

    /// Parse a response body and enforce the status contract
    fn parse_response(body: &str) -> Result<SearchResponse, PlacesError> {
        let response: SearchResponse =
            serde_json::from_str(body).map_err(|e| PlacesError::MalformedResponse(e.to_string()))?;

        if !response.is_ok() {
            return Err(PlacesError::Provider {
                status: response
                    .status
                    .clone()
                    .unwrap_or_else(|| "<missing>".to_string()),
                message: response.error_message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl PlacesClient for GooglePlacesClient {
    #[instrument(skip(self, request), fields(location = %request.coordinate().to_lat_lng(), radius = request.radius_meters()))]
    async fn nearby_search(&self, request: &SearchRequest) -> Result<SearchResponse, PlacesError> {
        let url = request.to_url(&self.config.base_url)?;

        debug!(url = %request.redacted_url(&self.config.base_url)?, "Searching nearby places");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::Network(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        match Self::parse_response(&body) {
            Ok(result) => {
                debug!(count = result.results().len(), "Places found");
                Ok(result)
            },
            Err(err @ PlacesError::Provider { .. }) => {
                warn!(error = %err, "Nearby search returned no usable results");
                Err(err)
            },
            Err(err) => Err(err),
        }
    }
}
