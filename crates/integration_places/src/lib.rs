//! Google Places integration for PlaceTypes
//!
//! Queries the [Places Nearby Search](https://developers.google.com/maps/documentation/places/web-service/search-nearby)
//! endpoint for points of interest around a coordinate.
//!
//! # Architecture
//!
//! [`SearchRequest`] builds the request URL as a pure value. [`PlacesClient`]
//! defines the transport interface, implemented by [`GooglePlacesClient`]
//! on top of `reqwest`. A response whose `status` is not `"OK"` surfaces as
//! [`PlacesError::Provider`], distinct from transport and parse failures.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::Coordinate;
//! use integration_places::{GooglePlacesClient, PlacesClient, PlacesConfig, SearchRequest};
//!
//! let config = PlacesConfig::with_api_key("YOUR_API_KEY");
//! let client = GooglePlacesClient::new(&config)?;
//!
//! let request = SearchRequest::new(
//!     Coordinate::new(52.52, 13.405)?,
//!     config.radius_meters,
//!     &["cafe".to_string()],
//!     config.api_key.clone(),
//! )?;
//! let response = client.nearby_search(&request).await?;
//! ```

mod client;
mod config;
mod error;
mod models;
mod request;

pub use client::{GooglePlacesClient, PlacesClient};
pub use config::{DEFAULT_BASE_URL, DEFAULT_RADIUS_METERS, MAX_RADIUS_METERS, PlacesConfig};
pub use error::PlacesError;
pub use models::{PlaceResult, STATUS_OK, SearchResponse};
pub use request::SearchRequest;
