//! Nearby Search response models
//!
//! Only the fields the ranking needs are modelled; everything else in the
//! provider's payload is ignored.

use serde::{Deserialize, Serialize};

/// Status value marking a usable response
pub const STATUS_OK: &str = "OK";

/// Top-level Nearby Search response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Provider status, e.g. `OK`, `ZERO_RESULTS`, `REQUEST_DENIED`
    #[serde(default)]
    pub status: Option<String>,

    /// Places found around the coordinate
    #[serde(default)]
    pub results: Option<Vec<PlaceResult>>,

    /// Human-readable detail accompanying a non-`OK` status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl SearchResponse {
    /// Whether the provider reported `OK`
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some(STATUS_OK)
    }

    /// Results, or an empty slice when the field was absent
    #[must_use]
    pub fn results(&self) -> &[PlaceResult] {
        self.results.as_deref().unwrap_or_default()
    }

    /// Consume the response and return its results
    #[must_use]
    pub fn into_results(self) -> Vec<PlaceResult> {
        self.results.unwrap_or_default()
    }
}

/// A single place in the result list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceResult {
    /// Category labels, e.g. `["cafe", "food", "establishment"]`
    #[serde(default)]
    pub types: Option<Vec<String>>,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,

    /// Provider place identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}
