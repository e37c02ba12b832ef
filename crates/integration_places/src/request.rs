//! Nearby Search request builder
//!
//! Turns a coordinate, radius, optional type filter and API key into the
//! request URL. Pure; performs no I/O.

use std::fmt;

use domain::Coordinate;
use url::Url;

use crate::error::PlacesError;

/// Placeholder substituted for the API key in loggable URLs
const REDACTED: &str = "[REDACTED]";

/// Parameters of a single Nearby Search request
#[derive(Clone, PartialEq)]
pub struct SearchRequest {
    coordinate: Coordinate,
    radius_meters: u32,
    included_types: Vec<String>,
    api_key: String,
}

impl SearchRequest {
    /// Create a request
    ///
    /// Blank type entries are dropped; the remaining order is preserved.
    ///
    /// # Errors
    ///
    /// Returns `PlacesError::Configuration` if the radius is zero or the
    /// API key is blank.
    pub fn new(
        coordinate: Coordinate,
        radius_meters: u32,
        included_types: &[String],
        api_key: impl Into<String>,
    ) -> Result<Self, PlacesError> {
        if radius_meters == 0 {
            return Err(PlacesError::Configuration(
                "radius_meters must be greater than 0".to_string(),
            ));
        }

        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(PlacesError::Configuration(
                "API key must not be empty".to_string(),
            ));
        }

        let included_types = included_types
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(ToString::to_string)
            .collect();

        Ok(Self {
            coordinate,
            radius_meters,
            included_types,
            api_key,
        })
    }

    /// The coordinate searched around
    #[must_use]
    pub const fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// Search radius in meters
    #[must_use]
    pub const fn radius_meters(&self) -> u32 {
        self.radius_meters
    }

    /// Type filter in caller order (possibly empty)
    #[must_use]
    pub fn included_types(&self) -> &[String] {
        &self.included_types
    }

    /// Full request URL including the API key
    ///
    /// # Errors
    ///
    /// Returns `PlacesError::Configuration` if `base_url` is not a valid URL.
    pub fn to_url(&self, base_url: &str) -> Result<Url, PlacesError> {
        self.url_with_key(base_url, &encode_value(&self.api_key))
    }

    /// Request URL with the key replaced by a placeholder, safe to log
    ///
    /// # Errors
    ///
    /// Returns `PlacesError::Configuration` if `base_url` is not a valid URL.
    pub fn redacted_url(&self, base_url: &str) -> Result<String, PlacesError> {
        self.url_with_key(base_url, REDACTED).map(String::from)
    }

    fn url_with_key(&self, base_url: &str, key: &str) -> Result<Url, PlacesError> {
        let mut url = Url::parse(base_url).map_err(|e| {
            PlacesError::Configuration(format!("Invalid base URL '{base_url}': {e}"))
        })?;
        url.set_query(Some(&self.query_string(key)));
        Ok(url)
    }

    /// `location`, `radius`, optional `type`, then `key`
    fn query_string(&self, key: &str) -> String {
        let mut query = format!(
            "location={},{}&radius={}",
            self.coordinate.latitude(),
            self.coordinate.longitude(),
            self.radius_meters
        );

        if !self.included_types.is_empty() {
            let types: Vec<String> = self
                .included_types
                .iter()
                .map(String::as_str)
                .map(encode_value)
                .collect();
            query.push_str("&type=");
            query.push_str(&types.join(","));
        }

        query.push_str("&key=");
        query.push_str(key);
        query
    }
}

impl fmt::Debug for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchRequest")
            .field("coordinate", &self.coordinate)
            .field("radius_meters", &self.radius_meters)
            .field("included_types", &self.included_types)
            .field("api_key", &REDACTED)
            .finish()
    }
}

/// Percent-encode a query value
///
/// Keeps unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `_`, `.`, `~`)
/// and encodes everything else as UTF-8 bytes, including `,` so that it
/// cannot be confused with the list separator.
fn encode_value(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(char::from(byte));
            },
            _ => result.push_str(&format!("%{byte:02X}")),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

    fn berlin() -> Coordinate {
        Coordinate::new(52.52, 13.405).unwrap()
    }

    fn types(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn url_contains_required_parameters() {
        let request = SearchRequest::new(berlin(), 100, &[], "abc123").unwrap();
        let url = request.to_url(BASE).unwrap();
        assert_eq!(
            url.as_str(),
            "https://maps.googleapis.com/maps/api/place/nearbysearch/json\
             ?location=52.52,13.405&radius=100&key=abc123"
        );
    }

    #[test]
    fn empty_type_filter_emits_no_type_parameter() {
        let request = SearchRequest::new(berlin(), 100, &[], "k").unwrap();
        let url = request.to_url(BASE).unwrap();
        assert!(!url.as_str().contains("type="));
        assert!(url.query_pairs().all(|(name, _)| name != "type"));
    }

    #[test]
    fn blank_type_entries_emit_no_type_parameter() {
        let request = SearchRequest::new(berlin(), 100, &types(&["", "  "]), "k").unwrap();
        assert!(request.included_types().is_empty());
        assert!(!request.to_url(BASE).unwrap().as_str().contains("type="));
    }

    #[test]
    fn type_filter_is_comma_joined_in_order() {
        let request = SearchRequest::new(berlin(), 100, &types(&["cafe", "bar"]), "k").unwrap();
        let url = request.to_url(BASE).unwrap();
        assert!(url.as_str().contains("&type=cafe,bar&"));
        assert_eq!(url.as_str().matches("type=").count(), 1);
    }

    #[test]
    fn parameters_appear_in_fixed_order() {
        let request = SearchRequest::new(berlin(), 250, &types(&["park"]), "k").unwrap();
        let url = request.to_url(BASE).unwrap();
        let names: Vec<String> = url.query_pairs().map(|(n, _)| n.into_owned()).collect();
        assert_eq!(names, vec!["location", "radius", "type", "key"]);
    }

    #[test]
    fn coordinates_use_plain_decimal_notation() {
        let coordinate = Coordinate::new(-0.000_001, 179.999_999_9).unwrap();
        let request = SearchRequest::new(coordinate, 100, &[], "k").unwrap();
        let url = request.to_url(BASE).unwrap();
        assert!(url.as_str().contains("location=-0.000001,179.9999999&"));

        let location = url
            .query_pairs()
            .find(|(name, _)| name == "location")
            .map(|(_, value)| value.into_owned())
            .unwrap();
        assert!(!location.contains(['e', 'E', ' ']));
    }

    #[test]
    fn reserved_characters_in_values_are_encoded() {
        let request =
            SearchRequest::new(berlin(), 100, &types(&["a&b", "c,d"]), "key with space").unwrap();
        let url = request.to_url(BASE).unwrap();
        assert!(url.as_str().contains("type=a%26b,c%2Cd&"));
        assert!(url.as_str().ends_with("key=key%20with%20space"));
    }

    #[test]
    fn redacted_url_hides_key() {
        let request = SearchRequest::new(berlin(), 100, &[], "secret-key").unwrap();
        let redacted = request.redacted_url(BASE).unwrap();
        assert!(!redacted.contains("secret-key"));
        assert!(redacted.contains("key=[REDACTED]") || redacted.contains("key=%5BREDACTED%5D"));
    }

    #[test]
    fn debug_hides_key() {
        let request = SearchRequest::new(berlin(), 100, &[], "secret-key").unwrap();
        let debug = format!("{request:?}");
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn zero_radius_rejected() {
        let result = SearchRequest::new(berlin(), 0, &[], "k");
        assert!(matches!(result, Err(PlacesError::Configuration(_))));
    }

    #[test]
    fn blank_api_key_rejected() {
        let result = SearchRequest::new(berlin(), 100, &[], " ");
        assert!(matches!(result, Err(PlacesError::Configuration(_))));
    }

    #[test]
    fn invalid_base_url_rejected() {
        let request = SearchRequest::new(berlin(), 100, &[], "k").unwrap();
        assert!(matches!(
            request.to_url("not a url"),
            Err(PlacesError::Configuration(_))
        ));
    }

    #[test]
    fn radius_is_configurable() {
        let request = SearchRequest::new(berlin(), 1500, &[], "k").unwrap();
        assert!(request.to_url(BASE).unwrap().as_str().contains("radius=1500"));
    }
}
