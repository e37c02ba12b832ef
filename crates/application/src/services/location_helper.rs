//! Location helper utilities
//!
//! Pure functions for generating maps links and formatting coordinates for
//! terminal output.

use domain::Coordinate;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Generate a Google Maps search link for a coordinate
///
/// The latitude/longitude pair is joined with an encoded comma (`%2C`), so
/// the link can be handed to a shell opener without further escaping.
#[must_use]
pub fn maps_search_link(coordinate: &Coordinate) -> String {
    format!(
        "{MAPS_SEARCH_URL}{}%2C{}",
        coordinate.latitude(),
        coordinate.longitude()
    )
}

/// Format a coordinate as a single human-readable line
#[must_use]
pub fn format_location(coordinate: &Coordinate) -> String {
    format!(
        "Latitude: {}, Longitude: {}",
        coordinate.latitude(),
        coordinate.longitude()
    )
}

/// Format a coordinate together with its maps link
///
/// Returns a two-line string with the location and the link.
#[must_use]
pub fn format_location_with_link(coordinate: &Coordinate) -> String {
    format!(
        "{}\n{}",
        format_location(coordinate),
        maps_search_link(coordinate)
    )
}
