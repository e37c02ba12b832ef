//! Geographic coordinate value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated geographic coordinate
///
/// Instances only exist for latitudes in [-90, 90] and longitudes in
/// [-180, 180]; every constructor, including deserialization, validates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CoordinateParts")]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Which half of a coordinate a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateField {
    /// North/south component
    Latitude,
    /// East/west component
    Longitude,
}

impl CoordinateField {
    /// Inclusive lower and upper bound in degrees
    #[must_use]
    pub const fn bounds(&self) -> (f64, f64) {
        match self {
            Self::Latitude => (-90.0, 90.0),
            Self::Longitude => (-180.0, 180.0),
        }
    }

    /// Lowercase field name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }
}

impl fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a coordinate component was rejected
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateRejection {
    /// No input was given at all
    Missing,
    /// Input was blank
    Empty,
    /// Input is not a finite base-10 number
    NotANumber,
    /// Input parsed but lies outside the allowed range
    OutOfRange {
        /// Inclusive minimum
        min: f64,
        /// Inclusive maximum
        max: f64,
    },
}

impl fmt::Display for CoordinateRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("no value was given"),
            Self::Empty => f.write_str("value is empty"),
            Self::NotANumber => f.write_str("must be a decimal number"),
            Self::OutOfRange { min, max } => write!(f, "must be between {min} and {max}"),
        }
    }
}

impl Coordinate {
    /// Create a new coordinate with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinate` if either value is not finite
    /// or lies outside its range. Latitude is checked first.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let latitude = check_range(CoordinateField::Latitude, latitude, &latitude.to_string())?;
        let longitude = check_range(
            CoordinateField::Longitude,
            longitude,
            &longitude.to_string(),
        )?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse a coordinate from two raw text tokens, e.g. console input
    ///
    /// Surrounding whitespace is ignored. Numbers are read with `.` as the
    /// decimal point regardless of the host locale.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinate` naming the first offending
    /// field, the raw input and the rejection reason.
    pub fn parse(
        raw_latitude: Option<&str>,
        raw_longitude: Option<&str>,
    ) -> Result<Self, DomainError> {
        let latitude = parse_component(CoordinateField::Latitude, raw_latitude)?;
        let longitude = parse_component(CoordinateField::Longitude, raw_longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// `lat,lon` in shortest round-trip decimal form, as used in query strings
    #[must_use]
    pub fn to_lat_lng(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

fn parse_component(field: CoordinateField, raw: Option<&str>) -> Result<f64, DomainError> {
    let Some(raw) = raw else {
        return Err(DomainError::invalid_coordinate(
            field,
            "",
            CoordinateRejection::Missing,
        ));
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_coordinate(
            field,
            raw,
            CoordinateRejection::Empty,
        ));
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        DomainError::invalid_coordinate(field, raw, CoordinateRejection::NotANumber)
    })?;

    check_range(field, value, raw)
}

fn check_range(field: CoordinateField, value: f64, raw: &str) -> Result<f64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::invalid_coordinate(
            field,
            raw,
            CoordinateRejection::NotANumber,
        ));
    }

    let (min, max) = field.bounds();
    if !(min..=max).contains(&value) {
        return Err(DomainError::invalid_coordinate(
            field,
            raw,
            CoordinateRejection::OutOfRange { min, max },
        ));
    }

    Ok(value)
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[derive(Deserialize)]
struct CoordinateParts {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<CoordinateParts> for Coordinate {
    type Error = DomainError;

    fn try_from(parts: CoordinateParts) -> Result<Self, Self::Error> {
        Self::new(parts.latitude, parts.longitude)
    }
}
