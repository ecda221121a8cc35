//! Location model for geographic coordinates

use serde::{Deserialize, Serialize};

/// Coordinates resolved for the user's location query
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Address as formatted by the geocoder, when it supplied one
    pub name: Option<String>,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: None,
        }
    }

    /// Create location with a display name
    #[must_use]
    pub fn with_name(latitude: f64, longitude: f64, name: String) -> Self {
        Self {
            latitude,
            longitude,
            name: Some(name),
        }
    }

    /// Format location as `lat, lng` without rounding
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!(
            "{}, {}",
            format_degrees(self.latitude),
            format_degrees(self.longitude)
        )
    }

    /// Path segment used by the forecast endpoint
    #[must_use]
    pub fn path_segment(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// Shortest round-trip form, but whole degrees keep one decimal (`41.0`)
fn format_degrees(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
