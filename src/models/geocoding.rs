//! Google Maps geocoding response structures

use super::Location;
use serde::Deserialize;

/// Status Google reports when the query is valid but matches nothing
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";
pub const STATUS_OK: &str = "OK";

/// Geocoding response body
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
    pub status: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl GeocodingResponse {
    /// Error status other than `OK` / `ZERO_RESULTS`, e.g. `REQUEST_DENIED`
    #[must_use]
    pub fn error_status(&self) -> Option<&str> {
        self.status
            .as_deref()
            .filter(|status| *status != STATUS_OK && *status != STATUS_ZERO_RESULTS)
    }
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        let LatLng { lat, lng } = result.geometry.location;
        match result.formatted_address {
            Some(name) => Location::with_name(lat, lng, name),
            None => Location::new(lat, lng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_google_response() {
        let body = r#"{
            "results": [{
                "formatted_address": "Chicago, IL, USA",
                "geometry": {
                    "location": { "lat": 41.8781136, "lng": -87.6297982 },
                    "location_type": "APPROXIMATE"
                },
                "place_id": "ChIJ7cv00DwsDogRAMDACa2m4K8"
            }],
            "status": "OK"
        }"#;

        let response: GeocodingResponse = serde_json::from_str(body).unwrap();
        assert!(response.error_status().is_none());

        let location: Location = response.results.into_iter().next().unwrap().into();
        assert_eq!(location.latitude, 41.8781136);
        assert_eq!(location.longitude, -87.6297982);
        assert_eq!(location.name.as_deref(), Some("Chicago, IL, USA"));
    }

    #[test]
    fn test_zero_results_is_not_an_error_status() {
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"results": [], "status": "ZERO_RESULTS"}"#).unwrap();
        assert!(response.results.is_empty());
        assert!(response.error_status().is_none());
    }

    #[test]
    fn test_request_denied_is_error_status() {
        let response: GeocodingResponse = serde_json::from_str(
            r#"{"results": [], "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid."}"#,
        )
        .unwrap();
        assert_eq!(response.error_status(), Some("REQUEST_DENIED"));
        assert_eq!(
            response.error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
    }

    #[test]
    fn test_missing_results_key_defaults_to_empty() {
        let response: GeocodingResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }
}
