//! HTTP client for the geocoding and forecast services
//!
//! Google Maps resolves the user's query into coordinates and Pirate Weather
//! returns the forecast for them. Each call is a single blocking GET; failures
//! are returned to the caller, there is no retry. Failures are logged at debug
//! level; `main` prints them for the user.

use crate::config::UmbrellaConfig;
use crate::models::{ForecastDocument, GeocodingResponse, GeocodingResult, Location};
use crate::{Result, UmbrellaError};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

const USER_AGENT: &str = concat!("umbrella/", env!("CARGO_PKG_VERSION"));

/// Client for both external services
pub struct ApiClient {
    client: Client,
    config: UmbrellaConfig,
}

impl ApiClient {
    /// Create a new client from validated configuration
    pub fn new(config: UmbrellaConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.http.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &UmbrellaConfig {
        &self.config
    }

    /// Look up a free-text location with the geocoding service
    ///
    /// An empty list means the service found no match. Error statuses such as
    /// `REQUEST_DENIED` are returned as [`UmbrellaError::Api`].
    #[instrument(skip(self))]
    pub fn geocode(&self, location: &str) -> Result<Vec<GeocodingResult>> {
        let api_key = required_key(self.config.geocoding.api_key.as_deref(), "geocoding")?;

        info!("Geocoding location: '{}'", location);

        let url = format!(
            "{}?address={}&key={}",
            self.config.geocoding.base_url,
            urlencoding::encode(location),
            urlencoding::encode(api_key)
        );

        let response: GeocodingResponse = self.get_json(&url, api_key)?;

        if let Some(status) = response.error_status() {
            let message = match &response.error_message {
                Some(detail) => format!("{status}: {detail}"),
                None => status.to_string(),
            };
            debug!("Geocoding rejected for '{}': {}", location, message);
            return Err(UmbrellaError::api(message));
        }

        if response.results.is_empty() {
            debug!("No results found for location '{}'", location);
        } else {
            debug!("Found {} geocoding results for '{}'", response.results.len(), location);
        }

        Ok(response.results)
    }

    /// Fetch the forecast document for a location
    #[instrument(skip(self, location), fields(lat = location.latitude, lng = location.longitude))]
    pub fn get_forecast(&self, location: &Location) -> Result<ForecastDocument> {
        let api_key = required_key(self.config.weather.api_key.as_deref(), "weather")?;

        info!("Getting forecast for coordinates: {}", location.format_coordinates());

        let url = format!(
            "{}/{}/{}?units={}",
            self.config.weather.base_url.trim_end_matches('/'),
            urlencoding::encode(api_key),
            location.path_segment(),
            self.config.weather.units
        );

        let forecast: ForecastDocument = self.get_json(&url, api_key)?;

        debug!(
            "Forecast has {} hourly records",
            forecast.hourly_data().map_or(0, <[_]>::len)
        );

        Ok(forecast)
    }

    /// GET `url` and decode the JSON body, logging with `secret` redacted
    fn get_json<T: DeserializeOwned>(&self, url: &str, secret: &str) -> Result<T> {
        let display_url = redact(url, secret);
        let start_time = Instant::now();

        debug!("HTTP request: GET {}", display_url);

        let response = self.client.get(url).send().map_err(|e| {
            let e = e.without_url();
            debug!("Request to {} failed: {}", display_url, e);
            UmbrellaError::from(e)
        })?;

        let response = check_status(response, &display_url)?;

        let parse_start = Instant::now();
        let body = response.json::<T>().map_err(|e| {
            let e = e.without_url();
            debug!("Failed to parse response from {}: {}", display_url, e);
            UmbrellaError::from(e)
        })?;

        let total_duration = start_time.elapsed();
        info!(
            "Request completed in {:.3}s (parse: {:.3}s)",
            total_duration.as_secs_f64(),
            parse_start.elapsed().as_secs_f64()
        );

        if total_duration.as_secs() > 5 {
            warn!("Slow API response detected: {:.3}s", total_duration.as_secs_f64());
        }

        Ok(body)
    }
}

fn required_key<'a>(key: Option<&'a str>, service: &str) -> Result<&'a str> {
    key.filter(|k| !k.trim().is_empty())
        .ok_or_else(|| UmbrellaError::config(format!("{service} API key is not configured")))
}

fn check_status(response: Response, display_url: &str) -> Result<Response> {
    let status = response.status();
    debug!("HTTP response received: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let message = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            format!("API key was rejected (HTTP {})", status.as_u16())
        }
        StatusCode::TOO_MANY_REQUESTS => "Rate limit exceeded (HTTP 429)".to_string(),
        _ => format!(
            "API request failed with status: {} - {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error")
        ),
    };

    debug!("{} from {}", message, display_url);
    Err(UmbrellaError::api(message))
}

/// Replace every occurrence of `secret` (raw and URL-encoded) in `url`
fn redact(url: &str, secret: &str) -> String {
    if secret.is_empty() {
        return url.to_string();
    }
    let encoded = urlencoding::encode(secret);
    url.replace(encoded.as_ref(), "***").replace(secret, "***")
}
