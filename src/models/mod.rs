//! Data models for the umbrella application
//!
//! This module contains the domain models organized by concern:
//! - Location: resolved coordinates for the user's query
//! - Geocoding: Google Maps geocoding response
//! - Forecast: Pirate Weather forecast document

pub mod forecast;
pub mod geocoding;
pub mod location;

// Re-export all public types for convenient access
pub use forecast::{CurrentConditions, ForecastDocument, HourlyBlock, HourlyDataPoint, MinutelyBlock};
pub use geocoding::{GeocodingResponse, GeocodingResult};
pub use location::Location;
