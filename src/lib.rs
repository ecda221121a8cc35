//! `umbrella` - will you need an umbrella in the next 12 hours?
//!
//! Resolves a location with Google Maps geocoding, fetches the hourly
//! forecast from Pirate Weather, and reports the hours likely to see
//! precipitation.

pub mod api;
pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod location_resolver;
pub mod logging;
pub mod models;
pub mod precipitation;

// Re-export core types for public API
pub use api::ApiClient;
pub use app::App;
pub use config::UmbrellaConfig;
pub use error::UmbrellaError;
pub use location_resolver::LocationResolver;
pub use models::{ForecastDocument, HourlyDataPoint, Location};
pub use precipitation::{PrecipitationPolicy, PrecipitationReport, check_precipitation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, UmbrellaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
