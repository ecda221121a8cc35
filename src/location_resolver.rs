//! Location Resolution Module
//!
//! Turns the user's free-text query into coordinates. A query that the
//! geocoder cannot match is reported as [`UmbrellaError::LocationNotFound`];
//! deciding what to do about it is left to the caller.

use crate::api::ApiClient;
use crate::models::Location;
use crate::{Result, UmbrellaError};
use tracing::debug;

/// Service for resolving location queries
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve a location query into coordinates using the first geocoding match
    pub fn resolve_location(api_client: &ApiClient, query: &str) -> Result<Location> {
        let query = Self::normalize(query)?;
        debug!("Resolving location query: {}", query);

        let location = api_client
            .geocode(query)?
            .into_iter()
            .next()
            .map(Location::from)
            .ok_or_else(|| UmbrellaError::location_not_found(query))?;

        debug!(
            "Resolved location: {} at ({}, {})",
            location.name.as_deref().unwrap_or(query),
            location.latitude,
            location.longitude
        );

        Ok(location)
    }

    /// Trim the query and reject it when nothing is left
    pub fn normalize(query: &str) -> Result<&str> {
        let query = query.trim();
        if query.is_empty() {
            return Err(UmbrellaError::validation("Location cannot be empty"));
        }
        Ok(query)
    }
}
