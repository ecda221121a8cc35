//! Error types and handling for the umbrella application

use thiserror::Error;

/// Main error type for the umbrella application
#[derive(Error, Debug)]
pub enum UmbrellaError {
    /// Configuration-related errors, e.g. a missing API key
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The geocoding service returned no match for the query
    #[error("Location not found: {location}")]
    LocationNotFound { location: String },

    /// The remote service answered, but not with something usable
    #[error("API error: {message}")]
    Api { message: String },

    /// Transport or body decoding failure from the HTTP client
    #[error("HTTP error: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl UmbrellaError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn location_not_found<S: Into<String>>(location: S) -> Self {
        Self::LocationNotFound {
            location: location.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            UmbrellaError::Config { message } => {
                format!("Configuration error: {message}. Please check your .env file and API keys.")
            }
            UmbrellaError::LocationNotFound { location } => {
                format!("Could not find the location: {location}. Please try again.")
            }
            UmbrellaError::Api { message } => {
                format!("The weather service rejected the request: {message}")
            }
            UmbrellaError::Http { .. } => {
                "Unable to connect to external services. Please check your internet connection."
                    .to_string()
            }
            UmbrellaError::Validation { message } => format!("Invalid input: {message}"),
            UmbrellaError::Io { .. } => {
                "Could not read from or write to the console.".to_string()
            }
        }
    }
}
