//! Configuration management for the umbrella application
//!
//! The two API keys come from `GMAPS_KEY` and `PIRATE_WEATHER_KEY`. Everything
//! else has a default and can be overridden from an optional TOML file or from
//! `UMBRELLA_*` environment variables (`UMBRELLA_LOGGING__LEVEL=debug`).

use crate::precipitation::{PRECIP_PROB_THRESHOLD, PrecipitationPolicy, WINDOW_HOURS};
use crate::{Result, UmbrellaError};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the Google Maps geocoding key
pub const GMAPS_KEY_ENV: &str = "GMAPS_KEY";
/// Environment variable holding the Pirate Weather key
pub const PIRATE_WEATHER_KEY_ENV: &str = "PIRATE_WEATHER_KEY";
/// Environment variable pointing at an alternate config file
pub const CONFIG_PATH_ENV: &str = "UMBRELLA_CONFIG";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UmbrellaConfig {
    /// Geocoding service settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// Forecast service settings
    #[serde(default)]
    pub weather: WeatherConfig,
    /// HTTP client settings shared by both services
    #[serde(default)]
    pub http: HttpConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Precipitation report policy
    #[serde(default)]
    pub report: ReportConfig,
}

/// Google Maps geocoding settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
}

/// Pirate Weather forecast settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Unit system requested from the forecast API (us, si, ca, uk)
    #[serde(default = "default_units")]
    pub units: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Probability above which an hour is reported
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Number of hours examined after the current one
    #[serde(default = "default_window_hours")]
    pub window_hours: u32,
}

fn default_geocoding_base_url() -> String {
    "https://maps.googleapis.com/maps/api/geocode/json".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.pirateweather.net/forecast".to_string()
}

fn default_units() -> String {
    "us".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_threshold() -> f64 {
    PRECIP_PROB_THRESHOLD
}

fn default_window_hours() -> u32 {
    WINDOW_HOURS as u32
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_geocoding_base_url(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            units: default_units(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            window_hours: default_window_hours(),
        }
    }
}

impl WeatherConfig {
    /// Temperature unit label matching the requested unit system
    #[must_use]
    pub fn temperature_unit(&self) -> &'static str {
        if self.units == "us" { "°F" } else { "°C" }
    }
}

impl ReportConfig {
    #[must_use]
    pub fn policy(&self) -> PrecipitationPolicy {
        PrecipitationPolicy {
            threshold: self.threshold,
            window_hours: self.window_hours as usize,
        }
    }
}

impl UmbrellaConfig {
    /// Load configuration from the default file location and the environment
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        Self::load_from_path(path)
    }

    /// Load configuration from the given file (if any) and the environment
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let geocoding_key = std::env::var(GMAPS_KEY_ENV).ok();
        let weather_key = std::env::var(PIRATE_WEATHER_KEY_ENV).ok();
        Self::build(config_path, geocoding_key, weather_key)
    }

    /// Assemble defaults, file, `UMBRELLA_*` variables and the two API keys
    pub fn build(
        config_path: Option<PathBuf>,
        geocoding_key: Option<String>,
        weather_key: Option<String>,
    ) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.or_else(Self::get_config_path);
        if let Some(config_file) = config_file.filter(|path| path.exists()) {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("UMBRELLA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .set_override_option("geocoding.api_key", geocoding_key)
            .and_then(|b| b.set_override_option("weather.api_key", weather_key))
            .and_then(|b| b.build())
            .map_err(|e| UmbrellaError::config(format!("failed to build configuration: {e}")))?;

        let mut config: UmbrellaConfig = settings
            .try_deserialize()
            .map_err(|e| UmbrellaError::config(format!("failed to read configuration: {e}")))?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("umbrella").join("config.toml"))
    }

    /// Replace blank values with their defaults
    pub fn apply_defaults(&mut self) {
        if self.geocoding.base_url.is_empty() {
            self.geocoding.base_url = default_geocoding_base_url();
        }
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.units.is_empty() {
            self.weather.units = default_units();
        }
        if self.http.timeout_seconds == 0 {
            self.http.timeout_seconds = default_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.report.window_hours == 0 {
            self.report.window_hours = default_window_hours();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Both keys are required before any request is made
    pub fn validate_api_keys(&self) -> Result<()> {
        let keys = [
            (GMAPS_KEY_ENV, &self.geocoding.api_key),
            (PIRATE_WEATHER_KEY_ENV, &self.weather.api_key),
        ];

        for (name, key) in keys {
            match key.as_deref().map(str::trim) {
                None => return Err(UmbrellaError::config(format!("{name} is not set"))),
                Some("") => return Err(UmbrellaError::config(format!("{name} is empty"))),
                Some(_) => {}
            }
        }

        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.http.timeout_seconds > 300 {
            return Err(UmbrellaError::config(
                "HTTP timeout cannot exceed 300 seconds",
            ));
        }

        if !(self.report.threshold > 0.0 && self.report.threshold < 1.0) {
            return Err(UmbrellaError::config(format!(
                "Report threshold must be between 0 and 1, got: {}",
                self.report.threshold
            )));
        }

        if self.report.window_hours > 48 {
            return Err(UmbrellaError::config(
                "Report window cannot exceed 48 hours",
            ));
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(UmbrellaError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(UmbrellaError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        let valid_units = ["us", "si", "ca", "uk"];
        if !valid_units.contains(&self.weather.units.as_str()) {
            return Err(UmbrellaError::config(format!(
                "Invalid units '{}'. Must be one of: {}",
                self.weather.units,
                valid_units.join(", ")
            )));
        }

        for url in [&self.geocoding.base_url, &self.weather.base_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(UmbrellaError::config(format!(
                    "Base URL must be a valid HTTP or HTTPS URL, got: {url}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn keyed_config() -> UmbrellaConfig {
        let mut config = UmbrellaConfig::default();
        config.geocoding.api_key = Some("gmaps-test-key".to_string());
        config.weather.api_key = Some("pirate-test-key".to_string());
        config
    }

    #[test]
    fn test_default_config() {
        let config = UmbrellaConfig::default();
        assert_eq!(
            config.geocoding.base_url,
            "https://maps.googleapis.com/maps/api/geocode/json"
        );
        assert_eq!(config.weather.base_url, "https://api.pirateweather.net/forecast");
        assert_eq!(config.weather.units, "us");
        assert_eq!(config.http.timeout_seconds, 30);
        assert_eq!(config.report.threshold, 0.10);
        assert_eq!(config.report.window_hours, 12);
        assert!(config.geocoding.api_key.is_none());
    }

    #[test]
    fn test_missing_geocoding_key_is_config_error() {
        let mut config = keyed_config();
        config.geocoding.api_key = None;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, UmbrellaError::Config { .. }));
        assert!(err.to_string().contains("GMAPS_KEY"));
    }

    #[test]
    fn test_blank_weather_key_is_config_error() {
        let mut config = keyed_config();
        config.weather.api_key = Some("   ".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("PIRATE_WEATHER_KEY is empty"));
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = keyed_config();
        config.logging.level = "loud".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_threshold_range() {
        let mut config = keyed_config();
        config.report.threshold = 1.5;
        assert!(config.validate().is_err());

        config.report.threshold = 0.25;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_temperature_unit() {
        let mut config = keyed_config();
        assert_eq!(config.weather.temperature_unit(), "°F");
        config.weather.units = "si".to_string();
        assert_eq!(config.weather.temperature_unit(), "°C");
    }

    #[test]
    fn test_build_requires_keys() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = UmbrellaConfig::build(Some(missing), None, Some("pirate".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("GMAPS_KEY is not set"));
    }

    #[test]
    fn test_build_reads_file_and_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[weather]
units = "si"
api_key = "from-file"

[report]
window_hours = 6
"#
        )
        .unwrap();

        let config = UmbrellaConfig::build(
            Some(file.path().to_path_buf()),
            Some("gmaps".to_string()),
            Some("pirate".to_string()),
        )
        .unwrap();

        assert_eq!(config.weather.units, "si");
        assert_eq!(config.report.window_hours, 6);
        assert_eq!(config.weather.api_key.as_deref(), Some("pirate"));
        assert_eq!(config.geocoding.api_key.as_deref(), Some("gmaps"));
        assert_eq!(config.report.policy().window_hours, 6);
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = UmbrellaConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("umbrella"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
