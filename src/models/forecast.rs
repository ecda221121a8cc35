//! Pirate Weather forecast document
//!
//! Every section is optional: the fetcher hands back whatever the service
//! returned and callers decide what missing data means. Fields the report
//! never reads are left to serde's unknown-field handling.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastDocument {
    pub currently: Option<CurrentConditions>,
    pub minutely: Option<MinutelyBlock>,
    pub hourly: Option<HourlyBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentConditions {
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MinutelyBlock {
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlyBlock {
    pub data: Option<Vec<HourlyDataPoint>>,
}

/// One hour of forecast; index 0 is the hour in progress
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HourlyDataPoint {
    #[serde(deserialize_with = "chrono::serde::ts_seconds::deserialize")]
    pub time: DateTime<Utc>,
    /// Fraction in [0, 1]; absent means no precipitation expected
    #[serde(default)]
    pub precip_probability: f64,
}

impl HourlyDataPoint {
    #[must_use]
    pub fn new(time: DateTime<Utc>, precip_probability: f64) -> Self {
        Self {
            time,
            precip_probability,
        }
    }
}

impl ForecastDocument {
    #[must_use]
    pub fn current_temperature(&self) -> Option<f64> {
        self.currently.as_ref().and_then(|c| c.temperature)
    }

    #[must_use]
    pub fn next_hour_summary(&self) -> Option<&str> {
        self.minutely.as_ref().and_then(|m| m.summary.as_deref())
    }

    #[must_use]
    pub fn hourly_data(&self) -> Option<&[HourlyDataPoint]> {
        self.hourly.as_ref().and_then(|h| h.data.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let body = r#"{
            "latitude": 41.8781,
            "longitude": -87.6298,
            "timezone": "America/Chicago",
            "currently": { "time": 1700000000, "temperature": 45.3, "summary": "Cloudy" },
            "minutely": { "summary": "Light rain starting in 20 min." },
            "hourly": {
                "summary": "Rain this evening.",
                "data": [
                    { "time": 1700000000, "precipProbability": 0.0, "temperature": 45.3 },
                    { "time": 1700003600, "precipProbability": 0.42 }
                ]
            }
        }"#;

        let forecast: ForecastDocument = serde_json::from_str(body).unwrap();
        assert_eq!(forecast.current_temperature(), Some(45.3));
        assert_eq!(
            forecast.next_hour_summary(),
            Some("Light rain starting in 20 min.")
        );

        let hours = forecast.hourly_data().unwrap();
        assert_eq!(hours.len(), 2);
        assert_eq!(hours[1].time.timestamp(), 1_700_003_600);
        assert_eq!(hours[1].precip_probability, 0.42);
    }

    #[test]
    fn test_missing_precip_probability_defaults_to_zero() {
        let point: HourlyDataPoint = serde_json::from_str(r#"{"time": 1700000000}"#).unwrap();
        assert_eq!(point.precip_probability, 0.0);
    }

    #[test]
    fn test_missing_sections_are_none() {
        let forecast: ForecastDocument =
            serde_json::from_str(r#"{"currently": {"temperature": 12.0}}"#).unwrap();
        assert_eq!(forecast.current_temperature(), Some(12.0));
        assert!(forecast.next_hour_summary().is_none());
        assert!(forecast.hourly_data().is_none());
    }
}
