//! Precipitation check over the next hours of an hourly forecast
//!
//! The first hourly record is the hour already in progress and is skipped.
//! The following `window_hours` records are compared against the threshold and
//! every hour strictly above it produces one warning line.

use crate::models::HourlyDataPoint;
use chrono::{DateTime, Utc};
use std::fmt;
use std::io::{self, Write};
use tracing::debug;

/// Probability above which an hour is reported (10%)
pub const PRECIP_PROB_THRESHOLD: f64 = 0.10;
/// Hours examined after the current one
pub const WINDOW_HOURS: usize = 12;

pub const UMBRELLA_ADVICE: &str = "You might want to take an umbrella!";
pub const NO_UMBRELLA_ADVICE: &str = "You probably won't need an umbrella.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecipitationPolicy {
    pub threshold: f64,
    pub window_hours: usize,
}

impl Default for PrecipitationPolicy {
    fn default() -> Self {
        Self {
            threshold: PRECIP_PROB_THRESHOLD,
            window_hours: WINDOW_HOURS,
        }
    }
}

/// A single hour that crossed the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecipitationWarning {
    /// Whole hours between now and the forecast hour, rounded to nearest
    pub hours_from_now: i64,
    /// Probability as a rounded percentage
    pub percent: i64,
}

impl PrecipitationWarning {
    fn from_hour(hour: &HourlyDataPoint, now: DateTime<Utc>) -> Self {
        let elapsed_ms = (hour.time - now).num_milliseconds() as f64;
        Self {
            hours_from_now: (elapsed_ms / 3_600_000.0).round() as i64,
            percent: (hour.precip_probability * 100.0).round() as i64,
        }
    }
}

impl fmt::Display for PrecipitationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "In {} hours, there is a {}% chance of precipitation.",
            self.hours_from_now, self.percent
        )
    }
}

/// Outcome of checking a forecast window
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrecipitationReport {
    /// Triggering hours in forecast order
    pub warnings: Vec<PrecipitationWarning>,
}

impl PrecipitationReport {
    /// Evaluate the window following the current hour
    #[must_use]
    pub fn evaluate(
        hours: &[HourlyDataPoint],
        now: DateTime<Utc>,
        policy: &PrecipitationPolicy,
    ) -> Self {
        let warnings: Vec<PrecipitationWarning> = hours
            .iter()
            .skip(1)
            .take(policy.window_hours)
            .filter(|hour| hour.precip_probability > policy.threshold)
            .map(|hour| PrecipitationWarning::from_hour(hour, now))
            .collect();

        debug!(
            "{} of {} hourly records above {:.0}%",
            warnings.len(),
            hours.len().saturating_sub(1).min(policy.window_hours),
            policy.threshold * 100.0
        );

        Self { warnings }
    }

    #[must_use]
    pub fn needs_umbrella(&self) -> bool {
        !self.warnings.is_empty()
    }

    #[must_use]
    pub fn advice(&self) -> &'static str {
        if self.needs_umbrella() {
            UMBRELLA_ADVICE
        } else {
            NO_UMBRELLA_ADVICE
        }
    }

    /// Write one line per warning followed by the advice line
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for warning in &self.warnings {
            writeln!(out, "{warning}")?;
        }
        writeln!(out, "{}", self.advice())
    }
}

/// Evaluate `hours` against `policy` and print the report to `out`
pub fn check_precipitation<W: Write>(
    out: &mut W,
    hours: &[HourlyDataPoint],
    now: DateTime<Utc>,
    policy: &PrecipitationPolicy,
) -> io::Result<PrecipitationReport> {
    let report = PrecipitationReport::evaluate(hours, now, policy);
    report.write_to(out)?;
    Ok(report)
}
