//! Top-level pipeline: prompt, geocode, forecast, report
//!
//! Input and output are injected so the whole run can be driven from tests.

use crate::api::ApiClient;
use crate::config::UmbrellaConfig;
use crate::display;
use crate::location_resolver::LocationResolver;
use crate::precipitation::{PrecipitationReport, check_precipitation};
use crate::{Result, UmbrellaError};
use chrono::Utc;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

pub struct App {
    api_client: ApiClient,
}

impl App {
    pub fn new(config: UmbrellaConfig) -> Result<Self> {
        Ok(Self {
            api_client: ApiClient::new(config)?,
        })
    }

    /// Run one query end to end
    ///
    /// Returns the precipitation report, or `None` when the forecast carried no
    /// hourly data. Any error ends the run; the weather service is not called
    /// if the location cannot be resolved.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<Option<PrecipitationReport>> {
        display::write_header(out)?;
        display::write_prompt(out)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(UmbrellaError::validation("No location entered"));
        }

        self.report_for(&line, out)
    }

    /// Everything after the prompt: resolve `query` and print its report
    #[instrument(skip(self, out))]
    pub fn report_for<W: Write>(
        &self,
        query: &str,
        out: &mut W,
    ) -> Result<Option<PrecipitationReport>> {
        let query = LocationResolver::normalize(query)?;
        let config = self.api_client.config();

        display::write_checking(out, query)?;
        let location = LocationResolver::resolve_location(&self.api_client, query)?;
        display::write_coordinates(out, &location)?;

        let forecast = self.api_client.get_forecast(&location)?;
        display::write_conditions(out, &forecast, config.weather.temperature_unit())?;

        let report = match forecast.hourly_data() {
            Some(hours) => {
                let report =
                    check_precipitation(out, hours, Utc::now(), &config.report.policy())?;
                info!(
                    "Umbrella advised: {} ({} warning hours)",
                    report.needs_umbrella(),
                    report.warnings.len()
                );
                Some(report)
            }
            None => {
                info!("Forecast has no hourly data, skipping precipitation check");
                None
            }
        };

        display::write_footer(out)?;
        Ok(report)
    }
}
