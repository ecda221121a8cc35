//! Console layout: the 40-column banner and current-conditions lines

use crate::models::{ForecastDocument, Location};
use std::io::{self, Write};

/// Width of the banner rules and the centered title
pub const LINE_WIDTH: usize = 40;
pub const TITLE: &str = "Will you need an umbrella today?";
pub const PROMPT: &str = "Where are you? ";

fn rule() -> String {
    "=".repeat(LINE_WIDTH)
}

/// Center `text` in `width` columns, extra padding going to the right
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    format!("{text:^width$}")
}

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", rule())?;
    writeln!(out, "{}", center(TITLE, LINE_WIDTH))?;
    writeln!(out, "{}", rule())?;
    writeln!(out)
}

pub fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule())
}

pub fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()
}

pub fn write_checking<W: Write>(out: &mut W, query: &str) -> io::Result<()> {
    writeln!(out, "Checking the weather at {query}...")
}

pub fn write_coordinates<W: Write>(out: &mut W, location: &Location) -> io::Result<()> {
    writeln!(out, "Your coordinates are {}.", location.format_coordinates())
}

/// Current temperature and the next-hour summary, each only when present
pub fn write_conditions<W: Write>(
    out: &mut W,
    forecast: &ForecastDocument,
    temperature_unit: &str,
) -> io::Result<()> {
    if let Some(temperature) = forecast.current_temperature() {
        writeln!(out, "It is currently {temperature}{temperature_unit}.")?;
    }
    if let Some(summary) = forecast.next_hour_summary() {
        writeln!(out, "Next hour: {summary}")?;
    }
    Ok(())
}
