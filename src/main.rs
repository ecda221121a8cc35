use anyhow::Context;
use std::io;
use std::process::ExitCode;
use tracing::{debug, warn};
use umbrella::{App, UmbrellaConfig, UmbrellaError, logging};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let config = UmbrellaConfig::load().context("Failed to load configuration")?;
    logging::init(&config.logging);

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!("Ignoring unreadable .env file: {}", e);
        }
    }

    let app = App::new(config).context("Failed to create HTTP client")?;

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    app.run(&mut input, &mut out)?;

    Ok(())
}

/// Print the failure once for the user; the log only keeps the full chain
fn report(err: &anyhow::Error) {
    debug!("Run failed: {:#}", err);

    match err.downcast_ref::<UmbrellaError>() {
        // Not found is an answer for the user, not a failure of the tool
        Some(e @ UmbrellaError::LocationNotFound { .. }) => println!("{}", e.user_message()),
        Some(e) => eprintln!("{}", e.user_message()),
        None => eprintln!("Error: {err:#}"),
    }
}
