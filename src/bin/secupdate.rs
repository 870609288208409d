use anyhow::{anyhow, Context, Result};
use std::io;
use tracing_subscriber::EnvFilter;

use secupdate::cmd::SystemRunner;
use secupdate::orchestrator::{self, Orchestrator};
use secupdate::platform::HostOs;
use secupdate::settings::Settings;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("Failed to initialize logging")?;

    let host = HostOs::detect();
    let settings = Settings::default();

    // Failures are reported inside run(); the window stays open either way
    let _ = Orchestrator::new(&SystemRunner, &settings).run(&host);

    orchestrator::wait_for_acknowledgement(io::stdin().lock());

    Ok(())
}
