//! Patrol demo entry point.
mod config;
mod patrol;

use anyhow::Result;
use config::DemoConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = DemoConfig::from_env();
    tracing::info!(?config, "starting patrol");

    let report = patrol::run(&config)?;
    tracing::info!(
        ticks = report.ticks,
        recharges = report.recharges,
        battery = report.battery,
        "patrol complete"
    );

    Ok(())
}

/// Log to stderr, `info` unless `RUST_LOG` says otherwise.
fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
