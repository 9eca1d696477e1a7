// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava Weekly Run Display
//!
//! Boots straight into the refresh loop: fetch this week's runs from Strava
//! every refresh interval and render the totals on the round display.

use anyhow::Context;
use strava_weekly_display::{
    app::App,
    config::Config,
    display::FrameBuffer,
    services::{DnsConnectivity, ReqwestTransport, StatsFetcher, SystemClock},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        api_base = %config.strava_api_base,
        refresh_interval_ms = config.refresh_interval_ms,
        poll_interval_ms = config.poll_interval_ms,
        "Starting Strava weekly display"
    );

    let transport =
        ReqwestTransport::new(config.request_timeout).context("Failed to build HTTP client")?;
    let fetcher = StatsFetcher::from_config(transport, &config);

    let connectivity = DnsConnectivity::from_base_url(&config.strava_api_base)
        .context("STRAVA_API_BASE is not a valid URL")?
        .with_timeout(config.request_timeout);
    tracing::info!(target_host = %connectivity.target(), "Connectivity check configured");

    let panel = FrameBuffer::new().with_snapshot_path(config.display_snapshot_path.clone());
    if let Some(path) = &config.display_snapshot_path {
        tracing::info!(path = %path.display(), "Writing display snapshots");
    }

    let app = App::new(&config, fetcher, SystemClock::new(), connectivity, panel);
    app.run().await
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("strava_weekly_display=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .try_init()?;
    Ok(())
}
