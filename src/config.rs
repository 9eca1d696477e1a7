// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Device configuration loaded from environment variables.
//!
//! Everything here is static for the lifetime of the process. The access
//! token in particular is never refreshed.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Default Strava REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://www.strava.com/api/v3";

/// Default refresh interval: 15 minutes.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 900_000;

/// Default delay before retrying after a failed cycle.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 30_000;

/// Default scheduler polling cadence.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

/// Device configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Long-lived Strava access token (sent as a bearer token)
    pub strava_access_token: String,
    /// Strava API base URL, without trailing slash
    pub strava_api_base: String,
    /// Time between successful refreshes
    pub refresh_interval_ms: u64,
    /// Time between attempts after a failure
    pub retry_delay_ms: u64,
    /// How often the scheduler is evaluated
    pub poll_interval_ms: u64,
    /// Per-request timeout enforced by the HTTP transport
    pub request_timeout: Duration,
    /// Page size for `/athlete/activities`
    pub activities_per_page: u32,
    /// Upper bound on pages fetched per cycle
    pub max_pages: u32,
    /// Where to dump the frame buffer after each render, if anywhere
    pub display_snapshot_path: Option<PathBuf>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            strava_access_token: "test_access_token".to_string(),
            strava_api_base: DEFAULT_API_BASE.to_string(),
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            request_timeout: Duration::from_secs(10),
            activities_per_page: 100,
            max_pages: 10,
            display_snapshot_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        Ok(Self {
            strava_access_token: env::var("STRAVA_ACCESS_TOKEN")
                .map(|v| v.trim().to_string())
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing("STRAVA_ACCESS_TOKEN"))?,
            strava_api_base: env::var("STRAVA_API_BASE")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.strava_api_base),
            refresh_interval_ms: parse_or("REFRESH_INTERVAL_MS", defaults.refresh_interval_ms),
            retry_delay_ms: parse_or("RETRY_DELAY_MS", defaults.retry_delay_ms),
            poll_interval_ms: parse_or("POLL_INTERVAL_MS", defaults.poll_interval_ms),
            request_timeout: Duration::from_secs(parse_or(
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )),
            activities_per_page: parse_or("ACTIVITIES_PER_PAGE", defaults.activities_per_page)
                .max(1),
            max_pages: parse_or("MAX_PAGES", defaults.max_pages).max(1),
            display_snapshot_path: env::var("DISPLAY_SNAPSHOT_PATH").ok().map(PathBuf::from),
        })
    }
}

/// Read and parse an env var, falling back to `default` if unset or invalid.
fn parse_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
