// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One refresh of the weekly stats.
//!
//! Handles the core workflow:
//! 1. Reset the shared stats
//! 2. Compute the week boundary
//! 3. List this week's activities from Strava
//! 4. Aggregate them and store the result
//! 5. Update the refresh timer

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::stats::meters_to_miles;
use crate::models::WeeklyStats;
use crate::services::aggregator::aggregate;
use crate::services::strava::{HttpTransport, StravaClient};
use crate::time_utils::{format_unix_rfc3339, week_start_for};
use crate::DashboardState;
use chrono::{DateTime, Utc};

/// Runs fetch cycles against the Strava API.
pub struct StatsFetcher<T> {
    client: StravaClient<T>,
}

impl<T: HttpTransport> StatsFetcher<T> {
    pub fn new(client: StravaClient<T>) -> Self {
        Self { client }
    }

    /// Build a fetcher for the configured API base, token and paging.
    pub fn from_config(transport: T, config: &Config) -> Self {
        let client = StravaClient::new(
            transport,
            &config.strava_api_base,
            &config.strava_access_token,
        )
        .with_paging(config.activities_per_page, config.max_pages);
        Self::new(client)
    }

    /// Fetch and aggregate the week containing `now`.
    pub async fn fetch_week(&self, now: DateTime<Utc>) -> Result<WeeklyStats> {
        let week_start = week_start_for(now);
        tracing::info!(
            week_start,
            week_start_utc = %format_unix_rfc3339(week_start),
            "Fetching weekly activities"
        );

        let activities = self.client.list_activities_since(week_start).await?;
        for (index, run) in activities.iter().filter(|a| a.is_run()).enumerate() {
            tracing::debug!(
                run = index + 1,
                distance_km = run.distance_meters / 1000.0,
                distance_miles = meters_to_miles(run.distance_meters),
                moving_time_s = run.moving_time_seconds,
                elevation_m = run.elevation_gain_meters,
                "Run this week"
            );
        }
        let stats = aggregate(&activities);

        tracing::debug!(
            activities = activities.len(),
            runs = stats.run_count,
            "Aggregated weekly activities"
        );
        Ok(stats)
    }

    /// Run one fetch cycle and update `state` in place.
    ///
    /// `now` is `None` while the wall clock is not synchronized, which fails
    /// the cycle. `now_millis` is the monotonic time recorded in the timer.
    /// The stats are reset first, so a failed cycle leaves them zeroed and
    /// invalid. Returns a copy of the resulting stats.
    pub async fn run_fetch_cycle(
        &self,
        state: &mut DashboardState,
        now: Option<DateTime<Utc>>,
        now_millis: u64,
    ) -> WeeklyStats {
        state.stats.reset();

        let outcome = match now {
            Some(now) => self.fetch_week(now).await,
            None => Err(AppError::ClockNotSynced),
        };

        match outcome {
            Ok(stats) => {
                tracing::info!(
                    runs = stats.run_count,
                    distance_km = stats.distance_km(),
                    distance_miles = stats.distance_miles(),
                    moving_time_s = stats.total_time_seconds,
                    elevation_m = stats.total_elevation_gain_meters,
                    pace = %stats.format_pace(),
                    "Weekly stats updated"
                );
                state.stats = stats;
                state.timer.record_success(now_millis);
            }
            Err(e) => {
                log_failure(&e);
                state.timer.record_failure(now_millis);
            }
        }

        state.stats.clone()
    }
}

/// Diagnostic logging per failure kind. The display treats them all alike.
fn log_failure(error: &AppError) {
    match error {
        AppError::Remote { status, body } => {
            tracing::warn!(
                status,
                body = %body,
                rate_limited = error.is_rate_limited(),
                token_rejected = error.is_token_error(),
                "Strava API request failed, discarding response"
            );
        }
        AppError::Parse(msg) => {
            tracing::warn!(error = %msg, "Strava returned a malformed activities payload");
        }
        AppError::Internal(err) => {
            tracing::error!(error = %err, "Internal error during fetch cycle");
        }
        _ => {
            tracing::warn!(
                kind = error.kind(),
                error = %error,
                "Fetch cycle failed without a response"
            );
        }
    }
}
