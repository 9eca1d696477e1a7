// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava weekly run display
//!
//! This crate periodically fetches the athlete's running activities for the
//! current week from Strava, aggregates them, and renders the totals on a
//! 240x240 round display.

pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod services;
pub mod time_utils;

use config::Config;
use models::WeeklyStats;
use scheduler::RefreshTimer;

/// Mutable device state: the displayed stats and the refresh timer.
///
/// Owned by [`app::App`] and only touched from its poll loop.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub stats: WeeklyStats,
    pub timer: RefreshTimer,
}

impl DashboardState {
    /// Zeroed, invalid stats and a timer that is due immediately.
    pub fn new(config: &Config) -> Self {
        Self {
            stats: WeeklyStats::invalid(),
            timer: RefreshTimer::new(config.refresh_interval_ms, config.retry_delay_ms),
        }
    }
}
