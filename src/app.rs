// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Poll loop tying the scheduler, fetch cycle and renderer together.
//!
//! Everything runs on one task: each tick evaluates the refresh timer, and a
//! due tick awaits the whole fetch cycle and the redraw before returning.
//! State therefore needs no locking.

use crate::config::Config;
use crate::display::{render, Panel};
use crate::error::AppError;
use crate::scheduler::RefreshState;
use crate::services::{Clock, Connectivity, HttpTransport, StatsFetcher};
use crate::DashboardState;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// What a single poll tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to do.
    Idle,
    /// Interval elapsed but the network is down; error screen shown.
    Offline,
    /// A fetch cycle ran; `valid` is the resulting stats validity.
    Fetched { valid: bool },
    /// Only the "updated Nm ago" footer changed and was redrawn.
    Redrawn,
}

/// The device application.
pub struct App<T, C, N, P> {
    fetcher: StatsFetcher<T>,
    clock: C,
    connectivity: N,
    panel: P,
    state: DashboardState,
    poll_interval: Duration,
    /// Footer minute value currently on the panel.
    shown_minutes: Option<u64>,
}

impl<T, C, N, P> App<T, C, N, P>
where
    T: HttpTransport,
    C: Clock,
    N: Connectivity,
    P: Panel,
{
    pub fn new(
        config: &Config,
        fetcher: StatsFetcher<T>,
        clock: C,
        connectivity: N,
        panel: P,
    ) -> Self {
        Self {
            fetcher,
            clock,
            connectivity,
            panel,
            state: DashboardState::new(config),
            poll_interval: Duration::from_millis(config.poll_interval_ms.max(1)),
            shown_minutes: None,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Evaluate the scheduler once.
    pub async fn tick(&mut self) -> TickOutcome {
        let now_millis = self.clock.monotonic_millis();

        if !self.state.timer.interval_elapsed(now_millis) {
            return self.refresh_footer(now_millis);
        }

        let connected = self.connectivity.is_connected().await;
        match self.state.timer.evaluate(now_millis, connected) {
            RefreshState::Due => {
                let now = self.clock.wall_time();
                let stats = self
                    .fetcher
                    .run_fetch_cycle(&mut self.state, now, now_millis)
                    .await;
                self.redraw(now_millis);
                TickOutcome::Fetched { valid: stats.valid }
            }
            RefreshState::Idle => {
                let err = AppError::Connectivity;
                tracing::warn!(kind = err.kind(), error = %err, "Skipping refresh");
                self.state.stats.reset();
                self.state.timer.record_failure(now_millis);
                self.redraw(now_millis);
                TickOutcome::Offline
            }
        }
    }

    /// Poll until Ctrl-C.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.tick().await;
                }
                result = &mut shutdown => {
                    result?;
                    tracing::info!("Shutdown requested");
                    return Ok(());
                }
            }
        }
    }

    /// Redraw between fetches when the footer's minute count changes.
    fn refresh_footer(&mut self, now_millis: u64) -> TickOutcome {
        if !self.state.stats.valid {
            return TickOutcome::Idle;
        }
        let minutes = self
            .state
            .timer
            .millis_since_last_fetch(now_millis)
            .map(|ms| ms / 60_000);
        if minutes == self.shown_minutes {
            return TickOutcome::Idle;
        }
        self.redraw(now_millis);
        TickOutcome::Redrawn
    }

    fn redraw(&mut self, now_millis: u64) {
        let since = self.state.timer.millis_since_last_fetch(now_millis);
        let screen = render(&mut self.panel, &self.state.stats, since);
        self.shown_minutes = if self.state.stats.valid {
            since.map(|ms| ms / 60_000)
        } else {
            None
        };

        if let Err(e) = self.panel.flush() {
            tracing::warn!(error = %e, "Failed to flush display");
        }
        tracing::debug!(lines = ?screen.lines(), "Display rendered");
    }
}
