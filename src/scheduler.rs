// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Refresh timer deciding when the next fetch cycle is due.
//!
//! The scheduler is a two-state machine evaluated on every poll tick:
//! **Idle** until the refresh interval has elapsed since the last successful
//! fetch (and the network is up), then **Due** for exactly one tick while the
//! caller runs the fetch cycle.
//!
//! Failed cycles do not move `last_fetch_millis`. Instead they start a short
//! retry delay, so a failing API is retried every `retry_delay_millis` rather
//! than on every tick or only after a full interval.

/// Scheduler state for one poll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Idle,
    Due,
}

/// Timer state owned by the refresh scheduler. All times are monotonic millis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTimer {
    last_fetch_millis: Option<u64>,
    last_failure_millis: Option<u64>,
    interval_millis: u64,
    retry_delay_millis: u64,
}

impl RefreshTimer {
    /// A fresh timer is due immediately.
    pub fn new(interval_millis: u64, retry_delay_millis: u64) -> Self {
        Self {
            last_fetch_millis: None,
            last_failure_millis: None,
            interval_millis,
            retry_delay_millis,
        }
    }

    /// Monotonic time of the last successful fetch.
    pub fn last_fetch_millis(&self) -> Option<u64> {
        self.last_fetch_millis
    }

    pub fn last_failure_millis(&self) -> Option<u64> {
        self.last_failure_millis
    }

    /// Time since the last successful fetch.
    pub fn millis_since_last_fetch(&self, now_millis: u64) -> Option<u64> {
        self.last_fetch_millis
            .map(|last| now_millis.saturating_sub(last))
    }

    /// Timing half of the Idle→Due transition (connectivity not considered).
    pub fn interval_elapsed(&self, now_millis: u64) -> bool {
        let interval_ok = match self.last_fetch_millis {
            Some(last) => now_millis.saturating_sub(last) >= self.interval_millis,
            None => true,
        };
        let retry_ok = match self.last_failure_millis {
            Some(failed) => now_millis.saturating_sub(failed) >= self.retry_delay_millis,
            None => true,
        };
        interval_ok && retry_ok
    }

    /// Evaluate the state machine for this tick.
    pub fn evaluate(&self, now_millis: u64, connected: bool) -> RefreshState {
        if connected && self.interval_elapsed(now_millis) {
            RefreshState::Due
        } else {
            RefreshState::Idle
        }
    }

    pub fn is_due(&self, now_millis: u64, connected: bool) -> bool {
        self.evaluate(now_millis, connected) == RefreshState::Due
    }

    /// Record a successful cycle: the next one is a full interval away.
    pub fn record_success(&mut self, now_millis: u64) {
        self.last_fetch_millis = Some(now_millis);
        self.last_failure_millis = None;
    }

    /// Record a failed cycle without touching the last successful fetch.
    pub fn record_failure(&mut self, now_millis: u64) {
        self.last_failure_millis = Some(now_millis);
    }
}
