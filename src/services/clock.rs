// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wall-clock and monotonic time sources.

use chrono::{DateTime, Utc};
use std::time::Instant;

/// Timestamps before this (2020-01-01T00:00:00Z) mean the clock was never set.
pub const MIN_SYNCED_UNIX: i64 = 1_577_836_800;

/// Time collaborator.
pub trait Clock {
    /// Current UTC time, or `None` while the clock is not synchronized.
    fn wall_time(&self) -> Option<DateTime<Utc>>;

    /// Milliseconds on a monotonic clock. Only differences are meaningful.
    fn monotonic_millis(&self) -> u64;
}

/// Host clock: system time for the wall clock, `Instant` for monotonic time.
#[derive(Debug, Clone)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn wall_time(&self) -> Option<DateTime<Utc>> {
        let now = Utc::now();
        is_synced(now).then_some(now)
    }

    fn monotonic_millis(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Whether a wall-clock reading looks like it came from a synchronized clock.
pub fn is_synced(now: DateTime<Utc>) -> bool {
    now.timestamp() >= MIN_SYNCED_UNIX
}
