// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reduce a week's activities to the displayed summary.

use crate::models::{ActivityRecord, WeeklyStats};

/// Aggregate activity records into weekly run totals.
///
/// Only activities typed exactly `"Run"` count. The result is always valid:
/// aggregation itself cannot fail, only fetching and parsing can.
pub fn aggregate(records: &[ActivityRecord]) -> WeeklyStats {
    let mut stats = WeeklyStats::empty_valid();
    for record in records {
        stats.add_activity(record);
    }
    stats
}
