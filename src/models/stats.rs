//! Weekly running summary shown on the display.
//!
//! There is exactly one `WeeklyStats` per device. It is reset at the start of
//! every fetch cycle and filled in by aggregation when the cycle succeeds.

use crate::models::ActivityRecord;

/// Meters in one statute mile.
pub const METERS_PER_MILE: f64 = 1609.344;

pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

/// Aggregated statistics for the current week's runs.
///
/// When `valid` is false the numeric fields must not be displayed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyStats {
    /// Sum of run distances (meters)
    pub total_distance_meters: f64,
    /// Sum of run moving times (seconds)
    pub total_time_seconds: u64,
    /// Number of qualifying runs
    pub run_count: u32,
    /// Sum of run elevation gains (meters)
    pub total_elevation_gain_meters: f64,
    /// Whether the most recent fetch and parse succeeded
    pub valid: bool,
}

impl WeeklyStats {
    /// Zeroed, invalid stats. Used at startup and on every failed cycle.
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Zeroed stats for an empty but successfully fetched week.
    pub fn empty_valid() -> Self {
        Self {
            valid: true,
            ..Self::default()
        }
    }

    /// Reset every field to zero and mark invalid, in place.
    pub fn reset(&mut self) {
        *self = Self::invalid();
    }

    /// Add an activity to the running totals.
    ///
    /// Returns `true` if the activity counted (it was a run).
    pub fn add_activity(&mut self, activity: &ActivityRecord) -> bool {
        if !activity.is_run() {
            return false;
        }

        self.total_distance_meters += activity.distance_meters;
        self.total_time_seconds = self
            .total_time_seconds
            .saturating_add(activity.moving_time_seconds);
        self.total_elevation_gain_meters += activity.elevation_gain_meters;
        self.run_count += 1;
        true
    }

    pub fn distance_km(&self) -> f64 {
        self.total_distance_meters / 1000.0
    }

    pub fn distance_miles(&self) -> f64 {
        meters_to_miles(self.total_distance_meters)
    }

    /// Moving time split into whole hours and remaining whole minutes.
    pub fn hours_minutes(&self) -> (u64, u64) {
        let hours = self.total_time_seconds / 3600;
        let minutes = (self.total_time_seconds % 3600) / 60;
        (hours, minutes)
    }

    /// Average pace in seconds per kilometer, or `None` with no distance.
    pub fn average_pace_secs_per_km(&self) -> Option<u64> {
        if self.total_distance_meters <= 0.0 {
            return None;
        }
        Some((self.total_time_seconds as f64 / self.distance_km()) as u64)
    }

    /// Average pace formatted as `m:ss /km`, or `N/A`.
    pub fn format_pace(&self) -> String {
        match self.average_pace_secs_per_km() {
            Some(pace) => format!("{}:{:02} /km", pace / 60, pace % 60),
            None => "N/A".to_string(),
        }
    }
}
