// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity summary as returned by `/athlete/activities`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Type tag of activities counted toward the weekly summary.
pub const RUN_TYPE: &str = "Run";

/// One entry of a parsed activities page.
///
/// Only the fields the weekly summary needs are kept. Every field is lenient:
/// a missing or mistyped value becomes zero/empty for this record instead of
/// failing the whole page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActivityRecord {
    /// Activity type (Run, Ride, Hike, etc.)
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub activity_type: String,
    /// Distance in meters
    #[serde(rename = "distance", deserialize_with = "lenient_f64")]
    pub distance_meters: f64,
    /// Moving time in seconds
    #[serde(rename = "moving_time", deserialize_with = "lenient_u64")]
    pub moving_time_seconds: u64,
    /// Elevation gain in meters
    #[serde(rename = "total_elevation_gain", deserialize_with = "lenient_f64")]
    pub elevation_gain_meters: f64,
}

impl ActivityRecord {
    pub fn new(activity_type: &str, distance_meters: f64, moving_time_seconds: u64) -> Self {
        Self {
            activity_type: activity_type.to_string(),
            distance_meters,
            moving_time_seconds,
            elevation_gain_meters: 0.0,
        }
    }

    /// Build a record from one JSON array element.
    ///
    /// Anything that is not an object yields an all-default record, which
    /// aggregation then ignores (its type is empty). Arrays are rejected here
    /// because serde would otherwise read them positionally.
    pub fn from_json(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Whether this activity counts toward the weekly run totals.
    pub fn is_run(&self) -> bool {
        self.activity_type == RUN_TYPE
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().unwrap_or_default().to_string())
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0))
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v as u64)
        })
        .unwrap_or(0))
}
