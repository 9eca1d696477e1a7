// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use strava_weekly_display::app::App;
use strava_weekly_display::config::Config;
use strava_weekly_display::display::FrameBuffer;
use strava_weekly_display::error::{AppError, Result};
use strava_weekly_display::services::{
    Clock, Connectivity, HttpResponse, HttpTransport, StatsFetcher,
};

/// Canned outcome for one request.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Canned {
    Response(u16, String),
    TransportFailure(String),
}

/// A request seen by the fake transport.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub bearer_token: String,
}

impl RecordedRequest {
    #[allow(dead_code)]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Transport that replays queued outcomes, then repeats `fallback`.
#[derive(Clone)]
pub struct FakeTransport {
    queue: Arc<Mutex<VecDeque<Canned>>>,
    fallback: Arc<Mutex<Canned>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[allow(dead_code)]
impl FakeTransport {
    pub fn new(fallback: Canned) -> Self {
        Self {
            queue: Arc::new(Mutex::new(VecDeque::new())),
            fallback: Arc::new(Mutex::new(fallback)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always answer 200 with `body`.
    pub fn ok(body: &str) -> Self {
        Self::new(Canned::Response(200, body.to_string()))
    }

    pub fn push(&self, canned: Canned) {
        self.queue.lock().unwrap().push_back(canned);
    }

    pub fn set_fallback(&self, canned: Canned) {
        *self.fallback.lock().unwrap() = canned;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl HttpTransport for FakeTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        bearer_token: &str,
    ) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            bearer_token: bearer_token.to_string(),
        });

        let canned = self
            .queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.lock().unwrap().clone());

        match canned {
            Canned::Response(status, body) => Ok(HttpResponse {
                status,
                body: body.into_bytes(),
            }),
            Canned::TransportFailure(msg) => Err(AppError::Transport(msg)),
        }
    }
}

/// Simulated clock: fixed wall time, manually advanced monotonic time.
#[derive(Clone)]
#[allow(dead_code)]
pub struct FakeClock {
    millis: Arc<AtomicU64>,
    synced: Arc<AtomicBool>,
    wall_start: DateTime<Utc>,
}

#[allow(dead_code)]
impl FakeClock {
    pub fn new(wall_start: DateTime<Utc>) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(0)),
            synced: Arc::new(AtomicBool::new(true)),
            wall_start,
        }
    }

    pub fn advance(&self, millis: u64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }

    pub fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }

    pub fn set_synced(&self, synced: bool) {
        self.synced.store(synced, Ordering::SeqCst);
    }
}

impl Clock for FakeClock {
    fn wall_time(&self) -> Option<DateTime<Utc>> {
        if !self.synced.load(Ordering::SeqCst) {
            return None;
        }
        let elapsed = chrono::Duration::milliseconds(self.now_millis() as i64);
        Some(self.wall_start + elapsed)
    }

    fn monotonic_millis(&self) -> u64 {
        self.now_millis()
    }
}

/// Connectivity switch shared with the test.
#[derive(Clone)]
#[allow(dead_code)]
pub struct FakeConnectivity {
    connected: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl FakeConnectivity {
    pub fn new(connected: bool) -> Self {
        Self {
            connected: Arc::new(AtomicBool::new(connected)),
        }
    }

    pub fn set(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }
}

impl Connectivity for FakeConnectivity {
    async fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

/// Wednesday 2024-01-17 10:30:00 UTC; its week starts Monday 2024-01-15.
#[allow(dead_code)]
pub fn wednesday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 17, 10, 30, 0).unwrap()
}

/// Unix timestamp of Monday 2024-01-15 00:00:00 UTC.
#[allow(dead_code)]
pub const WEEK_START: i64 = 1_705_276_800;

/// Two runs and a ride, as Strava would return them.
#[allow(dead_code)]
pub const WEEK_BODY: &str = r#"[
    {"id": 1, "name": "Easy", "type": "Run", "distance": 3000.0, "moving_time": 900, "total_elevation_gain": 12.0},
    {"id": 2, "name": "Commute", "type": "Ride", "distance": 20000.0, "moving_time": 3000},
    {"id": 3, "name": "Tempo", "type": "Run", "distance": 4000.0, "moving_time": 1000, "total_elevation_gain": 8.0}
]"#;

#[allow(dead_code)]
pub type TestApp = App<FakeTransport, FakeClock, FakeConnectivity, FrameBuffer>;

/// Build an app wired to fakes; returns handles to drive them.
#[allow(dead_code)]
pub fn create_test_app(
    transport: FakeTransport,
) -> (TestApp, FakeTransport, FakeClock, FakeConnectivity) {
    let config = Config::default();
    let clock = FakeClock::new(wednesday());
    let connectivity = FakeConnectivity::new(true);
    let fetcher = StatsFetcher::from_config(transport.clone(), &config);
    let app = App::new(
        &config,
        fetcher,
        clock.clone(),
        connectivity.clone(),
        FrameBuffer::new(),
    );
    (app, transport, clock, connectivity)
}
