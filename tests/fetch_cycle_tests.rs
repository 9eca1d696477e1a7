// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fetch cycle tests against a canned HTTP transport.

use strava_weekly_display::config::Config;
use strava_weekly_display::error::AppError;
use strava_weekly_display::services::{StatsFetcher, StravaClient};
use strava_weekly_display::DashboardState;

mod common;
use common::{wednesday, Canned, FakeTransport, WEEK_BODY, WEEK_START};

fn fetcher(transport: &FakeTransport) -> StatsFetcher<FakeTransport> {
    StatsFetcher::from_config(transport.clone(), &Config::default())
}

#[tokio::test]
async fn test_successful_cycle_aggregates_runs() {
    let transport = FakeTransport::ok(WEEK_BODY);
    let mut state = DashboardState::new(&Config::default());

    let stats = fetcher(&transport)
        .run_fetch_cycle(&mut state, Some(wednesday()), 5_000)
        .await;

    assert!(stats.valid);
    assert_eq!(stats.total_distance_meters, 7000.0);
    assert_eq!(stats.total_time_seconds, 1900);
    assert_eq!(stats.run_count, 2);
    assert_eq!(stats.total_elevation_gain_meters, 20.0);
    assert_eq!(state.stats, stats);
    assert_eq!(state.timer.last_fetch_millis(), Some(5_000));
}

#[tokio::test]
async fn test_request_targets_week_start_with_bearer_token() {
    let transport = FakeTransport::ok("[]");
    let mut state = DashboardState::new(&Config::default());

    fetcher(&transport)
        .run_fetch_cycle(&mut state, Some(wednesday()), 0)
        .await;

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.url, "https://www.strava.com/api/v3/athlete/activities");
    assert_eq!(request.param("after"), Some(WEEK_START.to_string().as_str()));
    assert_eq!(request.param("page"), Some("1"));
    assert_eq!(request.param("per_page"), Some("100"));
    assert_eq!(request.bearer_token, "test_access_token");
}

#[tokio::test]
async fn test_empty_week_is_valid_and_zero() {
    let transport = FakeTransport::ok("[]");
    let mut state = DashboardState::new(&Config::default());

    let stats = fetcher(&transport)
        .run_fetch_cycle(&mut state, Some(wednesday()), 0)
        .await;

    assert!(stats.valid);
    assert_eq!(stats.run_count, 0);
    assert_eq!(stats.total_distance_meters, 0.0);
    assert_eq!(stats.total_time_seconds, 0);
}

#[tokio::test]
async fn test_non_200_is_invalid_and_keeps_last_fetch() {
    let transport = FakeTransport::ok(WEEK_BODY);
    let fetcher = fetcher(&transport);
    let mut state = DashboardState::new(&Config::default());

    fetcher
        .run_fetch_cycle(&mut state, Some(wednesday()), 1_000)
        .await;
    assert_eq!(state.timer.last_fetch_millis(), Some(1_000));

    transport.set_fallback(Canned::Response(
        401,
        r#"{"message":"Authorization Error"}"#.to_string(),
    ));
    let stats = fetcher
        .run_fetch_cycle(&mut state, Some(wednesday()), 901_000)
        .await;

    assert!(!stats.valid);
    assert_eq!(state.timer.last_fetch_millis(), Some(1_000));
    assert_eq!(state.timer.last_failure_millis(), Some(901_000));
}

#[tokio::test]
async fn test_failure_clears_stale_numbers() {
    let transport = FakeTransport::ok(WEEK_BODY);
    let fetcher = fetcher(&transport);
    let mut state = DashboardState::new(&Config::default());

    fetcher.run_fetch_cycle(&mut state, Some(wednesday()), 0).await;
    assert_eq!(state.stats.run_count, 2);

    transport.set_fallback(Canned::Response(500, "oops".to_string()));
    fetcher
        .run_fetch_cycle(&mut state, Some(wednesday()), 900_000)
        .await;

    assert!(!state.stats.valid);
    assert_eq!(state.stats.run_count, 0);
    assert_eq!(state.stats.total_distance_meters, 0.0);
}

#[tokio::test]
async fn test_malformed_body_is_invalid() {
    let transport = FakeTransport::ok("{not json");
    let mut state = DashboardState::new(&Config::default());

    let stats = fetcher(&transport)
        .run_fetch_cycle(&mut state, Some(wednesday()), 0)
        .await;

    assert!(!stats.valid);
    assert_eq!(state.timer.last_fetch_millis(), None);
}

#[tokio::test]
async fn test_array_shaped_entries_do_not_count_as_runs() {
    let transport = FakeTransport::ok(
        r#"[["Run", 5000.0, 1500, 0.0], {"type": "Run", "distance": 1000.0, "moving_time": 300}]"#,
    );
    let stats = fetcher(&transport).fetch_week(wednesday()).await.unwrap();

    assert!(stats.valid);
    assert_eq!(stats.run_count, 1);
    assert_eq!(stats.total_distance_meters, 1000.0);
    assert_eq!(stats.total_time_seconds, 300);
}

#[tokio::test]
async fn test_json_object_body_is_parse_error() {
    let transport = FakeTransport::ok(r#"{"activities": []}"#);
    let result = fetcher(&transport).fetch_week(wednesday()).await;
    assert!(matches!(result, Err(AppError::Parse(_))));
}

#[tokio::test]
async fn test_transport_failure_is_invalid_and_keeps_last_fetch() {
    let transport = FakeTransport::new(Canned::TransportFailure("connection reset".to_string()));
    let mut state = DashboardState::new(&Config::default());

    let stats = fetcher(&transport)
        .run_fetch_cycle(&mut state, Some(wednesday()), 0)
        .await;

    assert!(!stats.valid);
    assert_eq!(state.timer.last_fetch_millis(), None);
    assert_eq!(transport.request_count(), 1, "no retries within a cycle");
}

#[tokio::test]
async fn test_unsynced_clock_skips_request() {
    let transport = FakeTransport::ok(WEEK_BODY);
    let mut state = DashboardState::new(&Config::default());

    let stats = fetcher(&transport).run_fetch_cycle(&mut state, None, 0).await;

    assert!(!stats.valid);
    assert_eq!(transport.request_count(), 0);
    assert_eq!(state.timer.last_failure_millis(), Some(0));
}

#[tokio::test]
async fn test_remote_error_reports_status() {
    let transport = FakeTransport::new(Canned::Response(429, "Rate Limit Exceeded".to_string()));
    let err = fetcher(&transport)
        .fetch_week(wednesday())
        .await
        .expect_err("429 should fail");

    assert!(err.is_rate_limited());
    match err {
        AppError::Remote { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "Rate Limit Exceeded");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_pagination_follows_full_pages() {
    let transport = FakeTransport::ok("[]");
    let run = r#"{"type":"Run","distance":1000.0,"moving_time":300}"#;
    transport.push(Canned::Response(200, format!("[{},{}]", run, run)));
    transport.push(Canned::Response(200, format!("[{}]", run)));

    let client = StravaClient::new(transport.clone(), "https://example.test/api/v3/", "tok")
        .with_paging(2, 10);
    let stats = StatsFetcher::new(client)
        .fetch_week(wednesday())
        .await
        .unwrap();

    assert_eq!(stats.run_count, 3);
    assert_eq!(stats.total_distance_meters, 3000.0);

    let pages: Vec<_> = transport
        .requests()
        .iter()
        .map(|r| r.param("page").unwrap().to_string())
        .collect();
    assert_eq!(pages, vec!["1", "2"]);
    assert_eq!(
        transport.requests()[0].url,
        "https://example.test/api/v3/athlete/activities"
    );
}

#[tokio::test]
async fn test_pagination_stops_at_page_limit() {
    let run = r#"{"type":"Run","distance":1000.0,"moving_time":300}"#;
    let transport = FakeTransport::ok(&format!("[{}]", run));

    let client = StravaClient::new(transport.clone(), "https://example.test", "tok")
        .with_paging(1, 3);
    let stats = StatsFetcher::new(client)
        .fetch_week(wednesday())
        .await
        .unwrap();

    assert_eq!(transport.request_count(), 3);
    assert_eq!(stats.run_count, 3);
}

#[tokio::test]
async fn test_failing_second_page_fails_cycle() {
    let run = r#"{"type":"Run","distance":1000.0,"moving_time":300}"#;
    let transport = FakeTransport::new(Canned::Response(503, "unavailable".to_string()));
    transport.push(Canned::Response(200, format!("[{}]", run)));

    let client = StravaClient::new(transport.clone(), "https://example.test", "tok")
        .with_paging(1, 5);
    let result = StatsFetcher::new(client).fetch_week(wednesday()).await;

    assert!(matches!(result, Err(AppError::Remote { status: 503, .. })));
}
