// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for listing the athlete's activities.
//!
//! Handles:
//! - Building the `/athlete/activities` query with bearer authentication
//! - Pagination within one fetch cycle
//! - Mapping transport failures, HTTP errors and malformed bodies onto
//!   [`AppError`] variants
//!
//! The HTTP exchange itself sits behind [`HttpTransport`] so the client can
//! be driven by a canned transport in tests.

use crate::error::{AppError, Result};
use crate::models::ActivityRecord;
use std::future::Future;
use std::time::Duration;

/// Raw HTTP response: status code plus body bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Body as text for logging (lossy).
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// "Send a GET with a bearer token, get status + body or a failure."
pub trait HttpTransport {
    /// Perform a GET request.
    ///
    /// Returns `Err(AppError::Transport)` when no response was received
    /// (DNS, TLS, timeout, connection reset).
    fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        bearer_token: &str,
    ) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// Production transport backed by `reqwest`.
#[derive(Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client error: {}", e)))?;
        Ok(Self { http })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        bearer_token: &str,
    ) -> Result<HttpResponse> {
        let response = self
            .http
            .get(url)
            .bearer_auth(bearer_token)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read body: {}", e)))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient<T> {
    transport: T,
    base_url: String,
    access_token: String,
    per_page: u32,
    max_pages: u32,
}

impl<T: HttpTransport> StravaClient<T> {
    /// Create a new Strava client with a static access token.
    pub fn new(transport: T, base_url: &str, access_token: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
            per_page: 100,
            max_pages: 10,
        }
    }

    /// Override page size and the per-cycle page limit.
    pub fn with_paging(mut self, per_page: u32, max_pages: u32) -> Self {
        self.per_page = per_page.max(1);
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn activities_url(&self) -> String {
        format!("{}/athlete/activities", self.base_url)
    }

    /// List one page of activities started after `after` (Unix timestamp).
    pub async fn list_activities(&self, after: i64, page: u32) -> Result<Vec<ActivityRecord>> {
        let url = self.activities_url();
        let query = [
            ("after", after.to_string()),
            ("page", page.to_string()),
            ("per_page", self.per_page.to_string()),
        ];

        let response = self
            .transport
            .get(&url, &query, &self.access_token)
            .await?;

        check_response(&response)?;
        parse_activities(&response.body)
    }

    /// List every activity started after `after`, following pagination.
    ///
    /// Stops at the first short page or after `max_pages` pages. Any page
    /// failing fails the whole listing.
    pub async fn list_activities_since(&self, after: i64) -> Result<Vec<ActivityRecord>> {
        let mut activities = Vec::new();

        for page in 1..=self.max_pages {
            let batch = self.list_activities(after, page).await?;
            let batch_len = batch.len();
            activities.extend(batch);

            if batch_len < self.per_page as usize {
                return Ok(activities);
            }
        }

        tracing::warn!(
            max_pages = self.max_pages,
            fetched = activities.len(),
            "Page limit reached, weekly totals may be incomplete"
        );
        Ok(activities)
    }
}

/// Check response status and return error if not successful.
fn check_response(response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }

    let body = response.body_text();

    if response.status == AppError::STATUS_RATE_LIMITED {
        tracing::warn!("Strava rate limit hit (429)");
    } else if response.status == AppError::STATUS_UNAUTHORIZED {
        tracing::warn!("Strava rejected the access token (401)");
    }

    Err(AppError::Remote {
        status: response.status,
        body,
    })
}

/// Parse an activities page.
///
/// The payload must be a JSON array; anything else is malformed. Individual
/// entries are parsed leniently.
pub fn parse_activities(body: &[u8]) -> Result<Vec<ActivityRecord>> {
    let values: Vec<serde_json::Value> = serde_json::from_slice(body)
        .map_err(|e| AppError::Parse(format!("JSON parse error: {}", e)))?;

    Ok(values.into_iter().map(ActivityRecord::from_json).collect())
}
