// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Network connectivity check used by the scheduler before each cycle.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

/// Upper bound on a single lookup unless overridden.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Connectivity collaborator.
pub trait Connectivity {
    fn is_connected(&self) -> impl Future<Output = bool> + Send;
}

/// Treats the network as up when the API host resolves.
#[derive(Debug, Clone)]
pub struct DnsConnectivity {
    /// `host:port` to resolve
    target: String,
    timeout: Duration,
}

impl DnsConnectivity {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Derive the `host:port` target from an API base URL.
    pub fn from_base_url(base_url: &str) -> Option<Self> {
        let url = reqwest::Url::parse(base_url).ok()?;
        let host = url.host_str()?;
        let port = url.port_or_known_default()?;
        Some(Self::new(&format!("{}:{}", host, port)))
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Connectivity for DnsConnectivity {
    async fn is_connected(&self) -> bool {
        let lookup = tokio::net::lookup_host(self.target.as_str());
        resolves_within(&self.target, self.timeout, lookup).await
    }
}

/// Anything short of at least one address within `timeout` is disconnected.
async fn resolves_within<F, I>(host: &str, timeout: Duration, lookup: F) -> bool
where
    F: Future<Output = io::Result<I>>,
    I: Iterator<Item = SocketAddr>,
{
    match tokio::time::timeout(timeout, lookup).await {
        Ok(Ok(mut addrs)) => addrs.next().is_some(),
        Ok(Err(e)) => {
            tracing::debug!(host, error = %e, "Connectivity check failed");
            false
        }
        Err(_) => {
            tracing::debug!(
                host,
                timeout_ms = timeout.as_millis() as u64,
                "Connectivity check timed out"
            );
            false
        }
    }
}
