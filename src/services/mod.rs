// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - fetching, aggregation and device collaborators.

pub mod aggregator;
pub mod clock;
pub mod connectivity;
pub mod fetch_cycle;
pub mod strava;

pub use aggregator::aggregate;
pub use clock::{Clock, SystemClock};
pub use connectivity::{Connectivity, DnsConnectivity};
pub use fetch_cycle::StatsFetcher;
pub use strava::{HttpResponse, HttpTransport, ReqwestTransport, StravaClient};
