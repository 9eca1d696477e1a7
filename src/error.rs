// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for a single refresh cycle.
//!
//! Every variant is handled the same way at the top level (stats marked
//! invalid, error screen shown). The variants only exist so that each
//! failure kind gets its own diagnostic log line.

/// Failure of one fetch cycle.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Network is not connected")]
    Connectivity,

    #[error("Wall clock has not been synchronized yet")]
    ClockNotSynced,

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Strava API returned HTTP {status}")]
    Remote { status: u16, body: String },

    #[error("Malformed activities payload: {0}")]
    Parse(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status Strava uses for rate limiting.
    pub const STATUS_RATE_LIMITED: u16 = 429;
    /// HTTP status Strava returns for a revoked or invalid token.
    pub const STATUS_UNAUTHORIZED: u16 = 401;

    /// True when no HTTP response was obtained at all.
    pub fn is_transport_level(&self) -> bool {
        matches!(
            self,
            AppError::Connectivity | AppError::ClockNotSynced | AppError::Transport(_)
        )
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, AppError::Remote { status, .. } if *status == Self::STATUS_RATE_LIMITED)
    }

    /// True when the static access token was rejected.
    ///
    /// Token refresh is not supported, so this only changes what gets logged.
    pub fn is_token_error(&self) -> bool {
        matches!(self, AppError::Remote { status, .. } if *status == Self::STATUS_UNAUTHORIZED)
    }

    /// Short machine-friendly label used as a tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Connectivity => "connectivity",
            AppError::ClockNotSynced => "clock_not_synced",
            AppError::Transport(_) => "transport",
            AppError::Remote { .. } => "remote",
            AppError::Parse(_) => "parse",
            AppError::Internal(_) => "internal",
        }
    }
}

/// Result type alias for fetch operations
pub type Result<T> = std::result::Result<T, AppError>;
