//! Per-target fetch results.

use std::time::Duration;

/// Wire placeholder for a failed fetch.
pub const ERROR_SENTINEL: &str = "error";

/// Why an upstream fetch produced no body.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or URL error from the client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The configured per-call deadline expired.
    #[error("upstream call timed out after {0:?}")]
    TimedOut(Duration),

    /// The fetch task ended without reporting a result.
    #[error("fetch task aborted before reporting")]
    Aborted,
}

/// Result of fetching one target.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Full response body, whatever the status code.
    Body(String),
    Failed(FetchError),
}

impl FetchOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    /// Text written into the aggregated response.
    pub fn as_wire(&self) -> &str {
        match self {
            FetchOutcome::Body(body) => body,
            FetchOutcome::Failed(_) => ERROR_SENTINEL,
        }
    }

    /// Label used for metrics.
    pub fn label(&self) -> &'static str {
        match self {
            FetchOutcome::Body(_) => "success",
            FetchOutcome::Failed(FetchError::Transport(_)) => "transport_error",
            FetchOutcome::Failed(FetchError::TimedOut(_)) => "timeout",
            FetchOutcome::Failed(FetchError::Aborted) => "aborted",
        }
    }
}
