//! Concurrent scatter/gather over upstream URLs.
//!
//! # Responsibilities
//! - Spawn one task per target URL
//! - Read whole response bodies regardless of status
//! - Fold transport failures into typed outcomes and log them
//! - Optionally cap in-flight calls and bound each call with a deadline

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{mpsc, Semaphore};

use crate::config::FetchConfig;
use crate::fanout::outcome::{FetchError, FetchOutcome};
use crate::observability::metrics;

/// Upstream fetcher shared by every request of a service.
///
/// Cheap to clone: the client and the permit pool are reference counted.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    timeout: Option<Duration>,
    permits: Option<Arc<Semaphore>>,
}

impl Fetcher {
    /// Create a fetcher with a default client.
    pub fn new(config: &FetchConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a fetcher around an existing client.
    pub fn with_client(client: reqwest::Client, config: &FetchConfig) -> Self {
        Self {
            client,
            timeout: config.timeout,
            permits: config.max_concurrency.map(|n| Arc::new(Semaphore::new(n))),
        }
    }

    /// Fetch every URL concurrently and collect one outcome per URL.
    ///
    /// Outcomes arrive in completion order, not dispatch order. Without a
    /// configured timeout this waits as long as the slowest upstream does.
    pub async fn scatter_gather(&self, urls: Vec<String>) -> Vec<FetchOutcome> {
        let expected = urls.len();
        let start = Instant::now();

        // Room for every result so no task ever waits on send
        let (tx, mut rx) = mpsc::channel(expected.max(1));

        for url in urls {
            tracing::debug!(url = %url, "fetching {}", url);
            let tx = tx.clone();
            let fetcher = self.clone();
            tokio::spawn(async move {
                let outcome = fetcher.fetch_one(&url).await;
                let _ = tx.send(outcome).await;
            });
        }
        drop(tx);

        let mut outcomes = Vec::with_capacity(expected);
        while outcomes.len() < expected {
            match rx.recv().await {
                Some(outcome) => outcomes.push(outcome),
                None => {
                    // Every sender is gone: the remaining tasks panicked
                    tracing::error!(
                        missing = expected - outcomes.len(),
                        "Fetch tasks ended without reporting"
                    );
                    while outcomes.len() < expected {
                        outcomes.push(FetchOutcome::Failed(FetchError::Aborted));
                    }
                }
            }
        }

        metrics::record_gather(expected, start);
        outcomes
    }

    /// Fetch a single URL.
    pub async fn fetch_one(&self, url: &str) -> FetchOutcome {
        // Held until the call finishes
        let _permit = match &self.permits {
            Some(permits) => Arc::clone(permits).acquire_owned().await.ok(),
            None => None,
        };

        let call = get_body(&self.client, url);
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or(Err(FetchError::TimedOut(limit))),
            None => call.await,
        };

        let outcome = match result {
            Ok(body) => FetchOutcome::Body(body),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Upstream fetch failed");
                FetchOutcome::Failed(e)
            }
        };
        metrics::record_fetch(outcome.label());
        outcome
    }
}

/// Issue a GET and read the body. Status codes are ignored.
async fn get_body(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let mut response = client.get(url).send().await?;
    tracing::debug!(url = %url, status = %response.status(), "Upstream responded");

    // A body that breaks off mid-read still counts: keep what arrived
    let mut body = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(
                    url = %url,
                    error = %e,
                    received = body.len(),
                    "Upstream body ended early"
                );
                break;
            }
        }
    }
    Ok(String::from_utf8_lossy(&body).into_owned())
}
