//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers, fetcher
//!     → logging.rs (plain fmt events on stdout)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → container log driver (stdout)
//!     → Metrics endpoint (Prometheus scrape, only when configured)
//! ```
//!
//! # Design Decisions
//! - Human-readable log lines; no JSON records, no correlation ids
//! - Metric updates are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
