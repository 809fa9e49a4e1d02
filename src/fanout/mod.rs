//! Upstream fan-out subsystem.
//!
//! # Data Flow
//! ```text
//! target URLs (from environment::targets)
//!     → fetcher.rs (one task per URL, optional permit + deadline)
//!     → mpsc channel sized to the URL count
//!     → gather: exactly N receives, completion order
//!     → outcome.rs (typed outcome, rendered as body or "error")
//! ```
//!
//! # Design Decisions
//! - Defaults reproduce the bare service: unbounded, no deadline, no cancellation
//! - HTTP status codes are not failures; only transport errors are
//! - Failures stay typed inside the library and collapse to the sentinel on the wire

pub mod fetcher;
pub mod outcome;

pub use fetcher::Fetcher;
pub use outcome::{FetchError, FetchOutcome, ERROR_SENTINEL};
