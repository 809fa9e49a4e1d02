//! Logging setup.
//!
//! Upstream fetch failures and access logs both go through `tracing`.
//! The filter defaults to info for this crate and `tower_http`, and can be
//! overridden with `RUST_LOG`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "container_services=info,tower_http=info";

/// Install the global subscriber. Call once, before serving.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
