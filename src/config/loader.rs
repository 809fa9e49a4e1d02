//! Configuration loading from startup flags and environment.

use std::time::Duration;

use clap::Parser;

use crate::config::schema::{
    FetchConfig, ListenerConfig, ObservabilityConfig, ServiceConfig, TimeoutConfig,
};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Startup flags shared by both service binaries.
#[derive(Debug, Clone, Parser)]
#[command(version, about = None, long_about = None)]
pub struct ServiceArgs {
    /// Host to bind.
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Per-call upstream timeout in milliseconds (unset: wait forever).
    #[arg(long, env = "FETCH_TIMEOUT_MS")]
    pub fetch_timeout_ms: Option<u64>,

    /// Maximum in-flight upstream calls across all requests (unset: unbounded).
    #[arg(long, env = "MAX_CONCURRENT_FETCHES")]
    pub max_concurrent_fetches: Option<usize>,

    /// Whole-request timeout in seconds (unset: none).
    #[arg(long, env = "REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Address for the Prometheus exporter, e.g. 0.0.0.0:9090.
    #[arg(long, env = "METRICS_ADDRESS")]
    pub metrics_address: Option<String>,
}

impl From<ServiceArgs> for ServiceConfig {
    fn from(args: ServiceArgs) -> Self {
        Self {
            listener: ListenerConfig {
                host: args.host,
                port: args.port,
            },
            fetch: FetchConfig {
                timeout: args.fetch_timeout_ms.map(Duration::from_millis),
                max_concurrency: args.max_concurrent_fetches,
            },
            timeouts: TimeoutConfig {
                request: args.request_timeout_secs.map(Duration::from_secs),
            },
            observability: ObservabilityConfig {
                metrics_address: args.metrics_address,
            },
        }
    }
}

/// Build and validate configuration from parsed startup flags.
pub fn load_config(args: ServiceArgs) -> Result<ServiceConfig, ConfigError> {
    let config = ServiceConfig::from(args);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
