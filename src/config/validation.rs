//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before the listener is bound

use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener port must be non-zero")]
    ZeroPort,

    #[error("listener host must not be empty")]
    EmptyHost,

    #[error("fetch timeout must be greater than zero")]
    ZeroFetchTimeout,

    #[error("max concurrent fetches must be greater than zero")]
    ZeroConcurrency,

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }
    if config.fetch.timeout.is_some_and(|t| t.is_zero()) {
        errors.push(ValidationError::ZeroFetchTimeout);
    }
    if config.fetch.max_concurrency == Some(0) {
        errors.push(ValidationError::ZeroConcurrency);
    }
    if config.timeouts.request.is_some_and(|t| t.is_zero()) {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if let Some(addr) = &config.observability.metrics_address {
        if addr.parse::<SocketAddr>().is_err() {
            errors.push(ValidationError::MetricsAddress(addr.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
