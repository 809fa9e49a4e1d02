//! Configuration schema definitions.

use std::time::Duration;

/// Root configuration for a service process.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Listener configuration (bind host and port).
    pub listener: ListenerConfig,

    /// Upstream fan-out settings.
    pub fetch: FetchConfig,

    /// Inbound request timeouts.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind host (e.g., "0.0.0.0").
    pub host: String,

    /// Bind port.
    pub port: u16,
}

impl ListenerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            // Bare IPv6 literal
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Upstream fetch behavior.
///
/// Both knobs default to `None`: every target is fetched at once and a call
/// may wait forever.
#[derive(Debug, Clone, Default)]
pub struct FetchConfig {
    /// Per-call deadline. An expired call yields a failed outcome.
    pub timeout: Option<Duration>,

    /// Process-wide cap on in-flight upstream calls.
    pub max_concurrency: Option<usize>,
}

/// Inbound request timeout configuration.
#[derive(Debug, Clone, Default)]
pub struct TimeoutConfig {
    /// Whole-request deadline enforced by the server (408 on expiry).
    pub request: Option<Duration>,
}

/// Observability configuration.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Prometheus exporter address; metrics are not exported when unset.
    pub metrics_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.listener.bind_address(), "0.0.0.0:8080");
        assert!(config.fetch.timeout.is_none());
        assert!(config.fetch.max_concurrency.is_none());
        assert!(config.timeouts.request.is_none());
        assert!(config.observability.metrics_address.is_none());
    }

    #[test]
    fn test_ipv6_bind_address() {
        let listener = ListenerConfig {
            host: "::".into(),
            port: 9000,
        };
        assert_eq!(listener.bind_address(), "[::]:9000");
    }
}
