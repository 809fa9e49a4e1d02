//! Container microservices library.
//!
//! Two services share this crate:
//! - `common-service` answers `GET /` with its name and version as JSON
//! - `order-service` answers `GET /` with its name and version followed by
//!   the bodies of every configured upstream service, fetched concurrently

// Core subsystems
pub mod environment;
pub mod fanout;
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::{HttpServer, ServiceKind};
pub use lifecycle::Shutdown;

use std::net::SocketAddr;

use config::{load_config, ServiceArgs};

/// Shared startup path for both binaries.
pub async fn run_service(
    kind: ServiceKind,
    args: ServiceArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    tracing::info!(
        service = kind.name(),
        version = env!("CARGO_PKG_VERSION"),
        "starting"
    );

    let config = load_config(args)?;

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        fetch_timeout = ?config.fetch.timeout,
        max_concurrent_fetches = ?config.fetch.max_concurrency,
        request_timeout = ?config.timeouts.request,
        "Configuration loaded"
    );

    if let Some(addr) = &config.observability.metrics_address {
        // Already validated
        if let Ok(addr) = addr.parse::<SocketAddr>() {
            observability::metrics::init_metrics(addr);
        }
    }

    let listener = HttpServer::bind(&config).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            lifecycle::wait_for_signal().await;
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(kind, config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
