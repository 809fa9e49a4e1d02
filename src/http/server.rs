//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router for the selected service
//! - Wire up middleware (tracing, panic recovery, optional timeout)
//! - Bind the listener and serve until shutdown

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::environment::{Environment, ProcessEnv};
use crate::fanout::Fetcher;
use crate::http::handlers::{aggregate_handler, identity_handler, method_not_allowed};

/// Which of the two services this process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// Reports its own identity as JSON.
    Common,
    /// Reports its identity plus whatever the configured targets return.
    Order,
}

impl ServiceKind {
    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::Common => "common-service",
            ServiceKind::Order => "order-service",
        }
    }
}

/// Error type for server operations.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub env: Arc<dyn Environment>,
    pub fetcher: Fetcher,
}

impl AppState {
    pub fn new(env: Arc<dyn Environment>, fetcher: Fetcher) -> Self {
        Self { env, fetcher }
    }
}

/// HTTP server for one of the services.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    kind: ServiceKind,
}

impl HttpServer {
    /// Create a server reading the real process environment.
    pub fn new(kind: ServiceKind, config: ServiceConfig) -> Self {
        Self::with_environment(kind, config, Arc::new(ProcessEnv))
    }

    /// Create a server reading identity and targets from `env`.
    pub fn with_environment(
        kind: ServiceKind,
        config: ServiceConfig,
        env: Arc<dyn Environment>,
    ) -> Self {
        let fetcher = Fetcher::new(&config.fetch);
        Self::with_state(kind, config, AppState::new(env, fetcher))
    }

    /// Create a server from fully built state.
    pub fn with_state(kind: ServiceKind, config: ServiceConfig, state: AppState) -> Self {
        let router = Self::build_router(kind, &config, state);
        Self {
            router,
            config,
            kind,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(kind: ServiceKind, config: &ServiceConfig, state: AppState) -> Router {
        let routes = match kind {
            ServiceKind::Common => Router::new()
                .route("/", get(identity_handler).head(method_not_allowed)),
            ServiceKind::Order => Router::new()
                .route("/", get(aggregate_handler).head(method_not_allowed)),
        };

        let mut router = routes.with_state(state);
        if let Some(limit) = config.timeouts.request {
            router = router.layer(TimeoutLayer::new(limit));
        }
        router
            .layer(CatchPanicLayer::new())
            .layer(TraceLayer::new_for_http())
    }

    /// Bind the configured listener address.
    pub async fn bind(config: &ServiceConfig) -> Result<TcpListener, ServerError> {
        let address = config.listener.bind_address();
        TcpListener::bind(&address)
            .await
            .map_err(|source| ServerError::Bind { address, source })
    }

    /// Run the server until the shutdown signal fires.
    ///
    /// In-flight requests are allowed to finish, however long that takes.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            service = self.kind.name(),
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Router clone, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn kind(&self) -> ServiceKind {
        self.kind
    }
}
