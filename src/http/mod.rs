//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → handlers.rs
//!         common-service: identity → JSON
//!         order-service:  identity + targets → fanout → text body
//!     → Send to client
//! ```

pub mod handlers;
pub mod server;

pub use handlers::render_aggregate;
pub use server::{AppState, HttpServer, ServerError, ServiceKind};
