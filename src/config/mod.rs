//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags / env vars (clap)
//!     → loader.rs (ServiceArgs → ServiceConfig)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → handed to HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is read once at process start; no config file, no reload
//! - All fields have defaults matching the bare services (0.0.0.0:8080, no timeouts)
//! - Request-time values (identity, targets) are NOT config; see `environment`

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, ServiceArgs};
pub use schema::{FetchConfig, ListenerConfig, ObservabilityConfig, ServiceConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
