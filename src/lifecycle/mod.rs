//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → broadcast → server stops accepting → in-flight requests finish → exit
//! ```
//!
//! # Design Decisions
//! - No drain deadline: a request stuck on a hung upstream keeps the process alive
//! - SIGTERM matters because container schedulers stop tasks with it

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::wait_for_signal;
