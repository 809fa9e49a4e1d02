//! Process environment access.
//!
//! # Data Flow
//! ```text
//! Environment (process or static map)
//!     → identity.rs (serviceName / versionNum, defaulted to "undefined")
//!     → targets.rs  (PRODUCT_SVC_URL / CUSTOMER_SVC_URL, in fixed order)
//! ```
//!
//! # Design Decisions
//! - Variables are looked up on every request, never cached at startup
//! - Absence is not an error; callers decide the fallback
//! - Handlers take `Arc<dyn Environment>` so tests can inject a static map

pub mod identity;
pub mod targets;

use std::collections::HashMap;

pub use identity::ServiceIdentity;
pub use targets::{discover_targets, TARGET_VARIABLES};

/// Read-only view of environment variables.
pub trait Environment: Send + Sync {
    /// Look up a variable. `Some("")` means set but empty.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        // Non-unicode values are still "set"; keep them lossy rather than dropping them.
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

/// Fixed set of variables, used by tests and embedders.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl Environment for StaticEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for StaticEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
