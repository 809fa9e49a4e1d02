//! Upstream target discovery.

use super::Environment;

/// Well-known target variables, in dispatch order.
pub const TARGET_VARIABLES: [&str; 2] = ["PRODUCT_SVC_URL", "CUSTOMER_SVC_URL"];

/// Collect the URLs of every target variable that is set.
///
/// Presence is all that counts: values are not validated and an empty
/// value is still returned.
pub fn discover_targets(env: &dyn Environment) -> Vec<String> {
    let mut targets = Vec::with_capacity(TARGET_VARIABLES.len());
    for name in TARGET_VARIABLES {
        if let Some(url) = env.lookup(name) {
            tracing::debug!(variable = name, "got {}", name);
            targets.push(url);
        }
    }
    targets
}
