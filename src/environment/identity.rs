//! Service identity resolution.

use serde::Serialize;

use super::Environment;

/// Variable holding the service name.
pub const SERVICE_NAME_VAR: &str = "serviceName";
/// Variable holding the service version.
pub const VERSION_VAR: &str = "versionNum";
/// Value reported for any identity field whose variable is unset.
pub const UNDEFINED: &str = "undefined";

/// Name and version a service reports about itself.
///
/// Serializes as `{"service":...,"version":...}` in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceIdentity {
    pub service: String,
    pub version: String,
}

impl ServiceIdentity {
    /// Resolve the identity from the environment. Never fails.
    pub fn resolve(env: &dyn Environment) -> Self {
        Self {
            service: env
                .lookup(SERVICE_NAME_VAR)
                .unwrap_or_else(|| UNDEFINED.to_string()),
            version: env
                .lookup(VERSION_VAR)
                .unwrap_or_else(|| UNDEFINED.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::StaticEnv;

    #[test]
    fn test_resolve_all_combinations() {
        let cases = [
            (None, None, "undefined", "undefined"),
            (Some("checkout"), None, "checkout", "undefined"),
            (None, Some("1.2.0"), "undefined", "1.2.0"),
            (Some("checkout"), Some("1.2.0"), "checkout", "1.2.0"),
        ];

        for (name, version, want_name, want_version) in cases {
            let mut env = StaticEnv::new();
            if let Some(n) = name {
                env.set(SERVICE_NAME_VAR, n);
            }
            if let Some(v) = version {
                env.set(VERSION_VAR, v);
            }

            let id = ServiceIdentity::resolve(&env);
            assert_eq!(id.service, want_name);
            assert_eq!(id.version, want_version);
        }
    }

    #[test]
    fn test_empty_value_is_not_undefined() {
        let env = StaticEnv::new().with(SERVICE_NAME_VAR, "");
        let id = ServiceIdentity::resolve(&env);
        assert_eq!(id.service, "");
        assert_eq!(id.version, UNDEFINED);
    }

    #[test]
    fn test_serializes_compact_in_field_order() {
        let id = ServiceIdentity {
            service: "checkout".into(),
            version: "1.2.0".into(),
        };
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            r#"{"service":"checkout","version":"1.2.0"}"#
        );
    }
}
