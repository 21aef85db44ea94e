//! Process configuration read from the environment.

use std::{net::SocketAddr, path::PathBuf};

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "TENANTRY_BIND_ADDR";
pub const IDENTITY_FIXTURES_VAR: &str = "TENANTRY_IDENTITY_FIXTURES";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,

    /// JSON file seeding the in-memory identity directory. When unset the
    /// directory starts empty and every request is anonymous.
    pub identity_fixtures: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            identity_fixtures: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: BIND_ADDR_VAR,
                message: e.to_string(),
            })?;

        let identity_fixtures = match lookup(IDENTITY_FIXTURES_VAR) {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::Invalid {
                    key: IDENTITY_FIXTURES_VAR,
                    message: "must not be blank".to_string(),
                });
            }
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        Ok(Self {
            bind_addr,
            identity_fixtures,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn reads_bind_addr_and_fixtures() {
        let config = ApiConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "127.0.0.1:9090"),
            (IDENTITY_FIXTURES_VAR, "/etc/tenantry/identities.json"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 9090);
        assert_eq!(
            config.identity_fixtures,
            Some(PathBuf::from("/etc/tenantry/identities.json"))
        );
    }

    #[test]
    fn rejects_malformed_values() {
        let err = ApiConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "not-an-addr")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: BIND_ADDR_VAR, .. }));

        let err = ApiConfig::from_lookup(lookup(&[(IDENTITY_FIXTURES_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: IDENTITY_FIXTURES_VAR, .. }));
    }
}
