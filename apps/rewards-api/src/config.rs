//! Rewards API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                 | Default   |
//! |--------------------------|-----------|
//! | `REWARDS_HOST`           | `0.0.0.0` |
//! | `REWARDS_PORT`           | `8080`    |
//! | `REWARDS_LOG`            | `info`    |
//! | `REWARDS_MAX_BODY_BYTES` | `65536`   |
//!
//! `RUST_LOG`, when set, takes precedence over `REWARDS_LOG`.

use std::env;

use serde::Serialize;

/// Rewards API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardsConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Default tracing filter directive
    pub log_filter: String,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        RewardsConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_filter: "info".to_string(),
            max_body_bytes: 64 * 1024,
        }
    }
}

impl RewardsConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RewardsConfig::default();

        let config = RewardsConfig {
            host: lookup("REWARDS_HOST").unwrap_or(defaults.host),

            port: match lookup("REWARDS_PORT") {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("REWARDS_PORT".to_string()))?,
                None => defaults.port,
            },

            log_filter: lookup("REWARDS_LOG").unwrap_or(defaults.log_filter),

            max_body_bytes: match lookup("REWARDS_MAX_BODY_BYTES") {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("REWARDS_MAX_BODY_BYTES".to_string()))?,
                None => defaults.max_body_bytes,
            },
        };

        if config.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue("REWARDS_HOST".to_string()));
        }

        if config.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue("REWARDS_MAX_BODY_BYTES".to_string()));
        }

        Ok(config)
    }

    /// `host:port`, ready for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RewardsConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RewardsConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config = RewardsConfig::from_lookup(lookup_from(&[
            ("REWARDS_HOST", "127.0.0.1"),
            ("REWARDS_PORT", "9000"),
            ("REWARDS_LOG", "debug"),
            ("REWARDS_MAX_BODY_BYTES", "1024"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            RewardsConfig::from_lookup(lookup_from(&[("REWARDS_PORT", "eighty")])),
            Err(ConfigError::InvalidValue("REWARDS_PORT".to_string()))
        );
        assert_eq!(
            RewardsConfig::from_lookup(lookup_from(&[("REWARDS_PORT", "70000")])),
            Err(ConfigError::InvalidValue("REWARDS_PORT".to_string()))
        );
        assert_eq!(
            RewardsConfig::from_lookup(lookup_from(&[("REWARDS_MAX_BODY_BYTES", "0")])),
            Err(ConfigError::InvalidValue("REWARDS_MAX_BODY_BYTES".to_string()))
        );
        assert_eq!(
            RewardsConfig::from_lookup(lookup_from(&[("REWARDS_HOST", " ")])),
            Err(ConfigError::InvalidValue("REWARDS_HOST".to_string()))
        );
    }
}
