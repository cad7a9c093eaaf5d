//! Server configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `PORT` | 3000 |
//! | `BIND_ADDR` | 0.0.0.0 |
//! | `STATIC_DIR` | static |
//! | `SESSION_TTL_SECS` | 1800 |
//! | `SESSION_CAPACITY` | 10000 |
//! | `VISIBILITY_THRESHOLD` | 0.3 |

use crate::tracker::{Threshold, ThresholdError};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name}: cannot parse '{value}'")]
    Invalid { name: &'static str, value: String },
    #[error("VISIBILITY_THRESHOLD: {0}")]
    Threshold(#[from] ThresholdError),
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub static_dir: String,
    /// Idle time after which a page session is dropped.
    pub session_ttl: Duration,
    pub session_capacity: u64,
    pub threshold: Threshold,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            static_dir: "static".to_string(),
            session_ttl: Duration::from_secs(1800),
            session_capacity: 10_000,
            threshold: Threshold::DEFAULT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; unset variables keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = parse_var(&lookup, "BIND_ADDR")?.unwrap_or(defaults.bind_addr);
        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let static_dir = lookup("STATIC_DIR").unwrap_or(defaults.static_dir);

        let session_ttl = match parse_var::<u64, _>(&lookup, "SESSION_TTL_SECS")? {
            Some(0) => return Err(ConfigError::Zero("SESSION_TTL_SECS")),
            Some(secs) => Duration::from_secs(secs),
            None => defaults.session_ttl,
        };
        let session_capacity = match parse_var::<u64, _>(&lookup, "SESSION_CAPACITY")? {
            Some(0) => return Err(ConfigError::Zero("SESSION_CAPACITY")),
            Some(n) => n,
            None => defaults.session_capacity,
        };
        let threshold = match parse_var::<f64, _>(&lookup, "VISIBILITY_THRESHOLD")? {
            Some(ratio) => Threshold::new(ratio)?,
            None => defaults.threshold,
        };

        Ok(Self {
            bind_addr,
            port,
            static_dir,
            session_ttl,
            session_capacity,
            threshold,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("BIND_ADDR", "127.0.0.1"),
            ("STATIC_DIR", "/srv/portfolio/static"),
            ("SESSION_TTL_SECS", "60"),
            ("SESSION_CAPACITY", "500"),
            ("VISIBILITY_THRESHOLD", "0.5"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.static_dir, "/srv/portfolio/static");
        assert_eq!(config.session_ttl, Duration::from_secs(60));
        assert_eq!(config.session_capacity, 500);
        assert_relative_eq!(config.threshold.ratio(), 0.5);
    }

    #[test]
    fn test_malformed_values_are_errors() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "PORT: cannot parse 'eighty'");

        assert!(matches!(
            config_from(&[("VISIBILITY_THRESHOLD", "2")]),
            Err(ConfigError::Threshold(_))
        ));
        assert!(matches!(
            config_from(&[("SESSION_TTL_SECS", "0")]),
            Err(ConfigError::Zero("SESSION_TTL_SECS"))
        ));
    }
}
