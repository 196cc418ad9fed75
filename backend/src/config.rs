//! Host process configuration, read from the environment.
//!
//! | Variable               | Default     |
//! |------------------------|-------------|
//! | `CATALOG_HOST`         | `127.0.0.1` |
//! | `CATALOG_PORT`         | `8080`      |
//! | `CATALOG_OPEN_BROWSER` | `true`      |
//!
//! Malformed values are logged and replaced by their default so the viewer
//! still starts.

use log::warn;
use thiserror::Error;

const HOST_VAR: &str = "CATALOG_HOST";
const PORT_VAR: &str = "CATALOG_PORT";
const OPEN_BROWSER_VAR: &str = "CATALOG_OPEN_BROWSER";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("CATALOG_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("CATALOG_OPEN_BROWSER must be true or false, got {0:?}")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup(HOST_VAR)
            .map(|host| host.trim().to_string())
            .filter(|host| !host.is_empty())
            .unwrap_or(defaults.host);
        let port = lookup(PORT_VAR)
            .map(|raw| parse_port(&raw).unwrap_or_else(|err| fallback(err, defaults.port)))
            .unwrap_or(defaults.port);
        let open_browser = lookup(OPEN_BROWSER_VAR)
            .map(|raw| parse_flag(&raw).unwrap_or_else(|err| fallback(err, defaults.open_browser)))
            .unwrap_or(defaults.open_browser);

        Self {
            host,
            port,
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn fallback<T: std::fmt::Debug>(err: ConfigError, default: T) -> T {
    warn!("{err}; using {default:?}");
    default
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort(raw.to_string()))
}

fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> HostConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        HostConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), HostConfig::default());
        assert_eq!(HostConfig::default().url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, "9000"),
            (OPEN_BROWSER_VAR, "no"),
        ]);
        assert_eq!(
            config,
            HostConfig {
                host: "0.0.0.0".to_string(),
                port: 9000,
                open_browser: false,
            }
        );
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = config(&[(HOST_VAR, "  "), (PORT_VAR, "http"), (OPEN_BROWSER_VAR, "maybe")]);
        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn reports_bad_port() {
        assert_eq!(
            parse_port("70000"),
            Err(ConfigError::InvalidPort("70000".to_string()))
        );
        assert_eq!(
            ConfigError::InvalidPort("x".to_string()).to_string(),
            "CATALOG_PORT must be a port number, got \"x\""
        );
    }
}
