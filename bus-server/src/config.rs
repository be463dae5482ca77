//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "BUS_BIND_ADDR";

/// Environment variable holding the path of a JSON schedule dataset.
pub const SCHEDULE_PATH_VAR: &str = "BUS_SCHEDULE_PATH";

/// Environment variable holding the static assets directory.
pub const STATIC_DIR_VAR: &str = "BUS_STATIC_DIR";

/// Error returned when the environment holds an unusable setting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// JSON dataset to serve. `None` uses the built-in network.
    pub schedule_path: Option<PathBuf>,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Read settings from the process environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR).filter(|v| !v.is_empty()) {
            let addr = value.parse().map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: value.clone(),
            })?;
            config = config.with_bind_addr(addr);
        }

        if let Some(path) = lookup(SCHEDULE_PATH_VAR).filter(|v| !v.is_empty()) {
            config = config.with_schedule_path(path);
        }

        if let Some(dir) = lookup(STATIC_DIR_VAR).filter(|v| !v.is_empty()) {
            config = config.with_static_dir(dir);
        }

        Ok(config)
    }

    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    pub fn with_schedule_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.schedule_path = Some(path.into());
        self
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            schedule_path: None,
            static_dir: PathBuf::from("static"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.schedule_path, None);
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = ServerConfig::from_lookup(env(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn environment_overrides() {
        let config = ServerConfig::from_lookup(env(&[
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (SCHEDULE_PATH_VAR, "/srv/schedule.json"),
            (STATIC_DIR_VAR, "/srv/static"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(
            config.schedule_path,
            Some(PathBuf::from("/srv/schedule.json"))
        );
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
    }

    #[test]
    fn empty_values_are_ignored() {
        let config = ServerConfig::from_lookup(env(&[(SCHEDULE_PATH_VAR, "")])).unwrap();
        assert_eq!(config.schedule_path, None);
    }

    #[test]
    fn invalid_bind_addr_rejected() {
        let err = ServerConfig::from_lookup(env(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "BUS_BIND_ADDR is not a valid socket address: localhost"
        );
    }

    #[test]
    fn builder_methods() {
        let config = ServerConfig::default()
            .with_bind_addr("127.0.0.1:9000".parse().unwrap())
            .with_schedule_path("schedule.json")
            .with_static_dir("assets");

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.schedule_path, Some(PathBuf::from("schedule.json")));
        assert_eq!(config.static_dir, PathBuf::from("assets"));
    }
}
