use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    time::Duration,
};

use routeforge_core::EngineConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Engine(#[from] routeforge_core::Error),
}

/// Contents of the `--config` TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
    pub request_timeout_secs: u64,
    pub max_concurrent_requests: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_filter: "info".to_string(),
            request_timeout_secs: 30,
            max_concurrent_requests: 256,
        }
    }
}

impl ServerSection {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

impl ServerConfig {
    /// # Errors
    ///
    /// Fails on unreadable files, malformed TOML or an invalid engine section
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// # Errors
    ///
    /// Fails on malformed TOML or an invalid engine section
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(text)?;
        config.engine.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_file_uses_defaults() {
        let config = ServerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.server.bind.port(), 8080);
    }

    #[test]
    fn sections_override_defaults() {
        let config = ServerConfig::from_toml_str(
            r#"
            [server]
            bind = "127.0.0.1:9000"
            log_filter = "debug"

            [engine]
            currency = "USD"
            cost_per_km = 2.25
            endpoint_connections = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.server.log_filter, "debug");
        assert_eq!(config.server.request_timeout_secs, 30);
        assert_eq!(config.engine.currency.as_str(), "USD");
        assert_eq!(config.engine.cost_per_km, dec!(2.25));
        assert_eq!(config.engine.endpoint_connections, 4);
        assert_eq!(config.engine.cache_capacity, 10_000);
    }

    #[test]
    fn invalid_engine_section_is_rejected() {
        let err = ServerConfig::from_toml_str("[engine]\ncache_capacity = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Engine(_)));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = ServerConfig::from_toml_str("[server\nbind = ").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
