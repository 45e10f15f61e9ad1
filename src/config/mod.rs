//! Configuration module for peerwatch
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`PEERWATCH_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use peerwatch::config::PeerwatchConfig;
//!
//! let config = PeerwatchConfig::default();
//! assert_eq!(config.server.port, 3000);
//!
//! let toml = r#"
//! [server]
//! port = 4000
//!
//! [[peers]]
//! name = "kamina"
//! url = "http://10.0.0.7:3000"
//! "#;
//! let config: PeerwatchConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.server.port, 4000);
//! assert_eq!(config.peers.len(), 1);
//! ```

pub mod error;
pub mod logging;
pub mod peers;
pub mod project;
pub mod server;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use peers::{default_peers, PeerConfig, PollerConfig};
pub use project::{ProjectConfig, FALLBACK_VERSION};
pub use server::{ServerConfig, DEFAULT_PORT};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Everything the server needs at startup, passed explicitly into `AppState`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PeerwatchConfig {
    /// HTTP listener
    pub server: ServerConfig,
    /// Directory and manifest being inspected
    pub project: ProjectConfig,
    /// Outbound polling bounds
    pub poller: PollerConfig,
    /// Sibling services, polled in this order
    pub peers: Vec<PeerConfig>,
    pub logging: LoggingConfig,
}

impl Default for PeerwatchConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            project: ProjectConfig::default(),
            poller: PollerConfig::default(),
            peers: default_peers(),
            logging: LoggingConfig::default(),
        }
    }
}

impl PeerwatchConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply `PEERWATCH_*` environment overrides.
    ///
    /// Unparseable values are ignored and the current setting is kept.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("PEERWATCH_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("PEERWATCH_HOST") {
            self.server.host = host;
        }
        if let Ok(level) = std::env::var("PEERWATCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("PEERWATCH_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }

        if self.poller.timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                field: "poller.timeout_seconds".to_string(),
                message: "timeout must be at least one second".to_string(),
            });
        }
        if self.poller.max_concurrent == 0 {
            return Err(ConfigError::Validation {
                field: "poller.max_concurrent".to_string(),
                message: "at least one concurrent poll is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for (i, peer) in self.peers.iter().enumerate() {
            if peer.name.is_empty() {
                return Err(ConfigError::Validation {
                    field: format!("peers[{}].name", i),
                    message: "name cannot be empty".to_string(),
                });
            }
            if !seen.insert(peer.name.as_str()) {
                return Err(ConfigError::Validation {
                    field: format!("peers[{}].name", i),
                    message: format!("duplicate peer name '{}'", peer.name),
                });
            }
            if peer.url.is_empty() {
                return Err(ConfigError::Validation {
                    field: format!("peers[{}].url", i),
                    message: "URL cannot be empty".to_string(),
                });
            }
            if !(peer.url.starts_with("http://") || peer.url.starts_with("https://")) {
                return Err(ConfigError::Validation {
                    field: format!("peers[{}].url", i),
                    message: format!("'{}' must start with http:// or https://", peer.url),
                });
            }
        }

        Ok(())
    }
}

/// Serializes tests that mutate `PEERWATCH_*` variables of the shared process.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
