//! Configuration loading and management.
//!
//! Loads configuration from `./rolodex.toml` (or `$ROLODEX_CONFIG_PATH`).
//! Environment variables override file values; file values override defaults.
//!
//! Precedence: env vars > config file > defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

// ── Top-level config ────────────────────────────────────────────

/// Top-level Rolodex configuration loaded from TOML.
///
/// Path: `./rolodex.toml` or `$ROLODEX_CONFIG_PATH`.
/// Env vars override file values; file values override defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RolodexConfig {
    /// HTTP server settings (`[server]`).
    pub server: ServerConfig,
    /// SQLite database settings (`[database]`).
    pub database: DatabaseConfig,
    /// Logging settings (`[log]`).
    pub log: LogConfig,
}

/// HTTP listener and CORS settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// Origins allowed by CORS. Empty means permissive (development).
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5000,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Socket address string for the TCP listener.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// SQLite database settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file. Created if missing.
    pub path: String,
    /// Maximum pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "rolodex.db".to_owned(),
            max_connections: 5,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter level when `RUST_LOG` is not set.
    pub level: String,
    /// Directory for rotated JSON log files (production mode).
    pub logs_dir: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            logs_dir: "logs".to_owned(),
        }
    }
}

impl RolodexConfig {
    /// Load configuration with precedence: env vars > TOML file > defaults.
    ///
    /// Config file path: `$ROLODEX_CONFIG_PATH` or `./rolodex.toml`.
    /// If the file does not exist, returns defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from TOML file only, no env overrides.
    fn load_from_file() -> Result<Self> {
        let path = Self::config_path_with(|key| std::env::var(key).ok());
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::info!(path = %path.display(), "loading config from file");
                Self::from_toml(&contents)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file found, using defaults");
                Ok(RolodexConfig::default())
            }
            Err(e) => Err(anyhow::anyhow!("failed to read config file: {e}")),
        }
    }

    /// Parse a TOML document into a config.
    fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse config TOML")
    }

    /// Resolve config path using a custom env resolver (for testing).
    fn config_path_with(env: impl Fn(&str) -> Option<String>) -> PathBuf {
        if let Some(p) = env("ROLODEX_CONFIG_PATH") {
            return PathBuf::from(p);
        }
        PathBuf::from("rolodex.toml")
    }

    /// Apply environment variable overrides (env > config > defaults).
    ///
    /// Takes a resolver function for testability (avoids unsafe `set_var` in tests).
    fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        // Server.
        if let Some(v) = env("ROLODEX_HOST") {
            self.server.host = v;
        }
        if let Some(v) = env("ROLODEX_PORT") {
            match v.parse() {
                Ok(n) => self.server.port = n,
                Err(_) => tracing::warn!(
                    var = "ROLODEX_PORT",
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }
        if let Some(v) = env("ROLODEX_CORS_ORIGINS") {
            self.server.cors_origins = v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect();
        }

        // Database.
        if let Some(v) = env("ROLODEX_DB_PATH") {
            self.database.path = v;
        }
        if let Some(v) = env("ROLODEX_DB_MAX_CONNECTIONS") {
            match v.parse() {
                Ok(n) => self.database.max_connections = n,
                Err(_) => tracing::warn!(
                    var = "ROLODEX_DB_MAX_CONNECTIONS",
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }

        // Logging.
        if let Some(v) = env("ROLODEX_LOG_LEVEL") {
            self.log.level = v;
        }
        if let Some(v) = env("ROLODEX_LOGS_DIR") {
            self.log.logs_dir = v;
        }
    }
}
