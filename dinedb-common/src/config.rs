//! Bootstrap configuration loading
//!
//! Settings are resolved once at startup in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Command-line and environment values arrive already merged (clap reads
//! both) as [`Overrides`]; this module layers them over the TOML file.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_DATABASE_PATH: &str = "./database.sqlite";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ACQUIRE_TIMEOUT_MS: u64 = 30_000;

/// Config file name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "dinedb.toml";

/// Bootstrap configuration as written in the TOML file
///
/// Every field is optional; anything left out falls through to the
/// compiled default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Path to the SQLite database file
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Listen host
    #[serde(default)]
    pub host: Option<String>,

    /// Listen port
    #[serde(default)]
    pub port: Option<u16>,

    /// Open the database with SQLite `mode=ro`
    #[serde(default)]
    pub read_only: Option<bool>,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[database]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub max_connections: Option<u32>,

    /// Milliseconds to wait for a free pool connection
    #[serde(default)]
    pub acquire_timeout_ms: Option<u64>,
}

/// `[logging]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: Option<String>,
}

/// Values taken from the command line or environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub database_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub read_only: Option<bool>,
    pub log_level: Option<String>,
}

/// Connection pool sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_millis(DEFAULT_ACQUIRE_TIMEOUT_MS),
        }
    }
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub read_only: bool,
    pub log_level: String,
    pub pool: PoolSettings,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::resolve(&Overrides::default(), &TomlConfig::default())
    }
}

impl ServiceConfig {
    /// Merge overrides over file values over compiled defaults
    pub fn resolve(overrides: &Overrides, file: &TomlConfig) -> Self {
        let pool = PoolSettings {
            max_connections: file
                .database
                .max_connections
                .unwrap_or(DEFAULT_MAX_CONNECTIONS)
                .max(1),
            acquire_timeout: Duration::from_millis(
                file.database
                    .acquire_timeout_ms
                    .unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_MS),
            ),
        };

        Self {
            database_path: overrides
                .database_path
                .clone()
                .or_else(|| file.database_path.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
            host: overrides
                .host
                .clone()
                .or_else(|| file.host.clone())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(file.port).unwrap_or(DEFAULT_PORT),
            read_only: overrides.read_only.or(file.read_only).unwrap_or(false),
            log_level: overrides
                .log_level
                .clone()
                .or_else(|| file.logging.level.clone())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            pool,
        }
    }

    /// `host:port` string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Find the config file to read, if any
///
/// An explicit path is used only if it exists. Without one, `./dinedb.toml`
/// is tried, then `<config dir>/dinedb/config.toml`.
pub fn locate_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return path.exists().then(|| path.to_path_buf());
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|d| d.join("dinedb").join("config.toml"))
        .filter(|p| p.exists())
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}

/// Resolve the service configuration from overrides and an optional file
///
/// Returns the file that was read, if any. A missing config file means
/// compiled defaults; a malformed one is an error.
pub fn load_service_config(
    overrides: &Overrides,
    explicit_file: Option<&Path>,
) -> Result<(ServiceConfig, Option<PathBuf>)> {
    let source = locate_config_file(explicit_file);
    let file = match &source {
        Some(path) => load_toml_config(path)?,
        None => TomlConfig::default(),
    };

    Ok((ServiceConfig::resolve(overrides, &file), source))
}
