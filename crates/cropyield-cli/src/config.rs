//! Configuration for the cropyield binary
//!
//! Layered like this, later sources winning:
//! built-in defaults → optional config file → `CROPYIELD__*` environment
//! variables → command-line flags.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Pipeline artifact location
    #[serde(default)]
    pub model: ModelConfig,

    /// Reference dataset location
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// HTTP surface
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/crop_yield_pipeline.json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/yield_df.csv"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    pub listen_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration, reading `path` if given.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(
        path: Option<&str>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        builder.add_source(env).build()?.try_deserialize()
    }
}

/// CROPYIELD__MODEL__PATH, CROPYIELD__SERVER__LISTEN_ADDR, ...
fn environment() -> config::Environment {
    config::Environment::with_prefix("CROPYIELD")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
