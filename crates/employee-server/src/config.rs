//! Configuration management for the preview server
//!
//! Values are layered: built-in defaults, then an optional `config` file
//! (or the file passed with `--config`), then `EMPLOYEE_`-prefixed
//! environment variables such as `EMPLOYEE_SERVER__PORT=8080`, and finally
//! command-line overrides.

use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::{
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
};
use validator::{Validate, ValidationError};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct Config {
    /// HTTP listener and static files
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    #[validate(nested)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    #[validate(length(min = 1))]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    #[validate(range(min = 1))]
    pub port: u16,

    /// Directory holding the built bundle and its `index.html`
    #[serde(default = "default_static_dir")]
    #[validate(custom(function = "validate_static_dir"))]
    pub static_dir: PathBuf,
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    #[default]
    Json,
    /// Multi-line human readable output
    #[serde(alias = "text")]
    Pretty,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format
    #[serde(default)]
    pub format: LogFormat,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3001
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_log_level() -> String {
    "info".to_string()
}

#[allow(clippy::ptr_arg)]
fn validate_static_dir(dir: &PathBuf) -> std::result::Result<(), ValidationError> {
    if dir.as_os_str().is_empty() {
        return Err(ValidationError::new("empty_static_dir"));
    }
    Ok(())
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Values given on the command line, applied last
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replacement host
    pub host: Option<String>,
    /// Replacement port
    pub port: Option<u16>,
    /// Replacement static directory
    pub static_dir: Option<PathBuf>,
    /// Replacement log level
    pub log_level: Option<String>,
    /// Replacement log format
    pub log_format: Option<LogFormat>,
}

impl Config {
    /// Load configuration from an optional file and the environment
    ///
    /// Without `path`, a `config.*` file in the working directory is used
    /// when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or parsed, or if the
    /// result fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.map_or_else(
            || config::File::with_name("config").required(false),
            |path| config::File::from(path).required(true),
        );

        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("EMPLOYEE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate
    ///
    /// # Errors
    ///
    /// Returns an error if an override makes the configuration invalid.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(static_dir) = overrides.static_dir {
            self.server.static_dir = static_dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }

        self.validate()?;
        Ok(self)
    }
}

impl ServerConfig {
    /// Socket address to bind
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidAddress`] when the host is not an IP
    /// address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|e: std::net::AddrParseError| {
            ServerError::invalid_address(format!("{}:{}", self.host, self.port), e.to_string())
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Path of the SPA entry document
    #[must_use]
    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
