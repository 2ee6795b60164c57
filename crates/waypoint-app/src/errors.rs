//! Error types
//!
//! The router algorithms themselves are infallible: unknown segments end
//! resolution, failed pop-to-match degrades to a reset, and unknown actions
//! are no-ops. Errors only arise at the edges, when loading configuration
//! or action scripts.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Config document is not valid TOML for [`RouterConfig`](crate::config::RouterConfig)
    #[error("Invalid router config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Tab name matches no [`Tab`](crate::tabs::Tab)
    #[error("Unknown tab '{value}'")]
    UnknownTab {
        /// Name as given
        value: String,
    },

    /// Override key is not a config field
    #[error("Unknown config key '{key}'")]
    UnknownKey {
        /// Key as given
        key: String,
    },

    /// Override value does not parse for its key
    #[error("Invalid value '{value}' for '{key}'")]
    InvalidValue {
        /// Config field
        key: String,
        /// Value as given
        value: String,
    },

    /// Override path present but without segments
    #[error("override_router_path must contain at least one segment")]
    EmptyOverridePath,
}

/// Action script loading failures.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Script file could not be read
    #[error("Failed to read action script {path}: {source}")]
    Io {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Script is not a JSON action list
    #[error("Malformed action script: {0}")]
    Parse(#[from] serde_json::Error),
}
