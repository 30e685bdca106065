//! Error types for table configuration.
//!
//! Table operations never fail: missing fields render blank and unknown
//! rules pass every row. Errors only arise at the edges, when a
//! configuration file is loaded or a filter is parsed from text.

use std::path::PathBuf;

use thiserror::Error;
use wartaboard_seeker::SeekerError;

/// Errors raised while loading configuration or parsing filters.
#[derive(Debug, Error)]
pub enum TableError {
    /// Reading a file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML configuration could not be parsed.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON configuration or data could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file extension is not recognized.
    #[error("unsupported config format '{0}': expected .yaml, .yml or .json")]
    UnsupportedConfigFormat(String),

    /// A textual filter rule was malformed.
    #[error(transparent)]
    Rule(#[from] SeekerError),
}

/// Result type for table configuration.
pub type Result<T> = std::result::Result<T, TableError>;
