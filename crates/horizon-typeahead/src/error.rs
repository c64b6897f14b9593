//! Error types for typeahead configuration and candidate loading.
//!
//! The interaction path itself never fails: absent callbacks are no-ops,
//! malformed candidates leave the value unchanged, and out-of-range
//! navigation cannot be expressed. Errors only arise when reading
//! configuration or candidate data from text or disk.

use std::path::PathBuf;

/// Result type alias for typeahead operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading typeahead configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read typeahead config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("Invalid typeahead config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON candidate list parsing error.
    #[error("Invalid candidate list: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
