//! Store error types.

use std::path::PathBuf;

use tally_commerce::CommerceError;
use thiserror::Error;

/// Errors that can occur when loading or saving state.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading, writing or renaming a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file exists but is not valid JSON of the expected shape.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A file parsed but holds values that violate catalog or cart rules.
    #[error("Invalid data in {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },

    /// Failed to serialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A domain rule rejected the operation.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
