use std::io;

use thiserror::Error;

/// Error type for fetching, preprocessing and configuring a loader.
///
/// Local read problems (missing CSV, malformed rows) are not errors:
/// readers log them and return an empty or partial dataset.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("download of '{url}' failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("{operation} does not accept {found} features")]
    TypeMismatch {
        operation: &'static str,
        found: String,
    },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("image error: {0}")]
    Image(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl LoaderError {
    pub(crate) fn type_mismatch(operation: &'static str, found: impl Into<String>) -> Self {
        LoaderError::TypeMismatch {
            operation,
            found: found.into(),
        }
    }
}
