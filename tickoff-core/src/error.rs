//! Error types for tickoff-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can arise while writing the persisted slots.
///
/// Reads never produce these: a missing or unreadable slot degrades to the
/// default value instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure, annotated with the path being touched.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (write path).
    #[error("todo serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.tickoff/`.
    #[error("cannot determine home directory; set $HOME or TICKOFF_HOME")]
    HomeNotFound,
}

/// Convenience constructor for [`StoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.into(),
        source,
    }
}
