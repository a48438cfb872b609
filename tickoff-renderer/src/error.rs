//! Error types for tickoff-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    /// A `.tera` file in the override directory that replaces no built-in template.
    #[error("unknown template override '{name}' at {path}")]
    UnknownTemplate { path: PathBuf, name: String },
}
