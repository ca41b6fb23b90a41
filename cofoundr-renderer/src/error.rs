//! Error types for cofoundr-renderer.

use std::path::PathBuf;

use thiserror::Error;

use cofoundr_core::DeckError;

/// All errors that can arise from deck rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The input record failed validation; surfaced before any output exists.
    #[error("invalid deck input: {0}")]
    Input(#[from] DeckError),

    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// JSON serialization error (building the tera context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}
