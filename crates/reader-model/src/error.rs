//! Model error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::ArticleId;

/// Errors raised while building an article catalog.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Two articles share the same id.
    #[error("Duplicate article id {id}")]
    DuplicateId { id: ArticleId },

    /// Catalog JSON could not be parsed.
    #[error("Invalid catalog data")]
    InvalidCatalog {
        #[source]
        source: serde_json::Error,
    },

    /// Catalog file could not be read.
    #[error("Failed to read catalog file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
