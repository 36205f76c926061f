//! Search error types.

use thiserror::Error;

/// Errors raised while compiling a query.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The combined token pattern could not be built (usually size limits).
    #[error("Failed to build matcher for {token_count} search terms")]
    Build {
        token_count: usize,
        #[source]
        source: regex::Error,
    },
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
