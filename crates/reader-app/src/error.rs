//! Application error types.
//!
//! Nothing here is fatal to a running browser: catalog and settings errors
//! surface at startup, everything after that is logged and recovered from.

use reader_model::{ArticleId, ModelError};
use reader_persistence::PersistenceError;
use reader_search::SearchError;
use thiserror::Error;

/// Application errors, designed to be shown to users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppError {
    // =========================================================================
    // STARTUP
    // =========================================================================
    /// Failed to load the article catalog.
    #[error("Failed to load articles: {reason}")]
    CatalogLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // RUNTIME
    // =========================================================================
    /// Storage read or write failed.
    #[error("Storage error: {reason}")]
    Storage {
        /// Description of what went wrong.
        reason: String,
    },

    /// The query could not be compiled.
    #[error("Invalid search: {reason}")]
    Query {
        /// Description of what went wrong.
        reason: String,
    },

    /// The id does not belong to any article in the catalog.
    #[error("Unknown article: {id}")]
    UnknownArticle {
        /// Id that was not found.
        id: ArticleId,
    },
}

impl AppError {
    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::CatalogLoad { .. } => {
                Some("Check the catalog path in settings or remove it to use the built-in articles.")
            }
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
            Self::Storage { .. } => Some("Starred articles may not be remembered next time."),
            Self::Query { .. } => Some("Try a shorter search."),
            Self::UnknownArticle { .. } => None,
        }
    }

    /// Create a settings save error.
    pub fn settings_save(err: impl std::fmt::Display) -> Self {
        Self::SettingsSave {
            reason: err.to_string(),
        }
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        Self::CatalogLoad {
            reason: err.to_string(),
        }
    }
}

impl From<PersistenceError> for AppError {
    fn from(err: PersistenceError) -> Self {
        Self::Storage {
            reason: err.user_message(),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        Self::Query {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
