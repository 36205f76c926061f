//! Article records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of an article.
///
/// Serialized as a bare integer so persisted id lists stay plain JSON arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub i64);

impl ArticleId {
    /// Raw integer value.
    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ArticleId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single article.
///
/// Articles are created once when the catalog is built and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier, stable for the lifetime of the process.
    pub id: ArticleId,
    /// Headline shown in the list.
    pub title: String,
    /// Body text.
    pub content: String,
}

impl Article {
    /// Create a new article.
    pub fn new(
        id: impl Into<ArticleId>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}
