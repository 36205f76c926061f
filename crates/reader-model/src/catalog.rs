//! Article catalog - the fixed, ordered source collection.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{ModelError, Result};
use crate::{Article, ArticleId};

/// Ordered, read-only collection of articles.
///
/// Catalog order is the display order used whenever starred status does not
/// decide otherwise. Ids are guaranteed unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleCatalog {
    articles: Vec<Article>,
}

impl ArticleCatalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(articles: Vec<Article>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(articles.len());
        for article in &articles {
            if !seen.insert(article.id) {
                return Err(ModelError::DuplicateId { id: article.id });
            }
        }
        Ok(Self { articles })
    }

    /// Parse a catalog from a JSON array of `{id, title, content}` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let articles: Vec<Article> =
            serde_json::from_str(json).map_err(|source| ModelError::InvalidCatalog { source })?;
        Self::new(articles)
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The built-in sample collection.
    pub fn sample() -> Self {
        Self {
            articles: vec![
                Article::new(
                    1,
                    "The Future of Artificial Intelligence",
                    "Artificial intelligence is transforming industries across the globe. \
                     From healthcare to finance, AI is making processes more efficient and \
                     creating new opportunities for innovation.",
                ),
                Article::new(
                    2,
                    "Sustainable Energy Solutions",
                    "Renewable energy sources like solar and wind power are becoming \
                     increasingly important as we work towards a more sustainable future. \
                     These technologies help reduce our carbon footprint.",
                ),
                Article::new(
                    3,
                    "Web Development Trends 2024",
                    "Modern web development continues to evolve with new frameworks and \
                     tools. React, Vue, and Angular remain popular choices for building \
                     dynamic user interfaces.",
                ),
                Article::new(
                    4,
                    "Machine Learning in Healthcare",
                    "Machine learning algorithms are being used to analyze medical data and \
                     assist in diagnosis. This technology has the potential to revolutionize \
                     patient care and treatment outcomes.",
                ),
                Article::new(
                    5,
                    "Cybersecurity Best Practices",
                    "Protecting digital assets requires robust cybersecurity measures. \
                     Regular updates, strong passwords, and employee training are essential \
                     components of a good security strategy.",
                ),
            ],
        }
    }

    /// Articles in catalog order.
    #[inline]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Look up an article by id.
    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Whether an article with this id exists.
    pub fn contains(&self, id: ArticleId) -> bool {
        self.get(id).is_some()
    }

    /// Number of articles.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the catalog has no articles.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
