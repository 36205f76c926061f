//! Starred article ids.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{ArticleCatalog, ArticleId};

/// Set of starred article ids.
///
/// Serializes as a JSON array of integers. Order carries no meaning; the
/// backing `BTreeSet` only keeps the encoding deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarredSet {
    ids: BTreeSet<ArticleId>,
}

impl StarredSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is starred.
    #[inline]
    pub fn contains(&self, id: ArticleId) -> bool {
        self.ids.contains(&id)
    }

    /// Return a copy with `id` removed if present, added otherwise.
    #[must_use]
    pub fn toggled(&self, id: ArticleId) -> Self {
        let mut next = self.clone();
        if !next.ids.remove(&id) {
            next.ids.insert(id);
        }
        next
    }

    /// Drop ids that do not belong to `catalog`.
    ///
    /// Returns the number of ids removed.
    pub fn retain_known(&mut self, catalog: &ArticleCatalog) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| catalog.contains(*id));
        before - self.ids.len()
    }

    /// Iterate starred ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ArticleId> + '_ {
        self.ids.iter().copied()
    }

    /// Number of starred ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is starred.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<ArticleId> for StarredSet {
    fn from_iter<T: IntoIterator<Item = ArticleId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
