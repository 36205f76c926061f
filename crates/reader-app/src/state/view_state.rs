//! View state - query text, starred filter, and expanded article.

use reader_model::ArticleId;

/// Transient UI state. Created with defaults at startup, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Raw query text exactly as typed.
    pub query: String,
    /// Show only starred articles.
    pub starred_only: bool,
    /// The one expanded article, if any.
    pub expanded: Option<ArticleId>,
}

impl ViewState {
    /// Whether `id` is the expanded article.
    #[inline]
    pub fn is_expanded(&self, id: ArticleId) -> bool {
        self.expanded == Some(id)
    }

    /// Collapse `id` if it is expanded, otherwise expand it (collapsing any other).
    pub fn toggle_expand(&mut self, id: ArticleId) {
        self.expanded = if self.is_expanded(id) { None } else { Some(id) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expand_is_exclusive() {
        let mut state = ViewState::default();
        state.toggle_expand(ArticleId(1));
        assert!(state.is_expanded(ArticleId(1)));

        state.toggle_expand(ArticleId(2));
        assert!(!state.is_expanded(ArticleId(1)));
        assert!(state.is_expanded(ArticleId(2)));

        state.toggle_expand(ArticleId(2));
        assert_eq!(state.expanded, None);
    }
}
