//! Browser messages.
//!
//! Every externally triggerable action is a variant here. The
//! [`Browser::update`](crate::Browser::update) function processes them.

use reader_model::ArticleId;

/// User actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserMessage {
    /// Query input changed.
    QueryChanged(String),

    /// Starred filter set explicitly.
    StarredOnlyChanged(bool),

    /// "All" button pressed.
    ShowAll,

    /// "Starred" button pressed.
    ShowStarred,

    /// Expand/collapse affordance on an article body.
    ToggleExpand(ArticleId),

    /// Star button on an article.
    ToggleStar(ArticleId),
}
