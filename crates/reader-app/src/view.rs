//! View model - everything a renderer needs, recomputed on every change.

use reader_model::{Article, ArticleId};
use reader_search::{Segment, highlight};

use crate::ViewState;

/// Hint shown under the empty-state headline.
pub const EMPTY_STATE_HINT: &str = "Try different keywords or turn off filters";

/// Snapshot of the browser ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserView<'a> {
    /// Result count line, e.g. `3 articles found for "web"`.
    pub summary: String,
    /// Visible articles, starred first.
    pub articles: Vec<ArticleView<'a>>,
    /// Present only when `articles` is empty.
    pub empty_state: Option<EmptyState>,
    /// Whether the Starred filter is active (drives the All/Starred toggle).
    pub starred_only: bool,
}

impl BrowserView<'_> {
    /// Ids of visible articles in display order.
    pub fn ids(&self) -> Vec<ArticleId> {
        self.articles.iter().map(|a| a.id).collect()
    }

    /// Visible article by id.
    pub fn article(&self, id: ArticleId) -> Option<&ArticleView<'_>> {
        self.articles.iter().find(|a| a.id == id)
    }
}

/// One article card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView<'a> {
    pub id: ArticleId,
    /// Highlighted title.
    pub title: Vec<Segment<'a>>,
    /// Highlighted body.
    pub content: Vec<Segment<'a>>,
    pub starred: bool,
    pub expanded: bool,
    /// Unhighlighted body for the expanded panel.
    pub full_content: Option<&'a str>,
}

impl ArticleView<'_> {
    /// Tooltip for the star button.
    pub fn star_label(&self) -> &'static str {
        if self.starred {
            "Remove from favorites"
        } else {
            "Add to favorites"
        }
    }

    /// Tooltip for the expand affordance.
    pub fn expand_label(&self) -> &'static str {
        if self.expanded { "Collapse" } else { "Expand" }
    }
}

/// "No results" indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub headline: String,
    pub hint: &'static str,
}

impl EmptyState {
    /// Build the indicator for the current query and filter.
    pub fn new(query: &str, starred_only: bool) -> Self {
        let mut headline = String::from("No articles found");
        if !query.is_empty() {
            headline.push_str(&format!(" matching \"{query}\""));
        }
        if starred_only {
            headline.push_str(" in Starred");
        }
        Self {
            headline,
            hint: EMPTY_STATE_HINT,
        }
    }
}

/// Result count line.
///
/// `"1 article found"`, `"3 articles found for \"web\""`,
/// `"0 articles found • filtering: Starred"`.
pub fn summary_line(count: usize, query: &str, starred_only: bool) -> String {
    let mut line = format!(
        "{count} article{} found",
        if count == 1 { "" } else { "s" }
    );
    if !query.is_empty() {
        line.push_str(&format!(" for \"{query}\""));
    }
    if starred_only {
        line.push_str(" • filtering: Starred");
    }
    line
}

/// Assemble the view model from an already filtered and ordered list.
pub(crate) fn build<'a, M>(
    visible: &[&'a Article],
    matcher: Option<&M>,
    view: &ViewState,
    is_starred: impl Fn(ArticleId) -> bool,
) -> BrowserView<'a>
where
    M: reader_search::Matcher + ?Sized,
{
    let articles: Vec<ArticleView<'a>> = visible
        .iter()
        .map(|&article| {
            let expanded = view.is_expanded(article.id);
            ArticleView {
                id: article.id,
                title: highlight(&article.title, matcher),
                content: highlight(&article.content, matcher),
                starred: is_starred(article.id),
                expanded,
                full_content: expanded.then_some(article.content.as_str()),
            }
        })
        .collect();

    let empty_state = articles
        .is_empty()
        .then(|| EmptyState::new(&view.query, view.starred_only));

    BrowserView {
        summary: summary_line(articles.len(), &view.query, view.starred_only),
        articles,
        empty_state,
        starred_only: view.starred_only,
    }
}
