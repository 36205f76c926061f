//! Browser - the view controller.
//!
//! Owns the catalog, the starred set, and the view state, and turns user
//! actions into state changes. Derived data (visible list, highlights) is
//! never cached; [`Browser::view`] recomputes it from the current state.

use reader_model::{Article, ArticleCatalog, ArticleId, StarredSet};
use reader_persistence::{FileStore, KeyValueStore, StarStore};
use reader_search::{QueryMatcher, filter_and_sort};

use crate::error::{AppError, Result};
use crate::message::BrowserMessage;
use crate::settings::Settings;
use crate::state::ViewState;
use crate::util::best_effort;
use crate::view::{self, BrowserView};

/// Article browser state machine.
#[derive(Debug)]
pub struct Browser<S> {
    catalog: ArticleCatalog,
    star_store: StarStore<S>,
    starred: StarredSet,
    view: ViewState,
    /// Compiled from `view.query`; `None` means no filter.
    matcher: Option<QueryMatcher>,
    /// Set when `view.query` could not be compiled.
    query_error: Option<AppError>,
    /// Last failed save of the starred set; cleared by the next good save.
    storage_error: Option<AppError>,
}

impl Browser<FileStore> {
    /// Build a browser from settings: catalog, storage location and
    /// initial filter.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let catalog = match &settings.catalog.path {
            Some(path) => ArticleCatalog::from_path(path)?,
            None => ArticleCatalog::sample(),
        };

        let store = match &settings.storage.path {
            Some(path) => FileStore::new(path),
            None => FileStore::open_default(),
        };
        tracing::info!(path = %store.path().display(), "Using storage file");

        let mut browser = Self::new(
            catalog,
            StarStore::with_key(store, settings.storage.key.as_str()),
        );
        browser.set_starred_only(settings.view.starred_only);
        Ok(browser)
    }
}

impl<S: KeyValueStore> Browser<S> {
    /// Create a browser, loading the starred set once.
    ///
    /// Stored ids that do not belong to `catalog` are dropped.
    pub fn new(catalog: ArticleCatalog, star_store: StarStore<S>) -> Self {
        let mut starred = star_store.load();
        let dropped = starred.retain_known(&catalog);
        if dropped > 0 {
            tracing::warn!(dropped, "Ignoring starred ids not present in the catalog");
        }

        tracing::info!(
            articles = catalog.len(),
            starred = starred.len(),
            "Browser ready"
        );

        Self {
            catalog,
            star_store,
            starred,
            view: ViewState::default(),
            matcher: None,
            query_error: None,
            storage_error: None,
        }
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    /// Apply a user action.
    pub fn update(&mut self, message: BrowserMessage) {
        match message {
            BrowserMessage::QueryChanged(text) => self.set_query(text),
            BrowserMessage::StarredOnlyChanged(starred_only) => {
                self.set_starred_only(starred_only);
            }
            BrowserMessage::ShowAll => self.set_starred_only(false),
            BrowserMessage::ShowStarred => self.set_starred_only(true),
            BrowserMessage::ToggleExpand(id) => self.toggle_expand(id),
            BrowserMessage::ToggleStar(id) => {
                best_effort!(self.toggle_star(id), "toggling star");
            }
        }
    }

    /// Replace the query text and recompile the matcher.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.view.query = text.into();
        match QueryMatcher::compile(&self.view.query) {
            Ok(matcher) => {
                self.matcher = matcher;
                self.query_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Query could not be compiled");
                self.matcher = None;
                self.query_error = Some(e.into());
            }
        }
    }

    /// Show all articles or only starred ones.
    pub fn set_starred_only(&mut self, starred_only: bool) {
        self.view.starred_only = starred_only;
    }

    /// Expand `id`, or collapse it if it is already expanded.
    ///
    /// Ids are not checked against the catalog; an unknown id simply never
    /// shows up as expanded.
    pub fn toggle_expand(&mut self, id: ArticleId) {
        self.view.toggle_expand(id);
    }

    /// Star or unstar `id` and persist the new set.
    ///
    /// Unknown ids are rejected and leave the starred set untouched. A
    /// storage failure does not fail the toggle: the in-memory set still
    /// changes and the failure is kept in [`Browser::storage_error`].
    /// Expand state is never affected.
    pub fn toggle_star(&mut self, id: ArticleId) -> Result<()> {
        if !self.catalog.contains(id) {
            return Err(AppError::UnknownArticle { id });
        }

        let next = StarStore::<S>::toggle(&self.starred, id);
        match self.star_store.save(&next) {
            Ok(()) => self.storage_error = None,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    suggestion = e.suggestion().as_deref().unwrap_or(""),
                    "Failed to save starred articles"
                );
                self.storage_error = Some(e.into());
            }
        }
        tracing::debug!(%id, starred = next.contains(id), "Toggled star");
        self.starred = next;
        Ok(())
    }

    // =========================================================================
    // DERIVED STATE
    // =========================================================================

    /// Visible articles in display order.
    ///
    /// Empty while the query is in an error state.
    pub fn visible(&self) -> Vec<&Article> {
        if self.query_error.is_some() {
            return Vec::new();
        }
        filter_and_sort(
            self.catalog.articles(),
            self.matcher.as_ref(),
            self.view.starred_only,
            &self.starred,
        )
    }

    /// Full view model for rendering.
    pub fn view(&self) -> BrowserView<'_> {
        let visible = self.visible();
        view::build(&visible, self.matcher.as_ref(), &self.view, |id| {
            self.starred.contains(id)
        })
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.view
    }

    /// Current starred set.
    pub fn starred(&self) -> &StarredSet {
        &self.starred
    }

    /// Source collection.
    pub fn catalog(&self) -> &ArticleCatalog {
        &self.catalog
    }

    /// Error from compiling the current query, if any.
    pub fn query_error(&self) -> Option<&AppError> {
        self.query_error.as_ref()
    }

    /// Error from the most recent starred-set save, if it failed.
    pub fn storage_error(&self) -> Option<&AppError> {
        self.storage_error.as_ref()
    }

    /// Starred-set store.
    pub fn star_store(&self) -> &StarStore<S> {
        &self.star_store
    }
}
