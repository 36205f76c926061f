//! Search core for Article Reader.
//!
//! Everything here is a pure function over immutable inputs: a query string
//! compiles into a [`QueryMatcher`], which then drives both list filtering
//! ([`filter_and_sort`]) and text highlighting ([`highlight`]). Because the
//! same matcher feeds both, a highlighted span always corresponds to a term
//! that caused the article to be listed.
//!
//! # Example
//!
//! ```
//! use reader_model::{ArticleCatalog, StarredSet};
//! use reader_search::{QueryMatcher, filter_and_sort, highlight};
//!
//! let catalog = ArticleCatalog::sample();
//! let matcher = QueryMatcher::compile("intelligence").unwrap();
//! let visible = filter_and_sort(catalog.articles(), matcher.as_ref(), false, &StarredSet::new());
//! assert_eq!(visible.len(), 1);
//!
//! let segments = highlight(&visible[0].title, matcher.as_ref());
//! assert!(segments.iter().any(|s| s.is_match()));
//! ```

mod error;
mod filter;
mod highlight;
mod matcher;

pub use error::{Result, SearchError};
pub use filter::{article_matches, filter_and_sort};
pub use highlight::{Segment, SegmentKind, highlight};
pub use matcher::{Matcher, QueryMatcher};
