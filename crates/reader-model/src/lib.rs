//! Data model for Article Reader.
//!
//! This crate defines the immutable article records, the catalog that holds
//! them in display order, and the set of starred article identifiers.
//!
//! # Architecture
//!
//! - `article.rs` - `Article` and `ArticleId`
//! - `catalog.rs` - `ArticleCatalog` (fixed, ordered collection)
//! - `starred.rs` - `StarredSet` (ids the user starred)
//! - `error.rs` - Error types

mod article;
mod catalog;
mod error;
mod starred;

pub use article::{Article, ArticleId};
pub use catalog::ArticleCatalog;
pub use error::{ModelError, Result};
pub use starred::StarredSet;
