//! Persistent storage for Article Reader.
//!
//! The starred set survives across sessions through a small string-keyed
//! store, the same contract a browser's local storage offers. The store is
//! abstract so tests can swap in memory and the app can use a file.
//!
//! # Storage Format
//!
//! The starred set is stored under a single key (default
//! `"starredArticleIds"`) as a JSON array of integers:
//!
//! ```text
//! starredArticleIds = "[2,4]"
//! ```
//!
//! `FileStore` keeps all keys in one JSON object on disk:
//!
//! ```text
//! { "starredArticleIds": "[2,4]" }
//! ```
//!
//! # Architecture
//!
//! - `store/` - `KeyValueStore` trait with memory and file backends
//! - `star_store.rs` - `StarStore` (load / save / toggle)
//! - `error.rs` - Error types with user-friendly messages

mod error;
mod star_store;
mod store;

pub use error::{PersistenceError, Result};
pub use star_store::{STORAGE_KEY, StarStore};
pub use store::{FileStore, KeyValueStore, MemoryStore};
