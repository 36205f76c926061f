//! Article Reader - application layer.
//!
//! Wires the search core and the starred-set store into a single reactive
//! controller, [`Browser`]. Rendering is left to the host: every state change
//! can be followed by [`Browser::view`], which recomputes the visible list and
//! highlighted segments from scratch.
//!
//! Follows the Elm architecture: user actions arrive as [`BrowserMessage`]
//! values, [`Browser::update`] applies them, and the view model is a pure
//! function of the resulting state.

mod browser;
mod error;
mod logging;
mod message;
mod settings;
mod state;
mod util;
mod view;

pub use browser::Browser;
pub use error::{AppError, Result};
pub use logging::init_logging;
pub use message::BrowserMessage;
pub use settings::{CatalogSettings, Settings, StorageSettings, ViewSettings};
pub use state::ViewState;
pub use view::{ArticleView, BrowserView, EMPTY_STATE_HINT, EmptyState, summary_line};
