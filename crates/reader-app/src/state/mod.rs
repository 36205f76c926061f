//! Application state.
//!
//! Only the transient view options live here. The article catalog and the
//! starred set are owned by the [`Browser`](crate::Browser) itself.

mod view_state;

pub use view_state::ViewState;
