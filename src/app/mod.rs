//! Application layer: actions, reducer, and the state container.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! UI / service events → Action factory → Store::dispatch → reduce → new PageState
//!                                                                       ↓
//!                                                          rendering (external)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Action records and the functions that create them
//! - [`reducer`]: Pure `(state, action) → state` transition
//! - [`search`]: Search term handling and local search
//! - [`selection`]: Range selection over the displayed list
//! - [`state`]: Page state shape
//! - [`store`]: State container owning the current state
//!
//! # Example
//!
//! ```rust
//! use bookmark_store::app::{actions, PageState, Store};
//! use bookmark_store::Config;
//!
//! let mut store = Store::new(PageState::default(), &Config::default());
//! store.dispatch(actions::set_search_term(Some("rust")))?;
//! assert!(store.state().search.in_progress);
//! # Ok::<(), bookmark_store::BookmarkError>(())
//! ```

pub mod actions;
pub mod reducer;
pub mod search;
pub mod selection;
pub mod state;
pub mod store;

pub use actions::{Action, ChangeInfo};
pub use reducer::{reduce, reduce_with, ReduceOptions};
pub use state::{PageState, SearchState, SelectionState};
pub use store::Store;
