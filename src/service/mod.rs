//! Bridge between the backing bookmarks service and the store.
//!
//! The service owns persistence and reports every change as a
//! [`BookmarkEvent`]. This module turns each event into the matching action,
//! capturing whatever context the action needs from the current state, and
//! dispatches it:
//!
//! - `Created` → `create-bookmark`
//! - `Changed` → `edit-bookmark`
//! - `Moved` → `move-bookmark`
//! - `Removed` → `remove-bookmark` (descendants resolved from the store)
//! - `ChildrenReordered` → `reorder-children`
//! - `Resynced` → `refresh-nodes`
//! - `SearchFinished` → `finish-search`, unless the term is no longer current
//!
//! # Modules
//!
//! - [`events`]: Event types received from the service
//! - [`listener`]: Event to action translation and dispatch

pub mod events;
pub mod listener;

pub use events::{BookmarkEvent, MoveInfo, RemoveInfo};
pub use listener::{action_for_event, handle_service_event, handle_service_message};
