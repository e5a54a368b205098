//! Translation of service events into dispatched actions.

use super::events::BookmarkEvent;
use crate::app::{actions, Action, PageState, Store};
use crate::domain::{normalize_tree, BookmarkError, Result};

/// Builds the action describing `event`.
///
/// Returns `None` for events that must not reach the store: search results
/// for a term that is no longer the active one.
#[must_use]
pub fn action_for_event(event: &BookmarkEvent, state: &PageState) -> Option<Action> {
    let action = match event {
        BookmarkEvent::Created { id, node } => actions::create_bookmark(id.clone(), node),
        BookmarkEvent::Changed { id, change_info } => {
            actions::edit_bookmark(id.clone(), change_info.clone())
        }
        BookmarkEvent::Moved { id, move_info } => actions::move_bookmark(
            id.clone(),
            move_info.parent_id.clone(),
            move_info.index,
            move_info.old_parent_id.clone(),
            move_info.old_index,
        ),
        BookmarkEvent::Removed { id, remove_info } => actions::remove_bookmark(
            id.clone(),
            remove_info.parent_id.clone(),
            remove_info.index,
            &state.nodes,
        ),
        BookmarkEvent::ChildrenReordered { id, child_ids } => {
            actions::reorder_children(id.clone(), child_ids.clone())
        }
        BookmarkEvent::Resynced { tree } => actions::refresh_nodes(normalize_tree(tree)),
        BookmarkEvent::SearchFinished { term, results } => {
            if state.search.term.as_deref() != Some(term.as_str()) {
                tracing::debug!(
                    term = %term,
                    current = ?state.search.term,
                    "dropping stale search results"
                );
                return None;
            }
            actions::set_search_results(results.clone())
        }
    };

    Some(action)
}

/// Dispatches the action for `event` and reports whether the state changed.
///
/// # Errors
///
/// Propagates the reducer's contract-violation errors; these mean the service
/// and the store disagree about the tree and a resync is needed.
///
/// # Example
///
/// ```rust
/// use bookmark_store::service::{handle_service_event, BookmarkEvent};
/// use bookmark_store::{Config, PageState, Store, TreeNode};
///
/// let mut store = Store::new(PageState::default(), &Config::default());
/// let event = BookmarkEvent::Created {
///     id: "1".to_string(),
///     node: TreeNode::folder("1", "Bar", vec![]).with_position("0", 0),
/// };
/// assert!(handle_service_event(&mut store, &event)?);
/// assert!(store.state().node("1").is_some());
/// # Ok::<(), bookmark_store::BookmarkError>(())
/// ```
pub fn handle_service_event(store: &mut Store, event: &BookmarkEvent) -> Result<bool> {
    let _span = tracing::debug_span!("handle_service_event", event = event.kind()).entered();

    let Some(action) = action_for_event(event, store.state()) else {
        return Ok(false);
    };

    let before = store.state().clone();
    let after = store.dispatch(action)?;
    let changed = after != &before;

    tracing::debug!(changed = changed, "service event applied");
    Ok(changed)
}

/// Parses a JSON-encoded [`BookmarkEvent`] and handles it.
///
/// # Errors
///
/// Returns [`BookmarkError::Serialization`] for malformed payloads, otherwise
/// the errors of [`handle_service_event`].
pub fn handle_service_message(store: &mut Store, payload: &str) -> Result<bool> {
    let event: BookmarkEvent = serde_json::from_str(payload).map_err(|e| {
        tracing::warn!(error = %e, "failed to parse service message");
        BookmarkError::Serialization(format!("invalid service message: {e}"))
    })?;

    handle_service_event(store, &event)
}
