//! Range selection over the displayed list.
//!
//! A shift-click selects every displayed item between the anchor and the
//! clicked item. The displayed list is computed by the caller (see
//! [`PageState::displayed_list`](super::state::PageState::displayed_list)),
//! so the same math serves folder listings and search results.

use crate::domain::{BookmarkError, Result};

/// Computes the items selected by clicking `id`.
///
/// With `range` set and an anchor present, returns the closed interval of
/// `displayed` between the anchor and `id`, in display order. An anchor that is
/// not displayed collapses the range to `id` alone. Otherwise returns `[id]`.
///
/// # Errors
///
/// Returns [`BookmarkError::ItemNotDisplayed`] if `id` is not in `displayed`.
///
/// # Examples
///
/// ```
/// use bookmark_store::app::selection::items_to_select;
///
/// let displayed: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
/// let items = items_to_select(&displayed, Some("d"), "b", true)?;
/// assert_eq!(items, vec!["b", "c", "d"]);
/// # Ok::<(), bookmark_store::BookmarkError>(())
/// ```
pub fn items_to_select(
    displayed: &[String],
    anchor: Option<&str>,
    id: &str,
    range: bool,
) -> Result<Vec<String>> {
    let selected_index = displayed
        .iter()
        .position(|item| item == id)
        .ok_or_else(|| BookmarkError::ItemNotDisplayed(id.to_string()))?;

    let Some(anchor) = anchor.filter(|_| range) else {
        return Ok(vec![id.to_string()]);
    };

    let anchor_index = displayed
        .iter()
        .position(|item| item == anchor)
        .unwrap_or_else(|| {
            tracing::debug!(anchor = %anchor, "anchor not displayed, collapsing range");
            selected_index
        });

    let start = anchor_index.min(selected_index);
    let end = anchor_index.max(selected_index);

    Ok(displayed[start..=end].to_vec())
}
