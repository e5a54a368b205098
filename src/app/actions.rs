//! Action records and the functions that create them.
//!
//! Every state transition of the bookmark page is described by an [`Action`].
//! Actions are plain immutable values: each carries all the context the reducer
//! needs (old positions, descendant sets, computed selections), so applying
//! one never depends on anything but the previous state.
//!
//! The factory functions below are listed in one place to document the
//! available actions and their parameters. They are pure and synchronous; only
//! [`select_folder`] and [`select_item`] can fail, and only on contract
//! violations.
//!
//! # Wire Format
//!
//! Actions serialize as `{ "name": "<kind>", ...fields }` with camelCase field
//! names, e.g. `{"name":"select-folder","id":"3"}`. Records with an
//! unrecognised `name` deserialize as [`Action::Unknown`].
//!
//! # Example
//!
//! ```rust
//! use bookmark_store::actions;
//!
//! let action = actions::set_search_term(Some("rust"));
//! assert_eq!(action.name(), "start-search");
//!
//! let action = actions::set_search_term(Some(""));
//! assert_eq!(action, actions::clear_search());
//! ```

use super::search::effective_term;
use super::selection::items_to_select;
use super::state::PageState;
use crate::domain::{
    descendants, normalize_node, BookmarkError, BookmarkNode, NodeMap, Result, TreeNode,
    ROOT_NODE_ID,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Partial change set for an edited bookmark.
///
/// Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A state transition of the bookmark page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum Action {
    /// Inserts a new node and links it into its parent.
    #[serde(rename_all = "camelCase")]
    CreateBookmark {
        id: String,
        parent_id: Option<String>,
        parent_index: Option<usize>,
        node: BookmarkNode,
    },

    /// Merges a partial change set onto an existing node.
    #[serde(rename_all = "camelCase")]
    EditBookmark { id: String, change_info: ChangeInfo },

    /// Moves a node between (or within) folders.
    #[serde(rename_all = "camelCase")]
    MoveBookmark {
        id: String,
        parent_id: String,
        index: usize,
        old_parent_id: String,
        old_index: usize,
    },

    /// Replaces a folder's child order wholesale.
    ReorderChildren { id: String, children: Vec<String> },

    /// Removes a node and everything below it.
    #[serde(rename_all = "camelCase")]
    RemoveBookmark {
        id: String,
        descendants: BTreeSet<String>,
        parent_id: String,
        index: usize,
    },

    /// Adopts a new node map after an external resync.
    RefreshNodes { nodes: NodeMap },

    /// Shows a folder in the item list.
    SelectFolder { id: String },

    /// Expands or collapses a folder in the tree view.
    ChangeFolderOpen { id: String, open: bool },

    /// Leaves search mode.
    ClearSearch,

    /// Clears the item selection.
    DeselectItems,

    /// Selects items in the list.
    SelectItems {
        add: bool,
        anchor: String,
        items: Vec<String>,
    },

    /// Enters search mode for a non-empty term.
    StartSearch { term: String },

    /// Delivers the results of the running search.
    FinishSearch { results: Vec<String> },

    /// An action kind this version does not know. Applying it changes nothing.
    #[serde(other)]
    Unknown,
}

impl Action {
    /// The discriminator used in the serialized form.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateBookmark { .. } => "create-bookmark",
            Self::EditBookmark { .. } => "edit-bookmark",
            Self::MoveBookmark { .. } => "move-bookmark",
            Self::ReorderChildren { .. } => "reorder-children",
            Self::RemoveBookmark { .. } => "remove-bookmark",
            Self::RefreshNodes { .. } => "refresh-nodes",
            Self::SelectFolder { .. } => "select-folder",
            Self::ChangeFolderOpen { .. } => "change-folder-open",
            Self::ClearSearch => "clear-search",
            Self::DeselectItems => "deselect-items",
            Self::SelectItems { .. } => "select-items",
            Self::StartSearch { .. } => "start-search",
            Self::FinishSearch { .. } => "finish-search",
            Self::Unknown => "unknown",
        }
    }
}

/// Describes a node freshly created by the backing service.
#[must_use]
pub fn create_bookmark(id: impl Into<String>, tree_node: &TreeNode) -> Action {
    Action::CreateBookmark {
        id: id.into(),
        parent_id: tree_node.parent_id.clone(),
        parent_index: tree_node.index,
        node: normalize_node(tree_node),
    }
}

/// Describes a title or url change on node `id`.
///
/// # Parameters
///
/// * `id` - Node being edited
/// * `change_info` - Fields to overwrite; unset fields are kept
#[must_use]
pub fn edit_bookmark(id: impl Into<String>, change_info: ChangeInfo) -> Action {
    Action::EditBookmark {
        id: id.into(),
        change_info,
    }
}

/// Describes a move from `(old_parent_id, old_index)` to `(parent_id, index)`.
#[must_use]
pub fn move_bookmark(
    id: impl Into<String>,
    parent_id: impl Into<String>,
    index: usize,
    old_parent_id: impl Into<String>,
    old_index: usize,
) -> Action {
    Action::MoveBookmark {
        id: id.into(),
        parent_id: parent_id.into(),
        index,
        old_parent_id: old_parent_id.into(),
        old_index,
    }
}

/// Describes a new child order for folder `id`. The reducer rejects lists
/// that are not a permutation of the current children.
#[must_use]
pub fn reorder_children(id: impl Into<String>, new_child_ids: Vec<String>) -> Action {
    Action::ReorderChildren {
        id: id.into(),
        children: new_child_ids,
    }
}

/// Describes removing `id` from position `index` of `parent_id`.
///
/// Everything below `id` in `nodes` is captured so the reducer can cascade the
/// removal.
#[must_use]
pub fn remove_bookmark(
    id: impl Into<String>,
    parent_id: impl Into<String>,
    index: usize,
    nodes: &NodeMap,
) -> Action {
    let id = id.into();
    let descendants = descendants(nodes, &id);
    tracing::trace!(node_id = %id, descendant_count = descendants.len(), "resolved descendants");

    Action::RemoveBookmark {
        id,
        descendants,
        parent_id: parent_id.into(),
        index,
    }
}

/// Describes replacing the whole node map after a resync.
#[must_use]
pub fn refresh_nodes(node_map: NodeMap) -> Action {
    Action::RefreshNodes { nodes: node_map }
}

/// Describes showing folder `id` in the item list.
///
/// # Errors
///
/// Returns [`BookmarkError::RootFolderSelection`] for the root folder.
pub fn select_folder(id: impl Into<String>) -> Result<Action> {
    let id = id.into();
    if id == ROOT_NODE_ID {
        return Err(BookmarkError::RootFolderSelection);
    }
    Ok(Action::SelectFolder { id })
}

/// Describes expanding (`open = true`) or collapsing folder `id` in the tree.
#[must_use]
pub fn change_folder_open(id: impl Into<String>, open: bool) -> Action {
    Action::ChangeFolderOpen { id: id.into(), open }
}

/// Describes leaving search mode. Also clears the selection.
#[must_use]
pub const fn clear_search() -> Action {
    Action::ClearSearch
}

/// Describes clearing the item selection and its anchor.
#[must_use]
pub const fn deselect_items() -> Action {
    Action::DeselectItems
}

/// Describes a click on item `id` in the displayed list.
///
/// `add` unions the result with the current selection instead of replacing
/// it; `range` selects everything between the current anchor and `id`. The
/// clicked item always becomes the new anchor.
///
/// # Errors
///
/// Returns [`BookmarkError::ItemNotDisplayed`] if `id` is not in
/// `state.displayed_list()`.
pub fn select_item(
    id: impl Into<String>,
    add: bool,
    range: bool,
    state: &PageState,
) -> Result<Action> {
    let id = id.into();
    let displayed = state.displayed_list();
    let items = items_to_select(&displayed, state.selection.anchor.as_deref(), &id, range)?;

    Ok(Action::SelectItems {
        add,
        anchor: id,
        items,
    })
}

/// Describes entering search mode, or leaving it when `term` is empty.
#[must_use]
pub fn set_search_term(term: Option<&str>) -> Action {
    effective_term(term).map_or_else(clear_search, |term| Action::StartSearch {
        term: term.to_string(),
    })
}

/// Describes the finished search delivering `ids`, in display order.
#[must_use]
pub fn set_search_results(ids: Vec<String>) -> Action {
    Action::FinishSearch { results: ids }
}
