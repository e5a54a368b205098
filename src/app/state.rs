//! Page state owned by the store.
//!
//! [`PageState`] is the single source of truth for the bookmark page: the node
//! map, the folder shown in the list, expanded folders in the tree, the item
//! selection, and the search state. It is replaced wholesale on every dispatch;
//! consumers only ever see immutable snapshots.
//!
//! # State Components
//!
//! - **Nodes**: Flat [`NodeMap`] of every bookmark and folder
//! - **Selected Folder**: Folder whose children are listed when no search is active
//! - **Folder Open State**: Folders expanded in the tree view
//! - **Selection**: Selected list items and the range anchor
//! - **Search**: Current term, results, and whether a search is running

use crate::domain::{children_of, BookmarkNode, NodeMap, ROOT_NODE_ID};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Selected list items and the pivot used for range selection.
///
/// The anchor is a non-owning reference by id; it may point at an item that is
/// no longer displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub items: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl SelectionState {
    /// Clears items and anchor.
    pub fn clear(&mut self) {
        self.items.clear();
        self.anchor = None;
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Search term and results.
///
/// `term == None` means no search. Results are only meaningful while a term is
/// set, and clearing resets every field at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<String>>,
    #[serde(default)]
    pub in_progress: bool,
}

impl SearchState {
    /// Returns `true` while a search term is set.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.term.is_some()
    }
}

/// Complete state of the bookmark page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub nodes: NodeMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_folder: Option<String>,
    #[serde(default)]
    pub folder_open_state: BTreeSet<String>,
    #[serde(default)]
    pub selection: SelectionState,
    #[serde(default)]
    pub search: SearchState,
}

impl PageState {
    /// Creates a state over `nodes` with nothing selected, opened or searched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookmark_store::{domain::normalize_tree, PageState, TreeNode};
    ///
    /// let state = PageState::new(normalize_tree(&TreeNode::folder("0", "", vec![])));
    /// assert!(state.selected_folder.is_none());
    /// assert!(state.displayed_list().is_empty());
    /// ```
    #[must_use]
    pub fn new(nodes: NodeMap) -> Self {
        Self {
            nodes,
            selected_folder: None,
            folder_open_state: BTreeSet::new(),
            selection: SelectionState::default(),
            search: SearchState::default(),
        }
    }

    /// Ids shown in the item list, in visual order.
    ///
    /// While a search is active this is the search result list (empty until
    /// results arrive); otherwise it is the children of the selected folder.
    #[must_use]
    pub fn displayed_list(&self) -> Vec<String> {
        if self.search.is_active() {
            return self.search.results.clone().unwrap_or_default();
        }

        self.selected_folder
            .as_deref()
            .map(|folder| children_of(&self.nodes, folder).to_vec())
            .unwrap_or_default()
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&BookmarkNode> {
        self.nodes.get(id)
    }

    /// Returns `true` if `id` is expanded in the tree view.
    #[must_use]
    pub fn is_folder_open(&self, id: &str) -> bool {
        self.folder_open_state.contains(id)
    }
}

impl Default for PageState {
    /// A state containing only the root folder.
    fn default() -> Self {
        let mut nodes = NodeMap::new();
        nodes.insert(
            ROOT_NODE_ID.to_string(),
            BookmarkNode {
                id: ROOT_NODE_ID.to_string(),
                parent_id: None,
                index: None,
                title: String::new(),
                url: None,
                children: Some(Vec::new()),
                date_added: None,
            },
        );
        Self::new(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{normalize_tree, TreeNode};

    fn state() -> PageState {
        PageState::new(normalize_tree(&TreeNode::folder(
            ROOT_NODE_ID,
            "",
            vec![TreeNode::folder(
                "1",
                "Bar",
                vec![
                    TreeNode::bookmark("2", "a", "https://a.example"),
                    TreeNode::bookmark("3", "b", "https://b.example"),
                ],
            )],
        )))
    }

    #[test]
    fn test_default_contains_root_only() {
        let state = PageState::default();
        assert_eq!(state.nodes.len(), 1);
        assert!(state.node(ROOT_NODE_ID).is_some_and(BookmarkNode::is_folder));
    }

    #[test]
    fn test_displayed_list_uses_selected_folder() {
        let mut state = state();
        assert!(state.displayed_list().is_empty());

        state.selected_folder = Some("1".to_string());
        assert_eq!(state.displayed_list(), vec!["2", "3"]);
    }

    #[test]
    fn test_displayed_list_prefers_search_results() {
        let mut state = state();
        state.selected_folder = Some("1".to_string());
        state.search.term = Some("b".to_string());
        assert!(state.displayed_list().is_empty());

        state.search.results = Some(vec!["3".to_string()]);
        assert_eq!(state.displayed_list(), vec!["3"]);
    }

    #[test]
    fn test_state_serializes_with_camel_case_keys() {
        let mut state = state();
        state.selected_folder = Some("1".to_string());
        state.folder_open_state.insert("1".to_string());

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["selectedFolder"], "1");
        assert_eq!(json["folderOpenState"][0], "1");
        assert_eq!(json["search"]["inProgress"], false);

        let back: PageState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
