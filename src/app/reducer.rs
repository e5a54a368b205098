//! Reducer applying actions to the page state.
//!
//! [`reduce`] is a pure function of `(state, action)`: it clones the previous
//! state, applies the action slice by slice, and returns the new state. If any
//! slice rejects the action the whole transition fails and the previous state
//! stays valid, so callers never observe a half-applied action.
//!
//! # Slices
//!
//! | Slice               | Reacts to                                                     |
//! |---------------------|---------------------------------------------------------------|
//! | nodes               | create, edit, move, reorder, remove, refresh                  |
//! | selected folder     | select-folder, remove, refresh                                |
//! | folder open state   | change-folder-open, select-folder, remove, refresh            |
//! | selection           | select-items, deselect-items, select-folder, search, remove, refresh |
//! | search              | start/finish/clear-search, select-folder, remove, refresh     |

use super::actions::{Action, ChangeInfo};
use super::state::{PageState, SearchState, SelectionState};
use crate::domain::{ancestors, is_within, BookmarkError, NodeMap, Result, ROOT_NODE_ID};
use std::collections::BTreeSet;

/// Reducer behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceOptions {
    /// Drop selection, open-folder, search-result and selected-folder entries
    /// that point at nodes missing after a `refresh-nodes`.
    pub purge_stale_on_refresh: bool,
}

impl Default for ReduceOptions {
    fn default() -> Self {
        Self {
            purge_stale_on_refresh: true,
        }
    }
}

/// Applies `action` to `state` with default options.
///
/// # Errors
///
/// Returns a contract-violation error if the action does not fit the state,
/// see [`reduce_with`].
///
/// # Example
///
/// ```rust
/// use bookmark_store::{actions, reduce, PageState};
///
/// let state = PageState::default();
/// let next = reduce(&state, &actions::change_folder_open("0", true))?;
/// assert!(next.is_folder_open("0"));
/// # Ok::<(), bookmark_store::BookmarkError>(())
/// ```
pub fn reduce(state: &PageState, action: &Action) -> Result<PageState> {
    reduce_with(state, action, ReduceOptions::default())
}

/// Applies `action` to `state`.
///
/// # Errors
///
/// - [`BookmarkError::UnknownNode`] if the action names a node or parent that
///   does not exist
/// - [`BookmarkError::NotAFolder`] if children would be placed under a
///   bookmark, or a bookmark is selected or opened as a folder
/// - [`BookmarkError::RootFolderSelection`] if the root is selected
/// - [`BookmarkError::MoveIntoSelf`] if a folder would be moved below itself
/// - [`BookmarkError::PositionMismatch`] if a move or remove records an old
///   position that does not hold the node
/// - [`BookmarkError::NotAPermutation`] if a reorder adds or drops children
pub fn reduce_with(
    state: &PageState,
    action: &Action,
    options: ReduceOptions,
) -> Result<PageState> {
    let _span = tracing::debug_span!("reduce", action = action.name()).entered();

    if matches!(action, Action::Unknown) {
        tracing::debug!("ignoring unknown action");
        return Ok(state.clone());
    }

    let mut next = state.clone();
    reduce_nodes(&mut next.nodes, action)?;

    let purge = options.purge_stale_on_refresh;
    reduce_selected_folder(&mut next.selected_folder, &next.nodes, action, purge);
    reduce_folder_open_state(&mut next.folder_open_state, &next.nodes, action, purge);
    reduce_selection(&mut next.selection, &next.nodes, action, purge);
    reduce_search(&mut next.search, &next.nodes, action, purge);

    Ok(next)
}

fn reduce_nodes(nodes: &mut NodeMap, action: &Action) -> Result<()> {
    match action {
        Action::CreateBookmark {
            id,
            parent_id,
            parent_index,
            node,
        } => {
            if let Some(parent_id) = parent_id {
                let children = children_mut(nodes, parent_id)?;
                let at = parent_index.map_or(children.len(), |index| index.min(children.len()));
                children.insert(at, id.clone());
            }

            let mut node = node.clone();
            node.id.clone_from(id);
            node.parent_id.clone_from(parent_id);
            nodes.insert(id.clone(), node);

            if let Some(parent_id) = parent_id {
                reindex_children(nodes, parent_id);
            }
            tracing::debug!(node_id = %id, parent_id = ?parent_id, "bookmark created");
        }
        Action::EditBookmark { id, change_info } => {
            let node = nodes
                .get_mut(id)
                .ok_or_else(|| BookmarkError::UnknownNode(id.clone()))?;
            let ChangeInfo { title, url } = change_info;
            if let Some(title) = title {
                node.title.clone_from(title);
            }
            if let Some(url) = url {
                node.url = Some(url.clone());
            }
            tracing::debug!(node_id = %id, "bookmark edited");
        }
        Action::MoveBookmark {
            id,
            parent_id,
            index,
            old_parent_id,
            old_index,
        } => {
            if !nodes.contains_key(id) {
                return Err(BookmarkError::UnknownNode(id.clone()));
            }
            children_mut(nodes, parent_id)?;
            if is_within(nodes, parent_id, id) {
                return Err(BookmarkError::MoveIntoSelf {
                    id: id.clone(),
                    parent_id: parent_id.clone(),
                });
            }

            take_child(nodes, old_parent_id, id, *old_index)?;

            let children = children_mut(nodes, parent_id)?;
            let at = (*index).min(children.len());
            children.insert(at, id.clone());

            if let Some(node) = nodes.get_mut(id) {
                node.parent_id = Some(parent_id.clone());
            }
            reindex_children(nodes, old_parent_id);
            if parent_id != old_parent_id {
                reindex_children(nodes, parent_id);
            }
            tracing::debug!(
                node_id = %id,
                from = %old_parent_id,
                from_index = old_index,
                to = %parent_id,
                to_index = at,
                "bookmark moved"
            );
        }
        Action::ReorderChildren { id, children } => {
            let current = children_mut(nodes, id)?;
            if !is_permutation(current, children) {
                return Err(BookmarkError::NotAPermutation { id: id.clone() });
            }
            current.clone_from(children);
            reindex_children(nodes, id);
            tracing::debug!(folder_id = %id, child_count = children.len(), "children reordered");
        }
        Action::RemoveBookmark {
            id,
            descendants,
            parent_id,
            index,
        } => {
            take_child(nodes, parent_id, id, *index)?;
            reindex_children(nodes, parent_id);

            nodes.remove(id);
            for descendant in descendants {
                nodes.remove(descendant);
            }
            tracing::debug!(node_id = %id, removed = descendants.len() + 1, "bookmark removed");
        }
        Action::RefreshNodes { nodes: fresh } => {
            nodes.clone_from(fresh);
            tracing::debug!(node_count = nodes.len(), "nodes refreshed");
        }
        Action::SelectFolder { id } => {
            if id == ROOT_NODE_ID {
                return Err(BookmarkError::RootFolderSelection);
            }
            require_folder(nodes, id)?;
        }
        Action::ChangeFolderOpen { id, .. } => require_folder(nodes, id)?,
        _ => {}
    }

    Ok(())
}

fn reduce_selected_folder(
    selected: &mut Option<String>,
    nodes: &NodeMap,
    action: &Action,
    purge: bool,
) {
    match action {
        Action::SelectFolder { id } => *selected = Some(id.clone()),
        Action::RemoveBookmark {
            id,
            descendants,
            parent_id,
            ..
        } => {
            if selected
                .as_ref()
                .is_some_and(|folder| folder == id || descendants.contains(folder))
            {
                // The root is never selectable.
                *selected = (parent_id != ROOT_NODE_ID).then(|| parent_id.clone());
                tracing::debug!(folder_id = ?selected, "selected folder removed, selecting parent");
            }
        }
        Action::RefreshNodes { .. } if purge => {
            if selected.as_ref().is_some_and(|folder| !nodes.contains_key(folder)) {
                *selected = None;
            }
        }
        _ => {}
    }
}

fn reduce_folder_open_state(
    open: &mut BTreeSet<String>,
    nodes: &NodeMap,
    action: &Action,
    purge: bool,
) {
    match action {
        Action::ChangeFolderOpen { id, open: true } => {
            open.insert(id.clone());
        }
        Action::ChangeFolderOpen { id, open: false } => {
            open.remove(id);
        }
        Action::SelectFolder { id } => open.extend(ancestors(nodes, id)),
        Action::RemoveBookmark { id, descendants, .. } => {
            open.remove(id);
            open.retain(|folder| !descendants.contains(folder));
        }
        Action::RefreshNodes { .. } if purge => open.retain(|folder| nodes.contains_key(folder)),
        _ => {}
    }
}

fn reduce_selection(
    selection: &mut SelectionState,
    nodes: &NodeMap,
    action: &Action,
    purge: bool,
) {
    match action {
        Action::SelectItems { add, anchor, items } => {
            if !add {
                selection.items.clear();
            }
            selection.items.extend(items.iter().cloned());
            selection.anchor = Some(anchor.clone());
        }
        Action::DeselectItems
        | Action::SelectFolder { .. }
        | Action::StartSearch { .. }
        | Action::ClearSearch => selection.clear(),
        Action::RemoveBookmark { id, descendants, .. } => {
            let removed = |item: &String| item == id || descendants.contains(item);
            selection.items.retain(|item| !removed(item));
            if selection.anchor.as_ref().is_some_and(removed) {
                selection.anchor = None;
            }
        }
        Action::RefreshNodes { .. } if purge => {
            selection.items.retain(|item| nodes.contains_key(item));
            if selection.anchor.as_ref().is_some_and(|anchor| !nodes.contains_key(anchor)) {
                selection.anchor = None;
            }
        }
        _ => {}
    }
}

fn reduce_search(search: &mut SearchState, nodes: &NodeMap, action: &Action, purge: bool) {
    match action {
        Action::StartSearch { term } => {
            search.term = Some(term.clone());
            search.in_progress = true;
        }
        Action::FinishSearch { results } => {
            search.results = Some(results.clone());
            search.in_progress = false;
        }
        Action::ClearSearch | Action::SelectFolder { .. } => *search = SearchState::default(),
        Action::RemoveBookmark { id, descendants, .. } => {
            if let Some(results) = search.results.as_mut() {
                results.retain(|item| item != id && !descendants.contains(item));
            }
        }
        Action::RefreshNodes { .. } if purge => {
            if let Some(results) = search.results.as_mut() {
                results.retain(|item| nodes.contains_key(item));
            }
        }
        _ => {}
    }
}

/// Mutable children of folder `id`.
fn children_mut<'a>(nodes: &'a mut NodeMap, id: &str) -> Result<&'a mut Vec<String>> {
    nodes
        .get_mut(id)
        .ok_or_else(|| BookmarkError::UnknownNode(id.to_string()))?
        .children
        .as_mut()
        .ok_or_else(|| BookmarkError::NotAFolder(id.to_string()))
}

/// Fails unless `id` names a folder.
fn require_folder(nodes: &NodeMap, id: &str) -> Result<()> {
    let node = nodes
        .get(id)
        .ok_or_else(|| BookmarkError::UnknownNode(id.to_string()))?;
    if !node.is_folder() {
        return Err(BookmarkError::NotAFolder(id.to_string()));
    }
    Ok(())
}

/// Unlinks `id` from position `index` of `parent_id`.
fn take_child(nodes: &mut NodeMap, parent_id: &str, id: &str, index: usize) -> Result<()> {
    let children = children_mut(nodes, parent_id)?;
    if children.get(index).map(String::as_str) != Some(id) {
        return Err(BookmarkError::PositionMismatch {
            id: id.to_string(),
            parent_id: parent_id.to_string(),
            index,
        });
    }
    children.remove(index);
    Ok(())
}

/// Rewrites the `index` field of each child of `parent_id` to its position.
fn reindex_children(nodes: &mut NodeMap, parent_id: &str) {
    let Some(children) = nodes.get(parent_id).and_then(|node| node.children.clone()) else {
        return;
    };
    for (position, child) in children.iter().enumerate() {
        if let Some(node) = nodes.get_mut(child) {
            node.index = Some(position);
        }
    }
}

fn is_permutation(current: &[String], proposed: &[String]) -> bool {
    if current.len() != proposed.len() {
        return false;
    }
    let mut a: Vec<&String> = current.iter().collect();
    let mut b: Vec<&String> = proposed.iter().collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions;
    use crate::domain::{descendants, normalize_tree, TreeNode, ROOT_NODE_ID};

    /// ```text
    /// 0
    /// ├── 1 Bar
    /// │   ├── 10 a
    /// │   ├── 11 b
    /// │   ├── 12 c
    /// │   ├── 13 d
    /// │   └── 14 Work
    /// │       ├── 15 e
    /// │       └── 16 Deep
    /// │           └── 17 f
    /// └── 2 Other
    ///     └── 20 g
    /// ```
    fn state() -> PageState {
        PageState::new(normalize_tree(&TreeNode::folder(
            ROOT_NODE_ID,
            "",
            vec![
                TreeNode::folder(
                    "1",
                    "Bar",
                    vec![
                        TreeNode::bookmark("10", "a", "https://a.example"),
                        TreeNode::bookmark("11", "b", "https://b.example"),
                        TreeNode::bookmark("12", "c", "https://c.example"),
                        TreeNode::bookmark("13", "d", "https://d.example"),
                        TreeNode::folder(
                            "14",
                            "Work",
                            vec![
                                TreeNode::bookmark("15", "e", "https://e.example"),
                                TreeNode::folder("16", "Deep", vec![
                                    TreeNode::bookmark("17", "f", "https://f.example"),
                                ]),
                            ],
                        ),
                    ],
                ),
                TreeNode::folder("2", "Other", vec![
                    TreeNode::bookmark("20", "g", "https://g.example"),
                ]),
            ],
        )))
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn set(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_create_inserts_at_parent_index() {
        let state = state();
        let raw = TreeNode::bookmark("30", "new", "https://new.example").with_position("1", 1);
        let next = reduce(&state, &actions::create_bookmark("30", &raw)).unwrap();

        assert_eq!(next.nodes["1"].child_ids(), ids(&["10", "30", "11", "12", "13", "14"]));
        assert_eq!(next.nodes["30"].index, Some(1));
        assert_eq!(next.nodes["11"].index, Some(2));
        assert_eq!(next.nodes.len(), state.nodes.len() + 1);
    }

    #[test]
    fn test_create_into_unknown_parent_fails() {
        let raw = TreeNode::bookmark("30", "new", "https://new.example").with_position("nope", 0);
        let err = reduce(&state(), &actions::create_bookmark("30", &raw)).unwrap_err();
        assert!(matches!(err, BookmarkError::UnknownNode(id) if id == "nope"));
    }

    #[test]
    fn test_create_then_remove_restores_nodes() {
        let state = state();
        let raw = TreeNode::bookmark("30", "new", "https://new.example").with_position("2", 0);
        let created = reduce(&state, &actions::create_bookmark("30", &raw)).unwrap();

        let removal = actions::remove_bookmark("30", "2", 0, &created.nodes);
        let removed = reduce(&created, &removal).unwrap();
        assert_eq!(removed.nodes, state.nodes);
    }

    #[test]
    fn test_edit_merges_fields() {
        let state = state();
        let change = ChangeInfo {
            title: Some("Renamed".to_string()),
            url: None,
        };
        let next = reduce(&state, &actions::edit_bookmark("10", change)).unwrap();

        let node = &next.nodes["10"];
        assert_eq!(node.title, "Renamed");
        assert_eq!(node.url.as_deref(), Some("https://a.example"));
        assert_eq!(node.index, state.nodes["10"].index);

        let folder = reduce(&next, &actions::edit_bookmark("14", ChangeInfo {
            title: Some("Job".into()),
            url: None,
        }))
        .unwrap();
        assert_eq!(folder.nodes["14"].child_ids(), ids(&["15", "16"]));
    }

    #[test]
    fn test_move_between_folders() {
        let state = state();
        let next = reduce(&state, &actions::move_bookmark("13", "2", 0, "1", 3)).unwrap();

        assert!(!next.nodes["1"].child_ids().contains(&"13".to_string()));
        assert_eq!(next.nodes["2"].child_ids(), ids(&["13", "20"]));

        let moved = &next.nodes["13"];
        assert_eq!(moved.parent_id.as_deref(), Some("2"));
        assert_eq!(moved.index, Some(0));
        assert_eq!(next.nodes["20"].index, Some(1));
        assert_eq!(next.nodes["14"].index, Some(3));
    }

    #[test]
    fn test_move_within_folder_reindexes() {
        let next = reduce(&state(), &actions::move_bookmark("10", "1", 2, "1", 0)).unwrap();
        assert_eq!(next.nodes["1"].child_ids(), ids(&["11", "12", "10", "13", "14"]));
        assert_eq!(next.nodes["10"].index, Some(2));
        assert_eq!(next.nodes["11"].index, Some(0));
    }

    #[test]
    fn test_move_with_wrong_old_index_fails() {
        let state = state();
        let err = reduce(&state, &actions::move_bookmark("13", "2", 0, "1", 1)).unwrap_err();
        assert!(matches!(err, BookmarkError::PositionMismatch { index: 1, .. }));
    }

    #[test]
    fn test_move_into_bookmark_fails() {
        let err = reduce(&state(), &actions::move_bookmark("13", "20", 0, "1", 3)).unwrap_err();
        assert!(matches!(err, BookmarkError::NotAFolder(id) if id == "20"));
    }

    #[test]
    fn test_reorder_children() {
        let order = ids(&["14", "13", "12", "11", "10"]);
        let next = reduce(&state(), &actions::reorder_children("1", order.clone())).unwrap();
        assert_eq!(next.nodes["1"].child_ids(), order);
        assert_eq!(next.nodes["14"].index, Some(0));
    }

    #[test]
    fn test_reorder_rejects_non_permutation() {
        let state = state();
        for bad in [
            ids(&["10", "11"]),
            ids(&["10", "11", "12", "13", "20"]),
            ids(&["10", "10", "12", "13", "14"]),
        ] {
            let err = reduce(&state, &actions::reorder_children("1", bad)).unwrap_err();
            assert!(matches!(err, BookmarkError::NotAPermutation { .. }));
        }
    }

    #[test]
    fn test_remove_folder_cascades() {
        let mut state = state();
        state.selected_folder = Some("16".to_string());
        state.folder_open_state.extend(ids(&["1", "14", "16"]));
        state.selection.items.extend(ids(&["15", "10"]));
        state.selection.anchor = Some("15".to_string());
        state.search.term = Some("x".to_string());
        state.search.results = Some(ids(&["17", "20"]));

        let removal = actions::remove_bookmark("14", "1", 4, &state.nodes);
        let next = reduce(&state, &removal).unwrap();

        assert_eq!(next.nodes.len(), state.nodes.len() - 4);
        for gone in ["14", "15", "16", "17"] {
            assert!(!next.nodes.contains_key(gone));
        }
        assert_eq!(next.nodes["1"].child_ids(), ids(&["10", "11", "12", "13"]));
        assert_eq!(next.selected_folder.as_deref(), Some("1"));
        assert_eq!(next.folder_open_state, set(&["1"]));
        assert_eq!(next.selection.items, set(&["10"]));
        assert!(next.selection.anchor.is_none());
        assert_eq!(next.search.results, Some(ids(&["20"])));
    }

    #[test]
    fn test_remove_size_matches_descendant_count() {
        let state = state();
        let n = descendants(&state.nodes, "1").len();
        let removal = actions::remove_bookmark("1", ROOT_NODE_ID, 0, &state.nodes);
        let next = reduce(&state, &removal).unwrap();
        assert_eq!(next.nodes.len(), state.nodes.len() - (n + 1));
    }

    #[test]
    fn test_select_folder_opens_ancestors_and_resets() {
        let mut state = state();
        state.selection.items.insert("10".to_string());
        state.search.term = Some("x".to_string());

        let next = reduce(&state, &actions::select_folder("16").unwrap()).unwrap();
        assert_eq!(next.selected_folder.as_deref(), Some("16"));
        assert!(next.is_folder_open("1"));
        assert!(next.is_folder_open("14"));
        assert!(!next.is_folder_open("16"));
        assert!(next.selection.is_empty());
        assert_eq!(next.search, SearchState::default());
    }

    #[test]
    fn test_change_folder_open_is_idempotent() {
        let state = state();
        let once = reduce(&state, &actions::change_folder_open("2", true)).unwrap();
        let twice = reduce(&once, &actions::change_folder_open("2", true)).unwrap();
        assert_eq!(once, twice);

        let closed = reduce(&twice, &actions::change_folder_open("2", false)).unwrap();
        let closed_again = reduce(&closed, &actions::change_folder_open("2", false)).unwrap();
        assert!(!closed_again.is_folder_open("2"));
        assert_eq!(closed, closed_again);
    }

    #[test]
    fn test_select_items_replace_and_add() {
        let state = state();
        let first = reduce(&state, &Action::SelectItems {
            add: false,
            anchor: "10".into(),
            items: ids(&["10"]),
        })
        .unwrap();
        let added = reduce(&first, &Action::SelectItems {
            add: true,
            anchor: "12".into(),
            items: ids(&["11", "12"]),
        })
        .unwrap();
        assert_eq!(added.selection.items.len(), 3);
        assert_eq!(added.selection.anchor.as_deref(), Some("12"));

        let replaced = reduce(&added, &Action::SelectItems {
            add: false,
            anchor: "13".into(),
            items: ids(&["13"]),
        })
        .unwrap();
        assert_eq!(replaced.selection.items, set(&["13"]));

        let cleared = reduce(&replaced, &actions::deselect_items()).unwrap();
        assert_eq!(cleared.selection, SelectionState::default());
    }

    #[test]
    fn test_search_lifecycle() {
        let state = state();
        let started = reduce(&state, &actions::set_search_term(Some("b"))).unwrap();
        assert_eq!(started.search.term.as_deref(), Some("b"));
        assert!(started.search.in_progress);

        let finished = reduce(&started, &actions::set_search_results(ids(&["11"]))).unwrap();
        assert!(!finished.search.in_progress);
        assert_eq!(finished.displayed_list(), ids(&["11"]));

        let cleared = reduce(&finished, &actions::set_search_term(None)).unwrap();
        assert_eq!(cleared.search, SearchState::default());
    }

    #[test]
    fn test_refresh_purges_stale_references() {
        let mut state = state();
        state.selected_folder = Some("14".to_string());
        state.folder_open_state.extend(ids(&["1", "14"]));
        state.selection.items.extend(ids(&["15", "20"]));
        state.selection.anchor = Some("15".to_string());
        state.search.results = Some(ids(&["15", "20"]));

        let fresh = normalize_tree(&TreeNode::folder(ROOT_NODE_ID, "", vec![
            TreeNode::folder("1", "Bar", vec![]),
            TreeNode::folder("2", "Other", vec![
                TreeNode::bookmark("20", "g", "https://g.example"),
            ]),
        ]));
        let next = reduce(&state, &actions::refresh_nodes(fresh.clone())).unwrap();

        assert_eq!(next.nodes, fresh);
        assert!(next.selected_folder.is_none());
        assert_eq!(next.folder_open_state, set(&["1"]));
        assert_eq!(next.selection.items, set(&["20"]));
        assert!(next.selection.anchor.is_none());
        assert_eq!(next.search.results, Some(ids(&["20"])));
    }

    #[test]
    fn test_refresh_without_purge_keeps_references() {
        let mut state = state();
        state.selection.items.insert("15".to_string());

        let options = ReduceOptions {
            purge_stale_on_refresh: false,
        };
        let next = reduce_with(&state, &actions::refresh_nodes(NodeMap::new()), options).unwrap();
        assert!(next.nodes.is_empty());
        assert!(next.selection.contains("15"));
    }

    #[test]
    fn test_unknown_action_is_noop() {
        let state = state();
        assert_eq!(reduce(&state, &Action::Unknown).unwrap(), state);
    }

    #[test]
    fn test_failed_action_leaves_input_untouched() {
        let state = state();
        let before = state.clone();
        assert!(reduce(&state, &actions::remove_bookmark("10", "1", 3, &state.nodes)).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_folder_into_own_subtree_fails() {
        let state = state();

        let err = reduce(&state, &actions::move_bookmark("14", "16", 0, "1", 4)).unwrap_err();
        assert!(matches!(
            err,
            BookmarkError::MoveIntoSelf { ref id, ref parent_id } if id == "14" && parent_id == "16"
        ));
        assert!(err.is_contract_violation());

        let err = reduce(&state, &actions::move_bookmark("14", "14", 0, "1", 4)).unwrap_err();
        assert!(matches!(err, BookmarkError::MoveIntoSelf { .. }));
    }

    #[test]
    fn test_move_folder_keeps_tree_connected() {
        let state = state();
        let next = reduce(&state, &actions::move_bookmark("16", "2", 1, "14", 1)).unwrap();

        assert_eq!(descendants(&next.nodes, ROOT_NODE_ID).len(), next.nodes.len() - 1);
        assert_eq!(next.nodes["2"].child_ids(), ids(&["20", "16"]));
    }

    #[test]
    fn test_remove_top_level_selected_folder_clears_selection() {
        let mut state = state();
        state.selected_folder = Some("14".to_string());

        let removal = actions::remove_bookmark("1", ROOT_NODE_ID, 0, &state.nodes);
        let next = reduce(&state, &removal).unwrap();
        assert!(next.selected_folder.is_none());
        assert!(next.displayed_list().is_empty());
    }

    #[test]
    fn test_select_folder_requires_existing_folder() {
        let state = state();

        let err = reduce(&state, &Action::SelectFolder { id: "17".into() }).unwrap_err();
        assert!(matches!(err, BookmarkError::NotAFolder(id) if id == "17"));

        let err = reduce(&state, &Action::SelectFolder { id: "99".into() }).unwrap_err();
        assert!(matches!(err, BookmarkError::UnknownNode(id) if id == "99"));

        let err = reduce(&state, &Action::SelectFolder { id: ROOT_NODE_ID.into() }).unwrap_err();
        assert!(matches!(err, BookmarkError::RootFolderSelection));
    }

    #[test]
    fn test_change_folder_open_requires_existing_folder() {
        let state = state();

        let err = reduce(&state, &actions::change_folder_open("10", true)).unwrap_err();
        assert!(matches!(err, BookmarkError::NotAFolder(_)));

        let err = reduce(&state, &actions::change_folder_open("99", false)).unwrap_err();
        assert!(matches!(err, BookmarkError::UnknownNode(_)));
    }
}
