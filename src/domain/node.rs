//! Bookmark node model and normalization of raw service nodes.
//!
//! The backing bookmarks service describes nodes as recursive [`TreeNode`]s:
//! folders embed their children, and several fields are transient (modification
//! stamps, managed-node markers). The store keeps a flat [`NodeMap`] of
//! [`BookmarkNode`]s instead, where a folder refers to its children by id.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Id of the root node. Present in every node map, never selectable.
pub const ROOT_NODE_ID: &str = "0";

/// Flat map of every node in the bookmark forest, keyed by id.
pub type NodeMap = HashMap<String, BookmarkNode>;

/// A normalized bookmark or folder as stored in the [`NodeMap`].
///
/// Folders carry `children: Some(..)` (possibly empty) and no url; bookmarks
/// carry `children: None` and usually a url.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<i64>,
}

impl BookmarkNode {
    /// Returns `true` if this node is a folder.
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        self.children.is_some()
    }

    /// Ordered child ids, empty for bookmarks.
    #[must_use]
    pub fn child_ids(&self) -> &[String] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// Raw node description as delivered by the backing bookmarks service.
///
/// Children are embedded recursively. The service omits `children` for freshly
/// created folders, so a node with neither url nor children is a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<i64>,
    /// Last time a folder's contents changed. Not kept in the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_group_modified: Option<i64>,
    /// Set on nodes managed by policy. Not kept in the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unmodifiable: Option<String>,
}

impl TreeNode {
    /// Creates a raw folder with the given children, stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookmark_store::TreeNode;
    ///
    /// let folder = TreeNode::folder("1", "Bookmarks bar", vec![
    ///     TreeNode::bookmark("2", "Rust", "https://www.rust-lang.org"),
    /// ]);
    /// assert_eq!(folder.children.as_ref().map(Vec::len), Some(1));
    /// ```
    #[must_use]
    pub fn folder(id: impl Into<String>, title: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            index: None,
            title: title.into(),
            url: None,
            children: Some(children),
            date_added: Some(chrono::Utc::now().timestamp_millis()),
            date_group_modified: None,
            unmodifiable: None,
        }
    }

    /// Creates a raw bookmark, stamped with the current time.
    #[must_use]
    pub fn bookmark(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            index: None,
            title: title.into(),
            url: Some(url.into()),
            children: None,
            date_added: Some(chrono::Utc::now().timestamp_millis()),
            date_group_modified: None,
            unmodifiable: None,
        }
    }

    /// Places the node under `parent_id` at `index`.
    #[must_use]
    pub fn with_position(mut self, parent_id: impl Into<String>, index: usize) -> Self {
        self.parent_id = Some(parent_id.into());
        self.index = Some(index);
        self
    }
}

/// Converts a raw service node into a store node.
///
/// Transient fields are dropped. Folders (nodes without a url) always get an
/// ordered child id list, empty when the service sent none.
#[must_use]
pub fn normalize_node(tree_node: &TreeNode) -> BookmarkNode {
    let children = if tree_node.url.is_none() {
        Some(
            tree_node
                .children
                .iter()
                .flatten()
                .map(|child| child.id.clone())
                .collect(),
        )
    } else {
        None
    };

    BookmarkNode {
        id: tree_node.id.clone(),
        parent_id: tree_node.parent_id.clone(),
        index: tree_node.index,
        title: tree_node.title.clone(),
        url: tree_node.url.clone(),
        children,
        date_added: tree_node.date_added,
    }
}

/// Flattens a raw tree into a [`NodeMap`].
///
/// Children missing a `parent_id` or `index` inherit them from their position
/// in the raw tree.
#[must_use]
pub fn normalize_tree(root: &TreeNode) -> NodeMap {
    let mut nodes = NodeMap::new();
    let mut stack = vec![root.clone()];

    while let Some(mut tree_node) = stack.pop() {
        if let Some(children) = tree_node.children.as_mut() {
            for (index, child) in children.iter_mut().enumerate() {
                child.parent_id.get_or_insert_with(|| tree_node.id.clone());
                child.index.get_or_insert(index);
            }
        }

        let node = normalize_node(&tree_node);
        stack.extend(tree_node.children.take().into_iter().flatten());
        nodes.insert(node.id.clone(), node);
    }

    tracing::trace!(node_count = nodes.len(), "normalized tree");
    nodes
}
