//! Read-only traversal of a [`NodeMap`].
//!
//! Node maps come from an external service and may be malformed. Every walk
//! here is iterative and tracks visited ids, so cyclic or dangling child
//! references terminate instead of recursing forever.

use super::node::{NodeMap, ROOT_NODE_ID};
use std::collections::{BTreeSet, HashSet};

/// Collects every id transitively reachable from `id` through the children
/// relation. `id` itself is never part of the result.
///
/// Child ids that are missing from `nodes` are still reported (they are
/// referenced, so a cascading remove must purge them) but are not expanded.
///
/// # Examples
///
/// ```
/// use bookmark_store::domain::{descendants, normalize_tree};
/// use bookmark_store::TreeNode;
///
/// let nodes = normalize_tree(&TreeNode::folder("0", "", vec![
///     TreeNode::folder("1", "Bar", vec![
///         TreeNode::bookmark("2", "Rust", "https://www.rust-lang.org"),
///     ]),
/// ]));
///
/// let found = descendants(&nodes, "0");
/// assert_eq!(found.len(), 2);
/// assert!(!found.contains("0"));
/// ```
#[must_use]
pub fn descendants(nodes: &NodeMap, id: &str) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![id];
    visited.insert(id);

    while let Some(current) = stack.pop() {
        let Some(node) = nodes.get(current) else {
            continue;
        };

        for child in node.child_ids() {
            if !visited.insert(child.as_str()) {
                tracing::trace!(node_id = %child, "skipping already visited node");
                continue;
            }
            found.insert(child.clone());
            stack.push(child.as_str());
        }
    }

    found
}

/// Returns the parent chain of `id`, nearest parent first, excluding the root.
#[must_use]
pub fn ancestors(nodes: &NodeMap, id: &str) -> Vec<String> {
    let mut chain = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(id);

    let mut current = nodes.get(id).and_then(|node| node.parent_id.as_deref());
    while let Some(parent_id) = current {
        if parent_id == ROOT_NODE_ID || !visited.insert(parent_id) {
            break;
        }
        chain.push(parent_id.to_string());
        current = nodes.get(parent_id).and_then(|node| node.parent_id.as_deref());
    }

    chain
}

/// Ordered child ids of `id`, empty if the node is missing or not a folder.
#[must_use]
pub fn children_of<'a>(nodes: &'a NodeMap, id: &str) -> &'a [String] {
    nodes.get(id).map_or(&[], |node| node.child_ids())
}

/// Returns `true` if `id` is `ancestor` or lies anywhere below it.
#[must_use]
pub fn is_within(nodes: &NodeMap, id: &str, ancestor: &str) -> bool {
    id == ancestor || ancestors(nodes, id).iter().any(|parent| parent == ancestor)
}
