//! Domain layer for the bookmark store.
//!
//! Holds the tree model shared by the action factory and the reducer: node
//! types, normalization of raw service nodes, read-only traversal, and errors.
//! Nothing here knows about actions or the store.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`node`]: Bookmark node model and normalization
//! - [`tree`]: Descendant, ancestor and child lookups over a node map
//!
//! # Examples
//!
//! ```
//! use bookmark_store::domain::{children_of, normalize_tree, TreeNode, ROOT_NODE_ID};
//!
//! let nodes = normalize_tree(&TreeNode::folder(ROOT_NODE_ID, "", vec![
//!     TreeNode::folder("1", "Bookmarks bar", vec![]),
//! ]));
//! assert_eq!(children_of(&nodes, ROOT_NODE_ID), ["1"]);
//! ```

pub mod error;
pub mod node;
pub mod tree;

pub use error::{BookmarkError, Result};
pub use node::{normalize_node, normalize_tree, BookmarkNode, NodeMap, TreeNode, ROOT_NODE_ID};
pub use tree::{ancestors, children_of, descendants, is_within};
