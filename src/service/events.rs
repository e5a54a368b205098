//! Notifications delivered by the backing bookmarks service.
//!
//! The service owns persistence and sends one [`BookmarkEvent`] per change.
//! Events are JSON messages, so hosts that receive them over IPC can hand the
//! raw payload to [`handle_service_message`](super::handle_service_message).

use crate::app::ChangeInfo;
use crate::domain::TreeNode;
use serde::{Deserialize, Serialize};

/// Old and new position of a moved node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveInfo {
    pub parent_id: String,
    pub index: usize,
    pub old_parent_id: String,
    pub old_index: usize,
}

/// Former position of a removed node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveInfo {
    pub parent_id: String,
    pub index: usize,
}

/// A change reported by the backing bookmarks service.
///
/// Externally tagged on the wire: `{"Moved":{"id":"5","moveInfo":{..}}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookmarkEvent {
    /// A node was created. `node` carries its parent and index.
    Created {
        id: String,
        node: TreeNode,
    },

    /// A node's title or url changed.
    #[serde(rename_all = "camelCase")]
    Changed {
        id: String,
        change_info: ChangeInfo,
    },

    /// A node moved to another folder or position.
    #[serde(rename_all = "camelCase")]
    Moved {
        id: String,
        move_info: MoveInfo,
    },

    /// A node and its subtree were removed.
    #[serde(rename_all = "camelCase")]
    Removed {
        id: String,
        remove_info: RemoveInfo,
    },

    /// A folder's children were sorted or reordered.
    #[serde(rename_all = "camelCase")]
    ChildrenReordered {
        id: String,
        child_ids: Vec<String>,
    },

    /// The service finished a bulk change (import, sync); `tree` is the
    /// complete new tree rooted at the root node.
    Resynced {
        tree: TreeNode,
    },

    /// Results for a search request.
    SearchFinished {
        /// Term the search was issued for.
        term: String,
        /// Matching ids in display order.
        results: Vec<String>,
    },
}

impl BookmarkEvent {
    /// Short event name for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Changed { .. } => "changed",
            Self::Moved { .. } => "moved",
            Self::Removed { .. } => "removed",
            Self::ChildrenReordered { .. } => "children_reordered",
            Self::Resynced { .. } => "resynced",
            Self::SearchFinished { .. } => "search_finished",
        }
    }
}
