//! Error types for the bookmark store.
//!
//! This module defines the centralized error type [`BookmarkError`] and a type alias
//! [`Result`] used across the action factory, the reducer, and the ambient layers.
//!
//! Errors fall into two groups:
//!
//! - **Contract violations** (`RootFolderSelection`, `ItemNotDisplayed`,
//!   `NotAPermutation`, `UnknownNode`, `NotAFolder`, `MoveIntoSelf`,
//!   `PositionMismatch`): the caller and the node model are out of sync.
//!   These are always surfaced, never swallowed.
//! - **Ambient failures** (`Config`, `Io`, `Serialization`): configuration
//!   loading and log file handling.

use thiserror::Error;

/// The main error type for bookmark store operations.
///
/// # Examples
///
/// ```
/// use bookmark_store::{actions, BookmarkError};
///
/// let err = actions::select_folder("0").unwrap_err();
/// assert!(matches!(err, BookmarkError::RootFolderSelection));
/// ```
#[derive(Debug, Error)]
pub enum BookmarkError {
    /// The root folder was passed as a selection target.
    ///
    /// The root node is structurally present in every node map but can never
    /// be selected.
    #[error("Cannot select root folder")]
    RootFolderSelection,

    /// An item was clicked that is not part of the displayed list.
    #[error("Item {0} is not in the displayed list")]
    ItemNotDisplayed(String),

    /// A reorder listed children that are not a permutation of the folder's
    /// current children.
    #[error("New children of {id} are not a permutation of the existing children")]
    NotAPermutation {
        /// Folder being reordered.
        id: String,
    },

    /// An action referenced a node that does not exist in the node map.
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// An action tried to place children under a bookmark.
    #[error("Node {0} is not a folder")]
    NotAFolder(String),

    /// A folder was moved into itself or one of its own subfolders.
    #[error("Cannot move {id} into {parent_id}, which lies inside it")]
    MoveIntoSelf {
        /// Folder being moved.
        id: String,
        /// Requested new parent.
        parent_id: String,
    },

    /// A move or remove recorded an old position that does not hold the moved node.
    #[error("Node {id} is not at index {index} of {parent_id}")]
    PositionMismatch {
        /// Node being moved.
        id: String,
        /// Parent the node was expected in.
        parent_id: String,
        /// Index the node was expected at.
        index: usize,
    },

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An action, event or state record could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BookmarkError {
    /// Returns `true` for errors caused by a caller/model desynchronization.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::RootFolderSelection
                | Self::ItemNotDisplayed(_)
                | Self::NotAPermutation { .. }
                | Self::UnknownNode(_)
                | Self::NotAFolder(_)
                | Self::MoveIntoSelf { .. }
                | Self::PositionMismatch { .. }
        )
    }
}

/// A specialized `Result` type for bookmark store operations.
pub type Result<T> = std::result::Result<T, BookmarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violations_are_classified() {
        assert!(BookmarkError::RootFolderSelection.is_contract_violation());
        assert!(BookmarkError::ItemNotDisplayed("3".into()).is_contract_violation());
        assert!(BookmarkError::NotAPermutation { id: "1".into() }.is_contract_violation());
        assert!(BookmarkError::MoveIntoSelf {
            id: "1".into(),
            parent_id: "2".into()
        }
        .is_contract_violation());
        assert!(!BookmarkError::Config("bad".into()).is_contract_violation());
    }

    #[test]
    fn test_error_messages() {
        let err = BookmarkError::PositionMismatch {
            id: "5".into(),
            parent_id: "1".into(),
            index: 3,
        };
        assert_eq!(err.to_string(), "Node 5 is not at index 3 of 1");
        assert_eq!(
            BookmarkError::RootFolderSelection.to_string(),
            "Cannot select root folder"
        );
    }
}
