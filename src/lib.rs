//! bookmark-store: state management for a hierarchical, selectable, searchable
//! bookmark tree editor.
//!
//! The crate provides:
//! - Pure action factories describing every state transition of a bookmark page
//! - A reducer applying actions to an immutable page state
//! - Range selection over the displayed list and cascading removal of subtrees
//! - Search state projection, plus a local fuzzy search for hosts without a
//!   search service
//! - A bridge turning backing-service notifications into dispatched actions

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Backing bookmarks service (external)               │  ← Source of truth
//! └─────────────────────────────────────────────────────┘
//!                        │ BookmarkEvent
//! ┌─────────────────────────────────────────────────────┐
//! │  Service bridge (service/)                          │  ← Event → Action
//! └─────────────────────────────────────────────────────┘
//!                        │ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Action factory                                   │
//! │  - Store::dispatch → reduce                         │
//! │  - Selection engine, search projection              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Node model and normalization                     │
//! │  - Descendant resolution                            │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Actions, reducer, state and store
//! - [`domain`]: Node model, tree traversal, errors
//! - [`service`]: Backing-service event translation
//! - [`observability`]: Logging setup
//!
//! # Configuration
//!
//! ```toml
//! trace_level = "debug"
//! trace_file = "/var/log/bookmarks/store.log"
//! history_limit = 100
//! purge_stale_on_refresh = true
//! ```
//!
//! # Examples
//!
//! ```rust
//! use bookmark_store::{actions, initialize, Config, TreeNode};
//!
//! let mut store = initialize(&Config::default());
//!
//! let folder = TreeNode::folder("1", "Bookmarks bar", vec![]).with_position("0", 0);
//! store.dispatch(actions::create_bookmark("1", &folder))?;
//! store.dispatch(actions::select_folder("1")?)?;
//!
//! let link = TreeNode::bookmark("2", "Rust", "https://www.rust-lang.org").with_position("1", 0);
//! store.dispatch(actions::create_bookmark("2", &link))?;
//!
//! let click = actions::select_item("2", false, false, store.state())?;
//! store.dispatch(click)?;
//! assert!(store.state().selection.contains("2"));
//! # Ok::<(), bookmark_store::BookmarkError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Actions Capture Their Context
//!
//! Actions carry everything the reducer needs (old positions, descendant sets,
//! computed range selections), so a recorded action sequence replays to the
//! same state.
//!
//! ## Contract Violations Are Errors
//!
//! Selecting the root, clicking an item that is not displayed, or reordering
//! with a list that is not a permutation return a [`BookmarkError`] instead of
//! being ignored. A rejected dispatch leaves the store untouched.

pub mod app;
pub mod domain;
pub mod observability;
pub mod service;

pub use app::{
    actions, reduce, reduce_with, Action, ChangeInfo, PageState, ReduceOptions, SearchState,
    SelectionState, Store,
};
pub use domain::{BookmarkError, BookmarkNode, NodeMap, Result, TreeNode, ROOT_NODE_ID};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Store configuration.
///
/// Can be built from a string map (host-provided settings) or a TOML file.
/// Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing level filter, e.g. `"debug"` or `"bookmark_store=trace"`.
    ///
    /// Overridden by `RUST_LOG`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Logs go to stderr when unset.
    pub trace_file: Option<PathBuf>,

    /// Number of applied actions the store keeps for replay. `0` disables
    /// the history. Default: 100
    pub history_limit: usize,

    /// Whether `refresh-nodes` drops selection, open-folder, search-result and
    /// selected-folder entries for nodes that no longer exist. Default: `true`
    pub purge_stale_on_refresh: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_level: None,
            trace_file: None,
            history_limit: 100,
            purge_stale_on_refresh: true,
        }
    }
}

impl Config {
    /// Parses configuration from a host-provided string map.
    ///
    /// # Parsing Rules
    ///
    /// - `trace_level`, `trace_file`: taken as-is, empty values ignored
    /// - `history_limit`: `usize`, falls back to 100 on parse error
    /// - `purge_stale_on_refresh`: `true`/`false`, falls back to `true`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookmark_store::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("history_limit".to_string(), "10".to_string());
    /// map.insert("purge_stale_on_refresh".to_string(), "false".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.history_limit, 10);
    /// assert!(!config.purge_stale_on_refresh);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let history_limit = config
            .get("history_limit")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.history_limit);

        let purge_stale_on_refresh = config
            .get("purge_stale_on_refresh")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(defaults.purge_stale_on_refresh);

        Self {
            trace_level: non_empty("trace_level"),
            trace_file: non_empty("trace_file").map(PathBuf::from),
            history_limit,
            purge_stale_on_refresh,
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`BookmarkError::Config`] if the text is not valid TOML or a
    /// value has the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| BookmarkError::Config(format!("failed to parse config TOML: {e}")))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BookmarkError::Io`] if the file cannot be read and
    /// [`BookmarkError::Config`] if it cannot be parsed.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Creates the store for a new page session.
///
/// The store starts with only the root folder; the host populates it with a
/// `refresh-nodes` action once the backing service delivers the tree.
#[must_use]
pub fn initialize(config: &Config) -> Store {
    tracing::debug!(
        history_limit = config.history_limit,
        purge_stale_on_refresh = config.purge_stale_on_refresh,
        "initializing bookmark store"
    );

    Store::new(PageState::default(), config)
}
