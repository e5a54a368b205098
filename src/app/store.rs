//! State container and dispatch.
//!
//! The [`Store`] owns the current [`PageState`] and is its only mutation path.
//! It is constructed explicitly at startup (see [`crate::initialize`]) and
//! disposed with [`Store::into_state`]; there is no global instance.
//!
//! `dispatch` takes `&mut self`, so an action cannot be dispatched while
//! another one is being applied.

use super::actions::Action;
use super::reducer::{reduce_with, ReduceOptions};
use super::state::PageState;
use crate::domain::Result;
use crate::Config;
use std::collections::VecDeque;

/// Owner of the page state.
#[derive(Debug, Clone)]
pub struct Store {
    state: PageState,
    options: ReduceOptions,
    history: VecDeque<Action>,
    history_limit: usize,
}

impl Store {
    /// Creates a store over `state`, taking reducer options and the history
    /// limit from `config`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bookmark_store::{actions, Config, PageState, Store};
    ///
    /// let mut store = Store::new(PageState::default(), &Config::default());
    /// store.dispatch(actions::change_folder_open("0", true))?;
    /// assert!(store.state().is_folder_open("0"));
    /// assert_eq!(store.history().count(), 1);
    /// # Ok::<(), bookmark_store::BookmarkError>(())
    /// ```
    #[must_use]
    pub fn new(state: PageState, config: &Config) -> Self {
        Self {
            state,
            options: ReduceOptions {
                purge_stale_on_refresh: config.purge_stale_on_refresh,
            },
            history: VecDeque::new(),
            history_limit: config.history_limit,
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &PageState {
        &self.state
    }

    /// Applies `action` and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns the reducer's contract-violation error. The state is left
    /// unchanged and the action is not recorded.
    pub fn dispatch(&mut self, action: Action) -> Result<&PageState> {
        let _span = tracing::debug_span!("dispatch", action = action.name()).entered();

        let next = reduce_with(&self.state, &action, self.options).map_err(|e| {
            tracing::warn!(action = action.name(), error = %e, "action rejected");
            e
        })?;

        self.state = next;
        self.record(action);

        Ok(&self.state)
    }

    /// Applied actions, oldest first. Bounded by `Config::history_limit`.
    pub fn history(&self) -> impl Iterator<Item = &Action> {
        self.history.iter()
    }

    /// Replays `actions` on top of `initial`, stopping at the first rejected
    /// action.
    ///
    /// # Errors
    ///
    /// Returns the first reducer error encountered.
    pub fn replay<'a>(
        initial: PageState,
        actions: impl IntoIterator<Item = &'a Action>,
        options: ReduceOptions,
    ) -> Result<PageState> {
        let _span = tracing::debug_span!("replay").entered();

        actions
            .into_iter()
            .try_fold(initial, |state, action| reduce_with(&state, action, options))
    }

    /// Consumes the store, returning the final state.
    #[must_use]
    pub fn into_state(self) -> PageState {
        tracing::debug!(history_len = self.history.len(), "store disposed");
        self.state
    }

    fn record(&mut self, action: Action) {
        if self.history_limit == 0 {
            return;
        }
        if self.history.len() == self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(action);
    }
}
