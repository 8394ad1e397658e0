//! Bounded undo stack of game snapshots.

use std::collections::VecDeque;

use crate::core::config::DEFAULT_HISTORY_LIMIT;
use crate::core::state::GameState;

/// Stack of prior states, most recent last.
///
/// Holds at most `limit` snapshots; recording past the limit drops the
/// oldest. Snapshots are `im`-backed, so each one shares most of its
/// memory with its neighbours.
///
/// ```
/// use deckforge::core::GameState;
/// use deckforge::history::HistoryManager;
///
/// let mut history = HistoryManager::new(2);
/// history.record(GameState::new());
/// assert_eq!(history.len(), 1);
/// assert!(history.undo().is_some());
/// assert!(history.undo().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct HistoryManager {
    snapshots: VecDeque<GameState>,
    limit: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl HistoryManager {
    /// A stack holding up to `limit` snapshots. A zero limit is raised to 1.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            snapshots: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Push a snapshot, evicting the oldest beyond the limit.
    pub fn record(&mut self, snapshot: GameState) {
        if self.snapshots.len() == self.limit {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Pop the most recent snapshot.
    pub fn undo(&mut self) -> Option<GameState> {
        self.snapshots.pop_back()
    }

    /// The snapshot `undo` would return, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&GameState> {
        self.snapshots.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
