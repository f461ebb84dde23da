//! Append-only event history.
//!
//! Backed by `im::Vector` so that cloning a `GameState` (for legal-action
//! probing or snapshots) shares the history instead of copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::event::GameEvent;

/// Position in an `EventLog`, used to slice off the events of one command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogMark(usize);

/// Ordered history of every event in a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vector<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    /// Current end of the log.
    #[must_use]
    pub fn mark(&self) -> LogMark {
        LogMark(self.events.len())
    }

    /// Events appended after `mark`.
    #[must_use]
    pub fn since(&self, mark: LogMark) -> Vec<GameEvent> {
        self.events.iter().skip(mark.0).cloned().collect()
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check whether no events have been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over events in order.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    /// Most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }
}
