//! Rules engine trait.
//!
//! A `RulesEngine` defines:
//! - Which commands a player might issue (`candidate_commands`)
//! - How a command changes the state, or why it is rejected (`apply`)
//! - Who has won
//!
//! `legal_actions` is derived from the first two: a candidate is legal if
//! applying it to a copy of the state succeeds.

use crate::core::action::Command;
use crate::core::config::GameConfig;
use crate::core::error::ActionError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::events::GameEvent;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `candidate_commands`: May over-approximate; never needs to be exact
/// - `apply`: Must leave `state` untouched when it returns `Err`
/// - `apply`: Must be deterministic given the state (including its RNG)
/// - `winner`: Return `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Commands worth trying for `player` in this state.
    ///
    /// Returns empty if the player has nothing to do.
    fn candidate_commands(&self, state: &GameState, player: PlayerId) -> Vec<Command>;

    /// Apply a command, returning the events it produced.
    fn apply(
        &self,
        state: &mut GameState,
        player: PlayerId,
        command: Command,
    ) -> Result<Vec<GameEvent>, ActionError>;

    /// The winner, if the game is over.
    fn winner(&self, state: &GameState) -> Option<PlayerId>;

    // === Convenience Methods ===

    /// Enumerate every fully-specified command `player` could issue now.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Command> {
        self.candidate_commands(state, player)
            .into_iter()
            .filter(|&command| self.is_legal(state, player, command))
            .collect()
    }

    /// Check whether `command` would be accepted, without changing `state`.
    fn is_legal(&self, state: &GameState, player: PlayerId, command: Command) -> bool {
        let mut probe = state.clone();
        self.apply(&mut probe, player, command).is_ok()
    }
}
