//! Game configuration.
//!
//! `GameConfig` collects the numeric rules of a game: hand sizes, draw
//! counts, the per-turn play budget and the fixed amounts demanded by
//! payment cards. Defaults match the physical card game.
//!
//! Configs deserialize with every field optional, so a presentation layer
//! can override a single rule:
//!
//! ```
//! use monopoly_deal::core::GameConfig;
//!
//! let config = GameConfig::default().with_hand_limit(9);
//! assert_eq!(config.hand_limit, 9);
//! assert_eq!(config.plays_per_turn, 3);
//! ```

use serde::{Deserialize, Serialize};

/// Numeric rules for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards dealt to each player at the start.
    pub starting_hand: usize,

    /// Cards drawn at the start of a turn.
    pub turn_draw: usize,

    /// Cards drawn at the start of a turn when the hand is empty.
    pub empty_hand_draw: usize,

    /// Card plays allowed per turn.
    pub plays_per_turn: u32,

    /// Maximum hand size once a turn ends.
    pub hand_limit: usize,

    /// Complete sets needed to win.
    pub sets_to_win: usize,

    /// Cards drawn by Pass Go.
    pub pass_go_draw: usize,

    /// Amount demanded by Debt Collector ($M).
    pub debt_collector_amount: u32,

    /// Amount demanded by It's My Birthday ($M).
    pub birthday_amount: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_hand: 5,
            turn_draw: 2,
            empty_hand_draw: 5,
            plays_per_turn: 3,
            hand_limit: 7,
            sets_to_win: 3,
            pass_go_draw: 2,
            debt_collector_amount: 5,
            birthday_amount: 2,
        }
    }
}

impl GameConfig {
    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_hand(mut self, cards: usize) -> Self {
        self.starting_hand = cards;
        self
    }

    /// Set the hand limit enforced at end of turn.
    #[must_use]
    pub fn with_hand_limit(mut self, cards: usize) -> Self {
        self.hand_limit = cards;
        self
    }

    /// Set the number of complete sets needed to win.
    #[must_use]
    pub fn with_sets_to_win(mut self, sets: usize) -> Self {
        self.sets_to_win = sets;
        self
    }

    /// Set the per-turn play budget.
    #[must_use]
    pub fn with_plays_per_turn(mut self, plays: u32) -> Self {
        self.plays_per_turn = plays;
        self
    }

    /// Cards drawn at the start of a turn for a hand of `hand_len` cards.
    #[must_use]
    pub fn draw_count(&self, hand_len: usize) -> usize {
        if hand_len == 0 {
            self.empty_hand_draw
        } else {
            self.turn_draw
        }
    }
}
