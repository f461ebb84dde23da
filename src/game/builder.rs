//! Builder for `Game`.

use tracing::debug;

use crate::cards::Card;
use crate::core::config::GameConfig;
use crate::core::rng::GameRng;
use crate::core::state::GameState;

use super::Game;

/// Builder for creating a `Game`.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    seed: Option<u64>,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the shuffle seed. Without one, a random seed is drawn.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom draw pile instead of the standard 106 cards.
    pub fn deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Build an undealt game.
    pub fn build(self) -> Game {
        let seed = self.seed.unwrap_or_else(|| GameRng::from_random_seed().seed());
        debug!(seed, custom_deck = self.deck.is_some(), "building game");

        let state = match self.deck {
            Some(deck) => GameState::with_deck(deck, seed),
            None => GameState::new(seed),
        };
        Game::from_state(self.config, state)
    }
}
