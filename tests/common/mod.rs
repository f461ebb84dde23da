//! Shared fixtures for integration tests.
//!
//! A `Table` hands out cards from a real deck so every test keeps the
//! 106-card total intact: whatever is not dealt by hand stays in the draw
//! pile.

#![allow(dead_code)]

use monopoly_deal::cards::{build_deck, ActionKind, Card, CardId, CardKind, Color, ColorSet};
use monopoly_deal::core::{GameConfig, GameState, PlayerId, TurnPhase};
use monopoly_deal::game::Game;

pub const P1: PlayerId = PlayerId(0);
pub const P2: PlayerId = PlayerId(1);

/// Card dealer for hand-built positions.
pub struct Table {
    pool: Vec<Card>,
    state: GameState,
}

impl Table {
    pub fn new() -> Self {
        Self {
            pool: build_deck(),
            state: GameState::with_deck(Vec::new(), 42),
        }
    }

    pub fn take(&mut self, pred: impl Fn(&Card) -> bool) -> Card {
        let index = self.pool.iter().position(pred).expect("no such card left in the deck");
        self.pool.remove(index)
    }

    pub fn money(&mut self, value: u32) -> Card {
        self.take(|c| c.is_money() && c.value == value)
    }

    pub fn property(&mut self, color: Color) -> Card {
        self.take(|c| matches!(c.kind, CardKind::Property(p) if p.colors == ColorSet::Single(color)))
    }

    pub fn wildcard(&mut self, colors: ColorSet) -> Card {
        self.take(|c| matches!(c.kind, CardKind::Property(p) if p.colors == colors))
    }

    pub fn action(&mut self, kind: ActionKind) -> Card {
        self.take(|c| c.action_kind() == Some(kind))
    }

    // === Placement ===

    pub fn to_hand(&mut self, player: PlayerId, card: Card) -> CardId {
        let id = card.id;
        self.state.ledger_mut(player).hand.push(card);
        id
    }

    pub fn to_bank(&mut self, player: PlayerId, card: Card) -> CardId {
        let id = card.id;
        self.state.ledger_mut(player).add_money(card);
        id
    }

    pub fn to_board(&mut self, player: PlayerId, card: Card, color: Color) -> CardId {
        let id = card.id;
        self.state
            .ledger_mut(player)
            .add_property(card, color)
            .expect("card cannot be placed in that color");
        id
    }

    pub fn to_building(&mut self, player: PlayerId, card: Card, color: Color) -> CardId {
        let id = card.id;
        self.state
            .ledger_mut(player)
            .add_building(color, card)
            .expect("building cannot go on that set");
        id
    }

    /// Put a single-color property of `color` on `player`'s board.
    pub fn place(&mut self, player: PlayerId, color: Color) -> CardId {
        let card = self.property(color);
        self.to_board(player, card, color)
    }

    /// Put a complete set of `color` on `player`'s board.
    pub fn complete(&mut self, player: PlayerId, color: Color) -> Vec<CardId> {
        (0..color.set_size()).map(|_| self.place(player, color)).collect()
    }

    /// Finish as an acting turn for Player 1 with the rest of the deck as
    /// the draw pile.
    pub fn acting(self) -> Game {
        self.acting_with(GameConfig::default())
    }

    pub fn acting_with(self, config: GameConfig) -> Game {
        self.finish(TurnPhase::Acting, config)
    }

    /// Finish at the start of Player 1's turn, before the draw.
    pub fn awaiting_draw(self) -> Game {
        self.finish(TurnPhase::AwaitingDraw, GameConfig::default())
    }

    fn finish(self, phase: TurnPhase, config: GameConfig) -> Game {
        let mut state = self.state;
        state.piles.draw = self.pool;
        state.phase = phase;
        state.turn = 1;
        Game::from_state(config, state)
    }
}

/// Sum of every card in every zone.
pub fn total_cards(game: &Game) -> usize {
    game.state().total_cards()
}
