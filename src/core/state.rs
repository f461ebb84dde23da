//! Game state: the single mutable root of a game.
//!
//! ## GameState
//!
//! Everything the rules read or change lives here:
//! - Both players' ledgers and the shared piles
//! - Turn progression (current player, phase, plays used, turn number)
//! - At most one pending `ActionResponse` and one pending `PaymentRequest`
//! - The winner, once decided
//! - RNG, event log and command history
//!
//! The history and event log use `im` persistent vectors, so cloning a
//! state to probe a command is cheap on that side.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, Command};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{build_deck, Card};
use crate::events::{EventLog, GameEvent};
use crate::payment::PaymentRequest;
use crate::stack::ActionResponse;
use crate::zones::{Piles, PlayerLedger};

/// Turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Cards not dealt yet.
    AwaitingStart,
    /// The current player must draw.
    AwaitingDraw,
    /// The current player may play cards or end the turn.
    Acting,
    /// The current player must discard down to the hand limit.
    AwaitingDiscard { remaining: usize },
    /// A player has won.
    Over,
}

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Per-player holdings.
    pub players: PlayerMap<PlayerLedger>,

    /// Draw pile, discard pile and last-action slot.
    pub piles: Piles,

    /// Player whose turn it is.
    pub current: PlayerId,

    /// Current phase of the turn.
    pub phase: TurnPhase,

    /// Card plays used this turn.
    pub cards_played: u32,

    /// Turn number (0 before the game starts, then from 1).
    pub turn: u32,

    /// Pending challenge from a targeted action.
    pub response: Option<ActionResponse>,

    /// Pending payment.
    pub payment: Option<PaymentRequest>,

    /// Winner, set once.
    pub winner: Option<PlayerId>,

    /// Shuffling RNG.
    pub rng: GameRng,

    /// Every event so far.
    pub events: EventLog,

    /// Every accepted command so far.
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Create an undealt game with the full catalog as its draw pile.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_deck(build_deck(), seed)
    }

    /// Create an undealt game with a custom draw pile.
    ///
    /// The pile is used in the given order until the game starts.
    #[must_use]
    pub fn with_deck(deck: Vec<Card>, seed: u64) -> Self {
        Self {
            players: PlayerMap::with_default(),
            piles: Piles::new(deck),
            current: PlayerId::new(0),
            phase: TurnPhase::AwaitingStart,
            cards_played: 0,
            turn: 0,
            response: None,
            payment: None,
            winner: None,
            rng: GameRng::new(seed),
            events: EventLog::new(),
            history: Vector::new(),
        }
    }

    /// A player's ledger.
    #[must_use]
    pub fn ledger(&self, player: PlayerId) -> &PlayerLedger {
        &self.players[player]
    }

    /// A player's ledger, mutably.
    pub fn ledger_mut(&mut self, player: PlayerId) -> &mut PlayerLedger {
        &mut self.players[player]
    }

    /// Whether a response or payment is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.response.is_some() || self.payment.is_some()
    }

    /// Whether the game has been won.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::Over
    }

    /// Who must act next: the responder, then the payer, then the
    /// current player. `None` before the start and after the end.
    #[must_use]
    pub fn awaiting_player(&self) -> Option<PlayerId> {
        match self.phase {
            TurnPhase::AwaitingStart | TurnPhase::Over => None,
            _ => Some(
                self.response
                    .as_ref()
                    .map(|r| r.target)
                    .or_else(|| self.payment.as_ref().map(|p| p.payer))
                    .unwrap_or(self.current),
            ),
        }
    }

    /// Cards in every pile and ledger.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.len() + self.players.iter().map(|(_, l)| l.total_cards()).sum::<usize>()
    }

    /// Append an event to the log.
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Record an accepted command issued during `turn`.
    pub fn record(&mut self, player: PlayerId, command: Command, turn: u32) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(player, command, turn, sequence));
    }
}
