//! Pending responses to targeted action cards.
//!
//! An `ActionResponse` is opened when an action card targets the opponent.
//! The player named by `target` must either accept or answer with Just Say
//! No. Each Just Say No bumps the chain depth and swaps `initiator` and
//! `target`, so the chain alternates between the two seats for as long as
//! both keep countering.
//!
//! Accepting resolves the chain: an odd depth means the last "no" stands
//! and the action is blocked; an even depth means the action goes through.

use serde::{Deserialize, Serialize};

use crate::cards::{ActionKind, CardId, Color};
use crate::core::player::PlayerId;

/// What a targeted action does once it goes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Payload {
    /// Open a payment of `amount` from the victim to the actor.
    Pay { amount: u32 },

    /// Take one property from the victim.
    StealProperty { card: CardId },

    /// Take the victim's complete set of `color`.
    StealSet { color: Color },

    /// Exchange the actor's `offered` property for the victim's `requested` one.
    Swap { offered: CardId, requested: CardId },
}

/// Outcome of accepting a response chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Run the payload.
    Execute(Payload),
    /// Cancelled by an unanswered Just Say No.
    Blocked,
}

/// A pending inter-player challenge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    /// Kind of the action card that opened the challenge.
    pub kind: ActionKind,

    /// Player who played the action card.
    pub actor: PlayerId,

    /// Player the action card was aimed at.
    pub victim: PlayerId,

    /// Player whose move is being answered.
    pub initiator: PlayerId,

    /// Player who must respond now.
    pub target: PlayerId,

    /// Number of Just Say No cards played so far.
    pub chain_depth: u32,

    /// The action card that opened the challenge.
    pub source_card: CardId,

    /// Effect to run if the action goes through.
    pub payload: Payload,
}

impl ActionResponse {
    /// Open a challenge from `actor` against `victim`.
    #[must_use]
    pub fn open(
        kind: ActionKind,
        actor: PlayerId,
        victim: PlayerId,
        source_card: CardId,
        payload: Payload,
    ) -> Self {
        Self {
            kind,
            actor,
            victim,
            initiator: actor,
            target: victim,
            chain_depth: 0,
            source_card,
            payload,
        }
    }

    /// Record a Just Say No from the current target.
    ///
    /// Returns the new chain depth.
    pub fn counter(&mut self) -> u32 {
        self.chain_depth += 1;
        std::mem::swap(&mut self.initiator, &mut self.target);
        self.chain_depth
    }

    /// Whether accepting now would cancel the action.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.chain_depth % 2 == 1
    }

    /// Resolve the chain.
    #[must_use]
    pub fn resolve(&self) -> Resolution {
        if self.is_blocked() {
            Resolution::Blocked
        } else {
            Resolution::Execute(self.payload)
        }
    }
}
