//! Command representation: what a player asks the engine to do.
//!
//! A `Command` is the verb; card plays carry a `PlayChoice` that names the
//! sub-effect (bank it, place it, charge rent, steal, build). Payment
//! selections name assets through `AssetRef`, which refers to cards by
//! identity rather than by position.
//!
//! Every accepted command is recorded in the game history as an
//! `ActionRecord`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{CardId, Color};

/// An asset a payer can surrender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetRef {
    /// A card in the money pile.
    Money(CardId),
    /// A placed property card.
    Property(CardId),
    /// A House or Hotel sitting on a property set.
    Building(CardId),
}

impl AssetRef {
    /// The card this reference points at.
    #[must_use]
    pub const fn card(self) -> CardId {
        match self {
            AssetRef::Money(id) | AssetRef::Property(id) | AssetRef::Building(id) => id,
        }
    }
}

/// How a card from hand is played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayChoice {
    /// The card's natural play: bank money, place a property in its
    /// default color, or use an untargeted action (Pass Go, Birthday,
    /// Debt Collector).
    Auto,

    /// Bank an action card for its face value.
    AsMoney,

    /// Place a property (or wildcard) in a specific color group.
    Color(Color),

    /// Charge rent for `color`, optionally doubled by a Double The Rent
    /// card from hand.
    Rent {
        color: Color,
        double: Option<CardId>,
    },

    /// Steal one property.
    SlyDeal { target: CardId },

    /// Swap one of our properties for one of the opponent's.
    ForcedDeal { offered: CardId, requested: CardId },

    /// Steal a complete set.
    DealBreaker { color: Color },

    /// Put a House or Hotel on one of our complete sets.
    Build { color: Color },
}

/// A command issued by a player.
///
/// ## Example
///
/// ```
/// use monopoly_deal::cards::CardId;
/// use monopoly_deal::core::{Command, PlayChoice};
///
/// let bank = Command::PlayCard { card: CardId::new(3), choice: PlayChoice::AsMoney };
/// assert!(bank.is_card_play());
/// assert!(!Command::EndTurn.is_card_play());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    StartGame,
    Draw,
    PlayCard { card: CardId, choice: PlayChoice },
    Discard { card: CardId },
    EndTurn,
    JustSayNo,
    Accept,
    SelectPaymentAsset { asset: AssetRef },
    ConfirmPayment,
    PayAllAvailable,
    CancelPayment,
    SwitchWildcard { card: CardId, color: Color },
}

impl Command {
    /// Whether this command consumes a play from the turn budget.
    #[must_use]
    pub const fn is_card_play(&self) -> bool {
        matches!(self, Command::PlayCard { .. })
    }
}

/// Record of an accepted command (for history and replay).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who issued the command.
    pub player: PlayerId,

    /// The command.
    pub command: Command,

    /// Turn number when the command was accepted.
    pub turn: u32,

    /// Position in the game's command sequence.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, command: Command, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            command,
            turn,
            sequence,
        }
    }
}
