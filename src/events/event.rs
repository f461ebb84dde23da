//! Game events.
//!
//! Every accepted command produces one or more events describing what
//! changed. Events carry structured parameters; `Display` renders the
//! narration line a history panel would show.
//!
//! ```
//! use monopoly_deal::core::PlayerId;
//! use monopoly_deal::events::GameEvent;
//!
//! let event = GameEvent::PaymentSettled {
//!     payer: PlayerId::new(1),
//!     payee: PlayerId::new(0),
//!     amount: 5,
//!     cards: 2,
//! };
//! assert_eq!(event.to_string(), "Player 2 paid $5M to Player 1");
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{ActionKind, CardId, Color};
use crate::core::player::PlayerId;

/// Something that happened in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    GameStarted {
        first: PlayerId,
        seed: u64,
    },
    TurnStarted {
        player: PlayerId,
        turn: u32,
    },
    CardsDrawn {
        player: PlayerId,
        count: usize,
    },
    DeckReshuffled {
        cards: usize,
    },
    MoneyBanked {
        player: PlayerId,
        card: CardId,
        name: String,
        value: u32,
    },
    PropertyPlayed {
        player: PlayerId,
        card: CardId,
        name: String,
        color: Color,
    },
    ActionPlayed {
        player: PlayerId,
        card: CardId,
        kind: ActionKind,
    },
    RentCharged {
        player: PlayerId,
        target: PlayerId,
        color: Color,
        amount: u32,
        doubled: bool,
    },
    JustSayNoPlayed {
        player: PlayerId,
        card: CardId,
        depth: u32,
    },
    ActionAccepted {
        player: PlayerId,
        kind: ActionKind,
    },
    ActionBlocked {
        initiator: PlayerId,
        kind: ActionKind,
    },
    EffectAborted {
        initiator: PlayerId,
        kind: ActionKind,
    },
    ActionCancelled {
        initiator: PlayerId,
        kind: ActionKind,
    },
    PropertyStolen {
        thief: PlayerId,
        victim: PlayerId,
        card: CardId,
        name: String,
    },
    SetStolen {
        thief: PlayerId,
        victim: PlayerId,
        color: Color,
    },
    PropertiesSwapped {
        player: PlayerId,
        opponent: PlayerId,
        given: CardId,
        taken: CardId,
    },
    PaymentRequested {
        payer: PlayerId,
        payee: PlayerId,
        requested: u32,
        capped: u32,
    },
    PaymentSelectionChanged {
        payer: PlayerId,
        selected: u32,
        capped: u32,
    },
    PaymentSettled {
        payer: PlayerId,
        payee: PlayerId,
        amount: u32,
        cards: usize,
    },
    NoPaymentPossible {
        payer: PlayerId,
        payee: PlayerId,
    },
    PaymentCancelled {
        payer: PlayerId,
        payee: PlayerId,
    },
    WildcardSwitched {
        player: PlayerId,
        card: CardId,
        from: Color,
        to: Color,
    },
    BuildingAdded {
        player: PlayerId,
        card: CardId,
        kind: ActionKind,
        color: Color,
    },
    SetCompleted {
        player: PlayerId,
        color: Color,
    },
    DiscardRequired {
        player: PlayerId,
        count: usize,
    },
    CardDiscarded {
        player: PlayerId,
        card: CardId,
        name: String,
    },
    TurnEnded {
        player: PlayerId,
    },
    GameWon {
        player: PlayerId,
        sets: usize,
    },
}

impl GameEvent {
    /// Whether this event ends the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::GameWon { .. })
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { first, .. } => write!(f, "Game started, {first} goes first"),
            GameEvent::TurnStarted { player, turn } => write!(f, "Turn {turn}: {player}'s turn"),
            GameEvent::CardsDrawn { player, count } => write!(f, "{player} drew {count} cards"),
            GameEvent::DeckReshuffled { cards } => {
                write!(f, "Discard pile reshuffled into the deck ({cards} cards)")
            }
            GameEvent::MoneyBanked { player, name, value, .. } => {
                write!(f, "{player} banked {name} for ${value}M")
            }
            GameEvent::PropertyPlayed { player, name, color, .. } => {
                write!(f, "{player} played {name} as {color}")
            }
            GameEvent::ActionPlayed { player, kind, .. } => {
                write!(f, "{player} played {}", kind.name())
            }
            GameEvent::RentCharged { player, target, color, amount, doubled } => {
                let doubled = if *doubled { " (doubled)" } else { "" };
                write!(f, "{player} charged {target} ${amount}M rent for {color}{doubled}")
            }
            GameEvent::JustSayNoPlayed { player, .. } => write!(f, "{player} said Just Say No!"),
            GameEvent::ActionAccepted { player, kind } => {
                write!(f, "{player} accepted {}", kind.name())
            }
            GameEvent::ActionBlocked { initiator, kind } => {
                write!(f, "{initiator}'s {} was blocked", kind.name())
            }
            GameEvent::EffectAborted { initiator, kind } => {
                write!(f, "{initiator}'s {} had no target left", kind.name())
            }
            GameEvent::ActionCancelled { initiator, kind } => {
                write!(f, "{initiator}'s {} was cancelled", kind.name())
            }
            GameEvent::PropertyStolen { thief, victim, name, .. } => {
                write!(f, "{thief} took {name} from {victim}")
            }
            GameEvent::SetStolen { thief, victim, color } => {
                write!(f, "{thief} took the {color} set from {victim}")
            }
            GameEvent::PropertiesSwapped { player, opponent, .. } => {
                write!(f, "{player} swapped a property with {opponent}")
            }
            GameEvent::PaymentRequested { payer, payee, requested, capped } => {
                if requested == capped {
                    write!(f, "{payee} requested ${requested}M from {payer}")
                } else {
                    write!(
                        f,
                        "{payee} requested ${requested}M from {payer} (can pay ${capped}M)"
                    )
                }
            }
            GameEvent::PaymentSelectionChanged { payer, selected, capped } => {
                write!(f, "{payer} selected ${selected}M of ${capped}M")
            }
            GameEvent::PaymentSettled { payer, payee, amount, .. } => {
                write!(f, "{payer} paid ${amount}M to {payee}")
            }
            GameEvent::NoPaymentPossible { payer, .. } => {
                write!(f, "{payer} has nothing to pay with, no payment possible")
            }
            GameEvent::PaymentCancelled { payer, payee } => {
                write!(f, "Payment from {payer} to {payee} cancelled")
            }
            GameEvent::WildcardSwitched { player, from, to, .. } => {
                write!(f, "{player} moved a wildcard from {from} to {to}")
            }
            GameEvent::BuildingAdded { player, kind, color, .. } => {
                write!(f, "{player} built a {} on {color}", kind.name())
            }
            GameEvent::SetCompleted { player, color } => {
                write!(f, "{player} completed the {color} set")
            }
            GameEvent::DiscardRequired { player, count } => {
                write!(f, "{player} must discard {count} cards")
            }
            GameEvent::CardDiscarded { player, name, .. } => {
                write!(f, "{player} discarded {name}")
            }
            GameEvent::TurnEnded { player } => write!(f, "{player} ended their turn"),
            GameEvent::GameWon { player, sets } => {
                write!(f, "{player} wins with {sets} complete sets!")
            }
        }
    }
}
