//! # monopoly-deal
//!
//! A rules engine for two-player Monopoly Deal.
//!
//! ## Design Principles
//!
//! 1. **Commands In, Events Out**: Every move is a `Command`. Applying it
//!    returns the `GameEvent`s it produced or an `ActionError` saying why
//!    it was rejected. Presentation layers never touch the state directly.
//!
//! 2. **Atomic Transitions**: Commands are validated in full before the
//!    first mutation. A rejected command leaves the state untouched.
//!
//! 3. **Explicit Waiting**: A pending Just Say No decision or payment is a
//!    value in `GameState` (`ActionResponse`, `PaymentRequest`), and the
//!    state machine only accepts commands from the player it is waiting on.
//!
//! ## Architecture
//!
//! - **Ledgers**: Each card lives in exactly one place (draw pile, discard
//!   pile, last-action slot, a hand, a money pile or a property set), so
//!   the card count is conserved by construction.
//!
//! - **Persistent History**: Event log and command history use `im-rs`
//!   vectors, so cloning a state to probe a command stays cheap.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, commands, errors, state
//! - `cards`: Colors, card definitions and the 106-card deck
//! - `zones`: Piles and per-player ledgers
//! - `stack`: Just Say No response chains
//! - `effects`: Target checks and payload execution
//! - `payment`: Payment requests and settlement
//! - `events`: Emitted events and the event log
//! - `rules`: `RulesEngine` trait and `DealRules`
//! - `game`: `Game` handle and `GameBuilder`

pub mod core;
pub mod cards;
pub mod zones;
pub mod stack;
pub mod effects;
pub mod payment;
pub mod events;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ActionError, ActionRecord, AssetRef, Command, GameConfig, GameRng, GameState, PlayChoice,
    PlayerId, PlayerMap, TurnPhase, PLAYER_COUNT,
};

pub use crate::cards::{build_deck, ActionKind, Card, CardId, CardKind, Color, ColorSet, CATALOG_SIZE};

pub use crate::zones::{Piles, PlayerLedger, PropertySet};

pub use crate::stack::{ActionResponse, Payload, Resolution};

pub use crate::payment::{PaymentRequest, PaymentStatus, Settlement};

pub use crate::events::{EventLog, GameEvent};

pub use crate::rules::{DealRules, RulesEngine};

pub use crate::game::{CommandResult, Game, GameBuilder};
