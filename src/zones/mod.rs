//! Where cards live.
//!
//! ## Key Types
//!
//! - `Piles`: Shared draw pile, discard pile and last-action slot
//! - `PlayerLedger`: One player's hand, money pile and property sets
//! - `PropertySet`: Cards of one color plus any House/Hotel
//!
//! Every card is owned by exactly one of these containers at a time, so
//! the card count over all of them is fixed for the life of a game.

pub mod ledger;
pub mod piles;

pub use ledger::{transfer_asset, PlayerLedger, PropertySet};
pub use piles::{DrawOutcome, Piles};
