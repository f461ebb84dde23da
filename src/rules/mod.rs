//! Rules for a two-player Monopoly Deal game.
//!
//! `RulesEngine` is the seam between a driver (console, test harness,
//! random playout) and the rules. `DealRules` is the implementation:
//! - `turn`: deal, draw, end of turn and discards
//! - `play`: card plays from hand
//! - `respond`: Just Say No chains, payments and wildcard moves
//! - `legal`: candidate command enumeration

pub mod engine;
mod deal;
mod legal;
mod play;
mod respond;
mod turn;

pub use deal::DealRules;
pub use engine::RulesEngine;
