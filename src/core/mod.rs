//! Core engine types: players, RNG, configuration, commands, errors, state.
//!
//! These are the building blocks every other module works on. `GameState`
//! is the single mutable root; `Command` and `ActionError` are the input
//! and rejection vocabulary of the engine.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod state;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::GameConfig;
pub use error::ActionError;
pub use action::{ActionRecord, AssetRef, Command, PlayChoice};
pub use state::{GameState, TurnPhase};
