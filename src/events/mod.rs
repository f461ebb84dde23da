//! Events emitted by the engine.
//!
//! ## Key Types
//!
//! - `GameEvent`: Structured record of one state change, with narration
//! - `EventLog`: The game's full event history
//!
//! Presentation layers read the events returned by each command (or the
//! log) and redraw from them; the engine never renders anything itself.

pub mod event;
pub mod log;

pub use event::GameEvent;
pub use log::{EventLog, LogMark};
