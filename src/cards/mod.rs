//! Card system: colors, card definitions and the physical deck.
//!
//! ## Key Types
//!
//! - `Color`: Property color group with set size and rent schedule
//! - `ColorSet`: Colors a property or rent card can count as
//! - `CardId`: Stable identity of one physical card
//! - `Card`: A physical card (money, property or action)
//!
//! ## Wildcards
//!
//! Two-way wildcards default to their first color and can be moved between
//! their two colors. Full wildcards have no color until placed and can
//! never be surrendered as payment.

pub mod catalog;
pub mod color;
pub mod definition;

pub use catalog::{build_deck, CATALOG_SIZE};
pub use color::{Color, ColorSet, HOTEL_RENT_BONUS, HOUSE_RENT_BONUS};
pub use definition::{ActionKind, Card, CardId, CardKind, PropertyCard};
