//! Response chains for targeted actions.
//!
//! Only one `ActionResponse` can be pending at a time. While it is, the
//! acting player's turn is frozen: no plays, no end of turn. The chain is
//! driven by two commands from whoever is the current target:
//! - **Just Say No**: consume a card from hand, swap roles, depth + 1
//! - **Accept**: resolve by parity of the depth
//!
//! ## Example
//!
//! ```
//! use monopoly_deal::cards::{ActionKind, CardId};
//! use monopoly_deal::core::PlayerId;
//! use monopoly_deal::stack::{ActionResponse, Payload, Resolution};
//!
//! let mut response = ActionResponse::open(
//!     ActionKind::SlyDeal,
//!     PlayerId::new(0),
//!     PlayerId::new(1),
//!     CardId::new(70),
//!     Payload::StealProperty { card: CardId::new(30) },
//! );
//!
//! response.counter(); // target says no
//! assert_eq!(response.resolve(), Resolution::Blocked);
//!
//! response.counter(); // initiator counters
//! assert!(matches!(response.resolve(), Resolution::Execute(_)));
//! ```

mod response;

pub use response::{ActionResponse, Payload, Resolution};
