//! Payment settlement.
//!
//! Rent, Debt Collector and It's My Birthday end in a `PaymentRequest`:
//! the payer picks assets until the capped amount is covered (or gives up
//! short), then confirms. Settlement moves the chosen cards through the
//! ledgers in one step.

mod request;

pub use request::{PaymentRequest, PaymentStatus, Settlement};
