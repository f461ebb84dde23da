//! Effects of action cards.
//!
//! - `targeting`: Checks that an action's target is legal
//! - `EffectResolver`: Runs the payload of an accepted action
//!
//! Single-property effects (Sly Deal, Forced Deal) never touch full
//! wildcards or cards in a complete set; Deal Breaker only takes complete
//! sets and leaves their full wildcards behind. The same checks guard both play time and execution time.

pub mod targeting;
mod resolver;

pub use resolver::EffectResolver;
pub use targeting::{
    check_build, check_complete_set, check_rent, check_set_steal, check_single_property,
    single_property_targets,
};
