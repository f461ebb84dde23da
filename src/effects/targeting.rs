//! Target validation for action cards.
//!
//! These checks run when a card is played (to reject it with a reason)
//! and again when an accepted action executes (to abort quietly if the
//! target has gone away in the meantime).

use crate::cards::{ActionKind, CardId, Color};
use crate::core::error::ActionError;
use crate::zones::PlayerLedger;

/// Check that `card` can be taken on its own from `owner`.
///
/// Single properties can be taken unless they are full wildcards or part
/// of a complete set. Returns the color group the card sits in.
pub fn check_single_property(owner: &PlayerLedger, card: CardId) -> Result<Color, ActionError> {
    let property = owner.property(card).ok_or(ActionError::NoValidTarget)?;
    if property.is_full_wildcard() {
        return Err(ActionError::NoValidTarget);
    }
    let color = owner.property_color(card).ok_or(ActionError::NoValidTarget)?;
    if owner.is_complete(color) {
        return Err(ActionError::TargetInCompleteSet);
    }
    Ok(color)
}

/// Check that `owner` holds a complete set of `color`.
pub fn check_complete_set(owner: &PlayerLedger, color: Color) -> Result<(), ActionError> {
    if owner.is_complete(color) {
        Ok(())
    } else {
        Err(ActionError::SetNotComplete(color))
    }
}

/// Check that `owner`'s complete `color` set has something to seize.
pub fn check_set_steal(owner: &PlayerLedger, color: Color) -> Result<(), ActionError> {
    check_complete_set(owner, color)?;
    if owner.has_seizable(color) {
        Ok(())
    } else {
        Err(ActionError::NoValidTarget)
    }
}

/// Check that a rent card of `kind` can charge for `color`.
pub fn check_rent(owner: &PlayerLedger, kind: ActionKind, color: Color) -> Result<(), ActionError> {
    let colors = kind.rent_colors().ok_or(ActionError::InvalidChoice)?;
    if !colors.contains(color) {
        return Err(ActionError::InvalidColor(color));
    }
    if owner.property_count(color) == 0 {
        return Err(ActionError::NoMatchingProperties(color));
    }
    Ok(())
}

/// Check that a House or Hotel can go on `owner`'s `color` set.
pub fn check_build(owner: &PlayerLedger, kind: ActionKind, color: Color) -> Result<(), ActionError> {
    if !color.accepts_buildings() {
        return Err(ActionError::BuildingNotAllowed(color));
    }
    check_complete_set(owner, color)?;

    let set = owner
        .properties
        .get(&color)
        .ok_or(ActionError::SetNotComplete(color))?;
    let allowed = match kind {
        ActionKind::House => set.house.is_none(),
        ActionKind::Hotel => set.house.is_some() && set.hotel.is_none(),
        _ => return Err(ActionError::InvalidChoice),
    };
    if allowed {
        Ok(())
    } else {
        Err(ActionError::BuildingNotAllowed(color))
    }
}

/// Properties of `owner` that can be taken on their own.
#[must_use]
pub fn single_property_targets(owner: &PlayerLedger) -> Vec<CardId> {
    owner
        .sets()
        .flat_map(|(_, set)| set.cards.iter().map(|c| c.id))
        .filter(|&id| check_single_property(owner, id).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, ColorSet};

    fn ledger_with(cards: &[(u32, Color)]) -> PlayerLedger {
        let mut ledger = PlayerLedger::new();
        for &(id, color) in cards {
            ledger
                .add_property(Card::property(CardId::new(id), "Test", color, 1), color)
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_single_property_in_complete_set() {
        let ledger = ledger_with(&[(1, Color::Brown), (2, Color::Brown), (3, Color::Red)]);

        assert_eq!(
            check_single_property(&ledger, CardId::new(1)),
            Err(ActionError::TargetInCompleteSet)
        );
        assert_eq!(check_single_property(&ledger, CardId::new(3)), Ok(Color::Red));
        assert_eq!(
            check_single_property(&ledger, CardId::new(9)),
            Err(ActionError::NoValidTarget)
        );
        assert_eq!(single_property_targets(&ledger), vec![CardId::new(3)]);
    }

    #[test]
    fn test_full_wildcard_not_a_target() {
        let mut ledger = PlayerLedger::new();
        ledger
            .add_property(Card::wildcard(CardId::new(1), "Property Wildcard", ColorSet::Any, 0), Color::Green)
            .unwrap();

        assert_eq!(
            check_single_property(&ledger, CardId::new(1)),
            Err(ActionError::NoValidTarget)
        );
    }

    #[test]
    fn test_set_of_full_wildcards_cannot_be_stolen() {
        let mut ledger = PlayerLedger::new();
        for id in 1..=2 {
            ledger
                .add_property(Card::wildcard(CardId::new(id), "Property Wildcard", ColorSet::Any, 0), Color::Brown)
                .unwrap();
        }

        assert_eq!(check_complete_set(&ledger, Color::Brown), Ok(()));
        assert_eq!(check_set_steal(&ledger, Color::Brown), Err(ActionError::NoValidTarget));
        assert_eq!(
            check_set_steal(&ledger, Color::Blue),
            Err(ActionError::SetNotComplete(Color::Blue))
        );
    }

    #[test]
    fn test_rent_checks() {
        let ledger = ledger_with(&[(1, Color::Red)]);
        let red_yellow = ActionKind::PropertyRent(Color::Red, Color::Yellow);

        assert_eq!(check_rent(&ledger, red_yellow, Color::Red), Ok(()));
        assert_eq!(
            check_rent(&ledger, red_yellow, Color::Yellow),
            Err(ActionError::NoMatchingProperties(Color::Yellow))
        );
        assert_eq!(
            check_rent(&ledger, red_yellow, Color::Blue),
            Err(ActionError::InvalidColor(Color::Blue))
        );
        assert_eq!(check_rent(&ledger, ActionKind::WildRent, Color::Red), Ok(()));
    }

    #[test]
    fn test_build_checks() {
        let mut ledger = ledger_with(&[(1, Color::Blue), (2, Color::Blue), (3, Color::Utility), (4, Color::Utility)]);

        assert_eq!(
            check_build(&ledger, ActionKind::House, Color::Utility),
            Err(ActionError::BuildingNotAllowed(Color::Utility))
        );
        assert_eq!(
            check_build(&ledger, ActionKind::House, Color::Red),
            Err(ActionError::SetNotComplete(Color::Red))
        );
        assert_eq!(
            check_build(&ledger, ActionKind::Hotel, Color::Blue),
            Err(ActionError::BuildingNotAllowed(Color::Blue))
        );
        assert_eq!(check_build(&ledger, ActionKind::House, Color::Blue), Ok(()));

        ledger
            .add_building(Color::Blue, Card::action(CardId::new(5), ActionKind::House, 3))
            .unwrap();
        assert_eq!(check_build(&ledger, ActionKind::Hotel, Color::Blue), Ok(()));
        assert_eq!(
            check_build(&ledger, ActionKind::House, Color::Blue),
            Err(ActionError::BuildingNotAllowed(Color::Blue))
        );
    }
}
