//! Property effect integration tests: Sly Deal, Forced Deal, Deal Breaker.

mod common;

use common::{Table, P1, P2};
use monopoly_deal::cards::{ActionKind, Color, ColorSet, CATALOG_SIZE};
use monopoly_deal::core::{ActionError, Command, GameConfig, PlayChoice, TurnPhase};
use monopoly_deal::events::GameEvent;
use monopoly_deal::game::Game;

// =============================================================================
// Sly Deal
// =============================================================================

/// Test stealing a single property.
#[test]
fn test_sly_deal() {
    let mut table = Table::new();
    let sly = table.action(ActionKind::SlyDeal);
    let sly = table.to_hand(P1, sly);
    let target = table.place(P2, Color::Orange);
    table.place(P2, Color::Orange);
    let mut game = table.acting();

    game.play_card(P1, sly, PlayChoice::SlyDeal { target }).unwrap();
    let events = game.accept_action(P2).unwrap();

    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::PropertyStolen { thief, victim, card, .. }
            if *thief == P1 && *victim == P2 && *card == target
    )));
    assert_eq!(game.state().ledger(P1).property_count(Color::Orange), 1);
    assert_eq!(game.state().ledger(P2).property_count(Color::Orange), 1);
    assert_eq!(game.state().piles.action_slot.as_ref().map(|c| c.id), Some(sly));
}

/// Test that Sly Deal cannot take a full wildcard.
#[test]
fn test_sly_deal_full_wildcard() {
    let mut table = Table::new();
    let sly = table.action(ActionKind::SlyDeal);
    let sly = table.to_hand(P1, sly);
    let any = table.wildcard(ColorSet::Any);
    let any = table.to_board(P2, any, Color::Red);
    let mut game = table.acting();

    assert_eq!(
        game.play_card(P1, sly, PlayChoice::SlyDeal { target: any }),
        Err(ActionError::NoValidTarget)
    );
}

/// Test that Sly Deal cannot target the player's own property.
#[test]
fn test_sly_deal_own_property() {
    let mut table = Table::new();
    let sly = table.action(ActionKind::SlyDeal);
    let sly = table.to_hand(P1, sly);
    let mine = table.place(P1, Color::Red);
    let mut game = table.acting();

    assert_eq!(
        game.play_card(P1, sly, PlayChoice::SlyDeal { target: mine }),
        Err(ActionError::NoValidTarget)
    );
}

/// Test that an effect aborts quietly if its target has gone.
#[test]
fn test_effect_aborts_when_target_gone() {
    let mut table = Table::new();
    let sly = table.action(ActionKind::SlyDeal);
    let sly = table.to_hand(P1, sly);
    let target = table.place(P2, Color::Red);
    let mut game = table.acting();
    game.play_card(P1, sly, PlayChoice::SlyDeal { target }).unwrap();

    // Complete the target's set behind the engine's back.
    let mut state = game.into_state();
    let is_red = |c: &monopoly_deal::cards::Card| {
        c.as_property()
            .is_some_and(|p| p.colors == ColorSet::Single(Color::Red))
    };
    for _ in 0..2 {
        let index = state.piles.draw.iter().position(is_red).unwrap();
        let card = state.piles.draw.remove(index);
        state.ledger_mut(P2).add_property(card, Color::Red).unwrap();
    }
    let mut game = Game::from_state(GameConfig::default(), state);

    let events = game.accept_action(P2).unwrap();

    assert!(events.contains(&GameEvent::EffectAborted {
        initiator: P1,
        kind: ActionKind::SlyDeal,
    }));
    assert_eq!(game.state().ledger(P2).property_count(Color::Red), 3);
    assert!(!game.state().is_pending());
}

// =============================================================================
// Forced Deal
// =============================================================================

/// Test swapping one property for another.
#[test]
fn test_forced_deal() {
    let mut table = Table::new();
    let forced = table.action(ActionKind::ForcedDeal);
    let forced = table.to_hand(P1, forced);
    let offered = table.place(P1, Color::LightBlue);
    let requested = table.place(P2, Color::Yellow);
    let mut game = table.acting();

    game.play_card(P1, forced, PlayChoice::ForcedDeal { offered, requested })
        .unwrap();
    let events = game.accept_action(P2).unwrap();

    assert!(events.contains(&GameEvent::PropertiesSwapped {
        player: P1,
        opponent: P2,
        given: offered,
        taken: requested,
    }));
    assert_eq!(game.state().ledger(P1).property_color(requested), Some(Color::Yellow));
    assert_eq!(game.state().ledger(P2).property_color(offered), Some(Color::LightBlue));
    assert_eq!(game.state().total_cards(), CATALOG_SIZE);
}

/// Test that neither side of a Forced Deal may come from a complete set.
#[test]
fn test_forced_deal_complete_sets() {
    let mut table = Table::new();
    let forced = table.action(ActionKind::ForcedDeal);
    let forced = table.to_hand(P1, forced);
    let mine = table.complete(P1, Color::Brown);
    let loose = table.place(P1, Color::Pink);
    let theirs = table.complete(P2, Color::Utility);
    let single = table.place(P2, Color::Green);
    let mut game = table.acting();

    assert_eq!(
        game.play_card(P1, forced, PlayChoice::ForcedDeal { offered: mine[0], requested: single }),
        Err(ActionError::TargetInCompleteSet)
    );
    assert_eq!(
        game.play_card(P1, forced, PlayChoice::ForcedDeal { offered: loose, requested: theirs[0] }),
        Err(ActionError::TargetInCompleteSet)
    );
    game.play_card(P1, forced, PlayChoice::ForcedDeal { offered: loose, requested: single })
        .unwrap();
}

/// Test that a full wildcard cannot be given or taken in a Forced Deal.
#[test]
fn test_forced_deal_full_wildcard() {
    let mut table = Table::new();
    let forced = table.action(ActionKind::ForcedDeal);
    let forced = table.to_hand(P1, forced);
    let my_any = table.wildcard(ColorSet::Any);
    let my_any = table.to_board(P1, my_any, Color::Orange);
    let mine = table.place(P1, Color::Pink);
    let their_any = table.wildcard(ColorSet::Any);
    let their_any = table.to_board(P2, their_any, Color::Red);
    let theirs = table.place(P2, Color::Green);
    let mut game = table.acting();

    assert_eq!(
        game.play_card(P1, forced, PlayChoice::ForcedDeal { offered: mine, requested: their_any }),
        Err(ActionError::NoValidTarget)
    );
    assert_eq!(
        game.play_card(P1, forced, PlayChoice::ForcedDeal { offered: my_any, requested: theirs }),
        Err(ActionError::NoValidTarget)
    );
    assert!(game.legal_actions(P1).iter().all(|c| !matches!(
        c,
        Command::PlayCard { choice: PlayChoice::ForcedDeal { offered, requested }, .. }
            if *offered == my_any || *requested == their_any
    )));
    assert_eq!(game.state().cards_played, 0);
}

// =============================================================================
// Deal Breaker
// =============================================================================

/// Test stealing a complete set with its buildings.
#[test]
fn test_deal_breaker_takes_buildings() {
    let mut table = Table::new();
    let breaker = table.action(ActionKind::DealBreaker);
    let breaker = table.to_hand(P1, breaker);
    table.complete(P2, Color::Green);
    let house = table.action(ActionKind::House);
    let house = table.to_building(P2, house, Color::Green);
    let mut game = table.acting();

    game.play_card(P1, breaker, PlayChoice::DealBreaker { color: Color::Green })
        .unwrap();
    let events = game.accept_action(P2).unwrap();

    assert!(events.contains(&GameEvent::SetStolen {
        thief: P1,
        victim: P2,
        color: Color::Green,
    }));
    assert!(events.contains(&GameEvent::SetCompleted {
        player: P1,
        color: Color::Green,
    }));
    let ledger = game.state().ledger(P1);
    assert!(ledger.is_complete(Color::Green));
    assert_eq!(ledger.properties[&Color::Green].house.as_ref().map(|c| c.id), Some(house));
    assert_eq!(ledger.rent_due(Color::Green), 10);
    assert_eq!(game.state().ledger(P2).property_count(Color::Green), 0);
}

/// Test that Deal Breaker needs a complete set.
#[test]
fn test_deal_breaker_incomplete() {
    let mut table = Table::new();
    let breaker = table.action(ActionKind::DealBreaker);
    let breaker = table.to_hand(P1, breaker);
    table.place(P2, Color::Green);
    let mut game = table.acting();

    assert_eq!(
        game.play_card(P1, breaker, PlayChoice::DealBreaker { color: Color::Green }),
        Err(ActionError::SetNotComplete(Color::Green))
    );
}

/// Test that Deal Breaker leaves a full wildcard with its owner.
#[test]
fn test_deal_breaker_leaves_full_wildcard() {
    let mut table = Table::new();
    let breaker = table.action(ActionKind::DealBreaker);
    let breaker = table.to_hand(P1, breaker);
    let brown = table.place(P2, Color::Brown);
    let any = table.wildcard(ColorSet::Any);
    let any = table.to_board(P2, any, Color::Brown);
    let mut game = table.acting();
    assert!(game.state().ledger(P2).is_complete(Color::Brown));

    game.play_card(P1, breaker, PlayChoice::DealBreaker { color: Color::Brown })
        .unwrap();
    let events = game.accept_action(P2).unwrap();

    assert!(events.contains(&GameEvent::SetStolen {
        thief: P1,
        victim: P2,
        color: Color::Brown,
    }));
    let thief = game.state().ledger(P1);
    assert_eq!(thief.property_color(brown), Some(Color::Brown));
    assert_eq!(thief.property(any), None);
    assert!(!thief.is_complete(Color::Brown));
    let victim = game.state().ledger(P2);
    assert_eq!(victim.property_color(any), Some(Color::Brown));
    assert_eq!(victim.property_count(Color::Brown), 1);
    assert_eq!(game.state().total_cards(), CATALOG_SIZE);
}

/// Test that a set made only of full wildcards cannot be broken.
#[test]
fn test_deal_breaker_all_wildcards() {
    let mut table = Table::new();
    let breaker = table.action(ActionKind::DealBreaker);
    let breaker = table.to_hand(P1, breaker);
    for _ in 0..2 {
        let any = table.wildcard(ColorSet::Any);
        table.to_board(P2, any, Color::Utility);
    }
    let mut game = table.acting();
    assert!(game.state().ledger(P2).is_complete(Color::Utility));

    assert_eq!(
        game.play_card(P1, breaker, PlayChoice::DealBreaker { color: Color::Utility }),
        Err(ActionError::NoValidTarget)
    );
    assert!(game.state().response.is_none());
}

/// Test that stealing a third set wins the game at once.
#[test]
fn test_deal_breaker_wins() {
    let mut table = Table::new();
    let breaker = table.action(ActionKind::DealBreaker);
    let breaker = table.to_hand(P1, breaker);
    table.complete(P1, Color::Brown);
    table.complete(P1, Color::Blue);
    table.complete(P2, Color::Utility);
    let mut game = table.acting();

    game.play_card(P1, breaker, PlayChoice::DealBreaker { color: Color::Utility })
        .unwrap();
    let events = game.accept_action(P2).unwrap();

    assert!(events.contains(&GameEvent::GameWon { player: P1, sets: 3 }));
    assert_eq!(game.winner(), Some(P1));
    assert_eq!(game.state().phase, TurnPhase::Over);
    assert!(game.legal_actions(P1).is_empty());
    assert_eq!(game.end_turn(P1), Err(ActionError::GameOver));
}

// =============================================================================
// Buildings
// =============================================================================

/// Test the House and Hotel placement rules.
#[test]
fn test_building_rules() {
    let mut table = Table::new();
    let house = table.action(ActionKind::House);
    let house = table.to_hand(P1, house);
    let hotel = table.action(ActionKind::Hotel);
    let hotel = table.to_hand(P1, hotel);
    table.complete(P1, Color::Railroad);
    table.complete(P1, Color::Pink);
    table.place(P1, Color::Red);
    let mut game = table.acting();

    assert_eq!(
        game.play_card(P1, house, PlayChoice::Build { color: Color::Railroad }),
        Err(ActionError::BuildingNotAllowed(Color::Railroad))
    );
    assert_eq!(
        game.play_card(P1, house, PlayChoice::Build { color: Color::Red }),
        Err(ActionError::SetNotComplete(Color::Red))
    );
    assert_eq!(
        game.play_card(P1, hotel, PlayChoice::Build { color: Color::Pink }),
        Err(ActionError::BuildingNotAllowed(Color::Pink))
    );

    game.play_card(P1, house, PlayChoice::Build { color: Color::Pink }).unwrap();
    game.play_card(P1, hotel, PlayChoice::Build { color: Color::Pink }).unwrap();

    assert_eq!(game.state().ledger(P1).rent_due(Color::Pink), 11);
}
