//! Turn state machine integration tests.

mod common;

use common::{Table, P1, P2};
use monopoly_deal::cards::{ActionKind, Color, CATALOG_SIZE};
use monopoly_deal::core::{ActionError, Command, GameConfig, PlayChoice, TurnPhase};
use monopoly_deal::events::GameEvent;
use monopoly_deal::game::GameBuilder;

// =============================================================================
// Deal and Draw
// =============================================================================

/// Test that a new game deals five cards each and waits for Player 1.
#[test]
fn test_start_game() {
    let mut game = GameBuilder::new().seed(3).build();

    let events = game.start_game().unwrap();

    assert!(matches!(events.first(), Some(GameEvent::GameStarted { first, seed: 3 }) if *first == P1));
    assert_eq!(game.state().ledger(P1).hand.len(), 5);
    assert_eq!(game.state().ledger(P2).hand.len(), 5);
    assert_eq!(game.state().piles.draw_len(), CATALOG_SIZE - 10);
    assert_eq!(game.awaiting_player(), Some(P1));
    assert_eq!(game.legal_actions(P1), vec![Command::Draw]);
}

/// Test that nothing but StartGame is accepted before the deal.
#[test]
fn test_commands_before_start() {
    let mut game = GameBuilder::new().seed(3).build();

    assert_eq!(game.draw(P1), Err(ActionError::GameNotStarted));
    assert_eq!(game.end_turn(P1), Err(ActionError::GameNotStarted));
    assert_eq!(game.legal_actions(P1), vec![Command::StartGame]);
}

/// Test that the same seed deals the same hands.
#[test]
fn test_deal_is_deterministic() {
    let mut a = GameBuilder::new().seed(1234).build();
    let mut b = GameBuilder::new().seed(1234).build();
    a.start_game().unwrap();
    b.start_game().unwrap();

    assert_eq!(a.state().players, b.state().players);
    assert_eq!(a.state().piles, b.state().piles);
}

/// Test drawing two at the start of a turn and five from an empty hand.
#[test]
fn test_draw_counts() {
    let mut table = Table::new();
    let card = table.money(1);
    table.to_hand(P1, card);
    let mut game = table.awaiting_draw();

    game.draw(P1).unwrap();
    assert_eq!(game.state().ledger(P1).hand.len(), 3);

    let mut game = Table::new().awaiting_draw();
    game.draw(P1).unwrap();
    assert_eq!(game.state().ledger(P1).hand.len(), 5);
}

// =============================================================================
// Play Budget
// =============================================================================

/// Test that a fourth card play in one turn is rejected.
#[test]
fn test_three_plays_per_turn() {
    let mut table = Table::new();
    let cards: Vec<_> = (0..4)
        .map(|_| {
            let card = table.money(1);
            table.to_hand(P1, card)
        })
        .collect();
    let mut game = table.acting();

    for &card in &cards[..3] {
        game.play_card(P1, card, PlayChoice::Auto).unwrap();
    }

    assert_eq!(
        game.play_card(P1, cards[3], PlayChoice::Auto),
        Err(ActionError::MaxCardsPlayed)
    );
    assert_eq!(game.state().cards_played, 3);
    assert!(!game
        .legal_actions(P1)
        .iter()
        .any(|c| matches!(c, Command::PlayCard { .. })));
}

/// Test that the budget resets when the turn passes.
#[test]
fn test_budget_resets_next_turn() {
    let mut table = Table::new();
    let card = table.money(1);
    let card = table.to_hand(P1, card);
    let mut game = table.acting();

    game.play_card(P1, card, PlayChoice::Auto).unwrap();
    game.end_turn(P1).unwrap();

    assert_eq!(game.state().cards_played, 0);
    assert_eq!(game.state().current, P2);
    assert_eq!(game.state().phase, TurnPhase::AwaitingDraw);
    assert_eq!(game.state().turn, 2);
}

/// Test that Pass Go uses a play and draws two.
#[test]
fn test_pass_go() {
    let mut table = Table::new();
    let card = table.action(ActionKind::PassGo);
    let card = table.to_hand(P1, card);
    let mut game = table.acting();

    let events = game.play_card(P1, card, PlayChoice::Auto).unwrap();

    assert!(events.contains(&GameEvent::CardsDrawn { player: P1, count: 2 }));
    assert_eq!(game.state().ledger(P1).hand.len(), 2);
    assert_eq!(game.state().cards_played, 1);
    assert_eq!(game.state().total_cards(), CATALOG_SIZE);
}

// =============================================================================
// Hand Limit
// =============================================================================

/// Test that ending a turn with more than seven cards requires discards.
#[test]
fn test_hand_limit_discard() {
    let mut table = Table::new();
    let mut hand = Vec::new();
    for _ in 0..9 {
        let card = table.action(ActionKind::PassGo);
        hand.push(table.to_hand(P1, card));
    }
    let mut game = table.acting();

    let events = game.end_turn(P1).unwrap();
    assert!(events.contains(&GameEvent::DiscardRequired { player: P1, count: 2 }));
    assert_eq!(game.state().current, P1);
    assert_eq!(game.awaiting_player(), Some(P1));

    // Only discards are legal now.
    assert!(game
        .legal_actions(P1)
        .iter()
        .all(|c| matches!(c, Command::Discard { .. })));
    assert_eq!(game.play_card(P1, hand[0], PlayChoice::AsMoney), Err(ActionError::DiscardRequired));
    assert_eq!(game.end_turn(P1), Err(ActionError::DiscardRequired));

    game.discard(P1, hand[0]).unwrap();
    assert_eq!(game.state().current, P1);
    game.discard(P1, hand[1]).unwrap();

    assert_eq!(game.state().current, P2);
    assert_eq!(game.state().ledger(P1).hand.len(), 7);
    assert_eq!(game.state().piles.discard_len(), 2);
}

/// Test that a custom hand limit is honored.
#[test]
fn test_custom_hand_limit() {
    let mut table = Table::new();
    for _ in 0..3 {
        let card = table.money(1);
        table.to_hand(P1, card);
    }
    let mut game = table.acting_with(GameConfig::default().with_hand_limit(2));

    game.end_turn(P1).unwrap();

    assert_eq!(game.state().phase, TurnPhase::AwaitingDiscard { remaining: 1 });
}

// =============================================================================
// Turn Ownership
// =============================================================================

/// Test that the waiting player cannot act.
#[test]
fn test_not_your_turn() {
    let mut table = Table::new();
    let card = table.money(3);
    let card = table.to_hand(P2, card);
    let mut game = table.acting();

    assert_eq!(game.play_card(P2, card, PlayChoice::Auto), Err(ActionError::NotYourTurn(P2)));
    assert_eq!(game.end_turn(P2), Err(ActionError::NotYourTurn(P2)));
    assert!(game.legal_actions(P2).is_empty());
}

/// Test that history records accepted commands with their turn.
#[test]
fn test_history() {
    let mut game = GameBuilder::new().seed(9).build();
    game.start_game().unwrap();
    game.draw(P1).unwrap();
    let _ = game.end_turn(P2);
    game.end_turn(P1).unwrap();

    let history = &game.state().history;
    assert_eq!(history.len(), 3);
    assert_eq!(history[2].command, Command::EndTurn);
    assert_eq!(history[2].turn, 1);
    assert_eq!(history[2].sequence, 2);
}

/// Test that a wildcard switch is free.
#[test]
fn test_wildcard_switch_is_free() {
    let mut table = Table::new();
    let wild = table.wildcard(monopoly_deal::cards::ColorSet::Dual(Color::Red, Color::Yellow));
    let wild = table.to_board(P1, wild, Color::Red);
    let mut game = table.acting();

    game.switch_wildcard_color(P1, wild, Color::Yellow).unwrap();
    game.switch_wildcard_color(P1, wild, Color::Red).unwrap();

    assert_eq!(game.state().cards_played, 0);
    assert_eq!(game.state().ledger(P1).property_color(wild), Some(Color::Red));
}
