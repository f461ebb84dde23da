//! Turn flow: deal, draw, end of turn and discards.

use tracing::info;

use crate::cards::CardId;
use crate::core::error::ActionError;
use crate::core::player::PlayerId;
use crate::core::state::{GameState, TurnPhase};
use crate::events::GameEvent;

use super::deal::DealRules;

impl DealRules {
    pub(super) fn start_game(&self, state: &mut GameState) -> Result<(), ActionError> {
        match state.phase {
            TurnPhase::AwaitingStart => {}
            TurnPhase::Over => return Err(ActionError::GameOver),
            _ => return Err(ActionError::GameAlreadyStarted),
        }

        state.piles.shuffle(&mut state.rng);
        for _ in 0..self.config.starting_hand {
            for player in PlayerId::all() {
                self.draw_into(state, player, 1);
            }
        }

        let first = PlayerId::new(0);
        state.current = first;
        state.turn = 1;
        state.cards_played = 0;
        state.phase = TurnPhase::AwaitingDraw;

        let seed = state.rng.seed();
        info!(seed, "game started");
        state.emit(GameEvent::GameStarted { first, seed });
        for player in PlayerId::all() {
            let count = state.ledger(player).hand.len();
            state.emit(GameEvent::CardsDrawn { player, count });
        }
        state.emit(GameEvent::TurnStarted {
            player: first,
            turn: state.turn,
        });
        Ok(())
    }

    /// Move up to `count` cards from the draw pile into `player`'s hand.
    pub(super) fn draw_into(&self, state: &mut GameState, player: PlayerId, count: usize) -> usize {
        let discarded = state.piles.discard_len();
        let outcome = state.piles.draw(count, &mut state.rng);
        if outcome.reshuffled {
            state.emit(GameEvent::DeckReshuffled { cards: discarded });
        }

        let drawn = outcome.cards.len();
        state.ledger_mut(player).hand.extend(outcome.cards);
        drawn
    }

    pub(super) fn draw(&self, state: &mut GameState, player: PlayerId) -> Result<(), ActionError> {
        Self::ensure_turn_player(state, player)?;
        match state.phase {
            TurnPhase::AwaitingDraw => {}
            TurnPhase::Acting => return Err(ActionError::AlreadyDrawn),
            TurnPhase::AwaitingDiscard { .. } => return Err(ActionError::DiscardRequired),
            _ => return Err(ActionError::WrongPhase),
        }

        let count = self.config.draw_count(state.ledger(player).hand.len());
        let drawn = self.draw_into(state, player, count);
        state.emit(GameEvent::CardsDrawn { player, count: drawn });
        state.phase = TurnPhase::Acting;
        Ok(())
    }

    pub(super) fn end_turn(&self, state: &mut GameState, player: PlayerId) -> Result<(), ActionError> {
        Self::ensure_turn_player(state, player)?;
        Self::ensure_acting(state)?;

        let excess = state
            .ledger(player)
            .hand
            .len()
            .saturating_sub(self.config.hand_limit);
        if excess > 0 {
            state.phase = TurnPhase::AwaitingDiscard { remaining: excess };
            state.emit(GameEvent::DiscardRequired { player, count: excess });
            return Ok(());
        }

        Self::advance_turn(state);
        Ok(())
    }

    pub(super) fn discard(&self, state: &mut GameState, player: PlayerId, card: CardId) -> Result<(), ActionError> {
        Self::ensure_turn_player(state, player)?;
        let TurnPhase::AwaitingDiscard { remaining } = state.phase else {
            return Err(ActionError::WrongPhase);
        };

        let discarded = state
            .ledger_mut(player)
            .take_from_hand(card)
            .ok_or(ActionError::CardNotInHand(card))?;
        state.emit(GameEvent::CardDiscarded {
            player,
            card,
            name: discarded.name.clone(),
        });
        state.piles.discard(discarded);

        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            Self::advance_turn(state);
        } else {
            state.phase = TurnPhase::AwaitingDiscard { remaining };
        }
        Ok(())
    }

    fn advance_turn(state: &mut GameState) {
        state.emit(GameEvent::TurnEnded {
            player: state.current,
        });
        state.current = state.current.opponent();
        state.turn += 1;
        state.cards_played = 0;
        state.phase = TurnPhase::AwaitingDraw;
        state.emit(GameEvent::TurnStarted {
            player: state.current,
            turn: state.turn,
        });
    }
}
