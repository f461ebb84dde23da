//! Responses, payments and wildcard moves.
//!
//! These commands come from whoever `GameState::awaiting_player` names:
//! the response target, the payer, or (for wildcard moves) the current
//! player between plays.

use tracing::{debug, info};

use crate::cards::{CardId, Color};
use crate::core::action::AssetRef;
use crate::core::error::ActionError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::effects::EffectResolver;
use crate::events::GameEvent;
use crate::stack::Resolution;

use super::deal::DealRules;

impl DealRules {
    pub(super) fn just_say_no(&self, state: &mut GameState, player: PlayerId) -> Result<(), ActionError> {
        Self::ensure_responder(state, player)?;
        let card = state.ledger(player).just_say_no().ok_or(ActionError::NoJustSayNo)?;
        let Some(response) = state.response.as_mut() else {
            return Err(ActionError::NoPendingResponse);
        };
        let depth = response.counter();

        if let Some(played) = state.ledger_mut(player).take_from_hand(card) {
            state.piles.discard(played);
        }

        debug!(%player, depth, "just say no");
        state.emit(GameEvent::JustSayNoPlayed { player, card, depth });
        Ok(())
    }

    pub(super) fn accept(&self, state: &mut GameState, player: PlayerId) -> Result<(), ActionError> {
        Self::ensure_responder(state, player)?;
        let Some(response) = state.response.take() else {
            return Err(ActionError::NoPendingResponse);
        };

        state.emit(GameEvent::ActionAccepted {
            player,
            kind: response.kind,
        });
        match response.resolve() {
            Resolution::Blocked => {
                state.emit(GameEvent::ActionBlocked {
                    initiator: response.actor,
                    kind: response.kind,
                });
            }
            Resolution::Execute(_) => {
                EffectResolver::execute(state, &response);
            }
        }
        Ok(())
    }

    pub(super) fn select_payment_asset(
        &self,
        state: &mut GameState,
        player: PlayerId,
        asset: AssetRef,
    ) -> Result<(), ActionError> {
        Self::ensure_payer(state, player)?;

        let ledger = &state.players[player];
        let Some(request) = state.payment.as_mut() else {
            return Err(ActionError::NoPendingPayment);
        };
        request.toggle(asset, ledger)?;

        let (selected, capped) = (request.selected_total(), request.capped);
        state.emit(GameEvent::PaymentSelectionChanged {
            payer: player,
            selected,
            capped,
        });
        Ok(())
    }

    pub(super) fn confirm_payment(
        &self,
        state: &mut GameState,
        player: PlayerId,
        pay_all: bool,
    ) -> Result<(), ActionError> {
        Self::ensure_payer(state, player)?;
        let Some(mut request) = state.payment.clone() else {
            return Err(ActionError::NoPendingPayment);
        };
        if pay_all {
            request.select_all(state.ledger(player));
        }

        let settlement = request.settle(&mut state.players)?;
        state.payment = None;

        if request.capped == 0 && settlement.cards == 0 {
            state.emit(GameEvent::NoPaymentPossible {
                payer: request.payer,
                payee: request.payee,
            });
        } else {
            info!(payer = %request.payer, amount = settlement.amount, "payment settled");
            state.emit(GameEvent::PaymentSettled {
                payer: request.payer,
                payee: request.payee,
                amount: settlement.amount,
                cards: settlement.cards,
            });
        }
        Ok(())
    }

    /// Drop any pending response and payment without moving assets.
    pub(super) fn cancel_payment(&self, state: &mut GameState) -> Result<(), ActionError> {
        Self::ensure_running(state)?;
        if !state.is_pending() {
            return Err(ActionError::NothingPending);
        }

        if let Some(response) = state.response.take() {
            info!(initiator = %response.actor, kind = ?response.kind, "response cancelled");
            state.emit(GameEvent::ActionCancelled {
                initiator: response.actor,
                kind: response.kind,
            });
        }
        if let Some(request) = state.payment.take() {
            info!(payer = %request.payer, "payment cancelled");
            state.emit(GameEvent::PaymentCancelled {
                payer: request.payer,
                payee: request.payee,
            });
        }
        Ok(())
    }

    pub(super) fn switch_wildcard(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: CardId,
        color: Color,
    ) -> Result<(), ActionError> {
        Self::ensure_turn_player(state, player)?;
        Self::ensure_acting(state)?;

        let ledger = state.ledger(player);
        let colors = ledger
            .property(card)
            .and_then(|c| c.as_property())
            .map(|p| p.colors)
            .filter(|colors| colors.is_wildcard())
            .ok_or(ActionError::NotAWildcard(card))?;
        let from = ledger.property_color(card).ok_or(ActionError::NotAWildcard(card))?;
        if !colors.contains(color) {
            return Err(ActionError::InvalidColor(color));
        }
        if from == color {
            return Err(ActionError::InvalidChoice);
        }

        if !state.ledger_mut(player).move_property(card, color) {
            return Err(ActionError::InvalidColor(color));
        }
        state.emit(GameEvent::WildcardSwitched {
            player,
            card,
            from,
            to: color,
        });
        Ok(())
    }

    fn ensure_responder(state: &GameState, player: PlayerId) -> Result<(), ActionError> {
        Self::ensure_running(state)?;
        let response = state.response.as_ref().ok_or(ActionError::NoPendingResponse)?;
        if response.target != player {
            return Err(ActionError::NotYourResponse(player));
        }
        Ok(())
    }

    fn ensure_payer(state: &GameState, player: PlayerId) -> Result<(), ActionError> {
        Self::ensure_running(state)?;
        let request = state.payment.as_ref().ok_or(ActionError::NoPendingPayment)?;
        if request.payer != player {
            return Err(ActionError::NotPayer(player));
        }
        Ok(())
    }
}
