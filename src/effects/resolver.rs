//! Payload execution for accepted actions.
//!
//! Monetary payloads open a `PaymentRequest`; property payloads move cards
//! between ledgers right away. Targets are re-validated first: if what was
//! aimed at is gone (or a single property has since become part of a
//! complete set) the effect aborts without an error.

use tracing::debug;

use crate::cards::{CardId, Color};
use crate::core::action::AssetRef;
use crate::core::state::GameState;
use crate::events::GameEvent;
use crate::payment::PaymentRequest;
use crate::stack::{ActionResponse, Payload};
use crate::zones::transfer_asset;

use super::targeting::{check_set_steal, check_single_property};

/// Executes the payload of an accepted `ActionResponse`.
pub struct EffectResolver;

impl EffectResolver {
    /// Run `response`'s payload against `state`, emitting events.
    ///
    /// Returns false if the effect aborted.
    pub fn execute(state: &mut GameState, response: &ActionResponse) -> bool {
        let ok = match response.payload {
            Payload::Pay { amount } => {
                Self::open_payment(state, response, amount);
                true
            }
            Payload::StealProperty { card } => Self::steal_property(state, response, card),
            Payload::StealSet { color } => Self::steal_set(state, response, color),
            Payload::Swap { offered, requested } => Self::swap(state, response, offered, requested),
        };

        if !ok {
            debug!(kind = ?response.kind, "effect target gone, aborting");
            state.emit(GameEvent::EffectAborted {
                initiator: response.actor,
                kind: response.kind,
            });
        }
        ok
    }

    fn open_payment(state: &mut GameState, response: &ActionResponse, amount: u32) {
        let request = PaymentRequest::new(
            response.victim,
            response.actor,
            amount,
            state.ledger(response.victim),
        );
        state.emit(GameEvent::PaymentRequested {
            payer: request.payer,
            payee: request.payee,
            requested: request.requested,
            capped: request.capped,
        });
        state.payment = Some(request);
    }

    fn steal_property(state: &mut GameState, response: &ActionResponse, card: CardId) -> bool {
        if check_single_property(state.ledger(response.victim), card).is_err() {
            return false;
        }
        let name = state
            .ledger(response.victim)
            .property(card)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let Some((thief, victim)) = state.players.pair_mut(response.actor, response.victim) else {
            return false;
        };
        if !transfer_asset(victim, thief, AssetRef::Property(card)) {
            return false;
        }

        state.emit(GameEvent::PropertyStolen {
            thief: response.actor,
            victim: response.victim,
            card,
            name,
        });
        true
    }

    fn steal_set(state: &mut GameState, response: &ActionResponse, color: Color) -> bool {
        if check_set_steal(state.ledger(response.victim), color).is_err() {
            return false;
        }
        let Some((thief, victim)) = state.players.pair_mut(response.actor, response.victim) else {
            return false;
        };
        let Some(set) = victim.take_set(color) else {
            return false;
        };
        thief.add_set(color, set);

        state.emit(GameEvent::SetStolen {
            thief: response.actor,
            victim: response.victim,
            color,
        });
        true
    }

    fn swap(state: &mut GameState, response: &ActionResponse, offered: CardId, requested: CardId) -> bool {
        if check_single_property(state.ledger(response.actor), offered).is_err()
            || check_single_property(state.ledger(response.victim), requested).is_err()
        {
            return false;
        }
        let Some((actor, victim)) = state.players.pair_mut(response.actor, response.victim) else {
            return false;
        };
        if !transfer_asset(actor, victim, AssetRef::Property(offered)) {
            return false;
        }
        if !transfer_asset(victim, actor, AssetRef::Property(requested)) {
            transfer_asset(victim, actor, AssetRef::Property(offered));
            return false;
        }

        state.emit(GameEvent::PropertiesSwapped {
            player: response.actor,
            opponent: response.victim,
            given: offered,
            taken: requested,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ActionKind, Card};
    use crate::core::player::PlayerId;
    use crate::core::state::TurnPhase;

    const ACTOR: PlayerId = PlayerId(0);
    const VICTIM: PlayerId = PlayerId(1);

    fn state() -> GameState {
        let mut state = GameState::with_deck(Vec::new(), 0);
        state.phase = TurnPhase::Acting;
        state
    }

    fn place(state: &mut GameState, player: PlayerId, id: u32, color: Color) {
        state
            .ledger_mut(player)
            .add_property(Card::property(CardId::new(id), format!("P{id}"), color, 2), color)
            .unwrap();
    }

    fn response(kind: ActionKind, payload: Payload) -> ActionResponse {
        ActionResponse::open(kind, ACTOR, VICTIM, CardId::new(100), payload)
    }

    #[test]
    fn test_pay_opens_capped_request() {
        let mut state = state();
        state.ledger_mut(VICTIM).add_money(Card::money(CardId::new(1), 3));

        assert!(EffectResolver::execute(&mut state, &response(ActionKind::DebtCollector, Payload::Pay { amount: 5 })));

        let payment = state.payment.as_ref().unwrap();
        assert_eq!(payment.payer, VICTIM);
        assert_eq!(payment.payee, ACTOR);
        assert_eq!(payment.capped, 3);
    }

    #[test]
    fn test_steal_property() {
        let mut state = state();
        place(&mut state, VICTIM, 1, Color::Orange);

        let ok = EffectResolver::execute(
            &mut state,
            &response(ActionKind::SlyDeal, Payload::StealProperty { card: CardId::new(1) }),
        );

        assert!(ok);
        assert_eq!(state.ledger(ACTOR).property_count(Color::Orange), 1);
        assert_eq!(state.ledger(VICTIM).property_count(Color::Orange), 0);
    }

    #[test]
    fn test_steal_aborts_when_target_gone() {
        let mut state = state();

        let ok = EffectResolver::execute(
            &mut state,
            &response(ActionKind::SlyDeal, Payload::StealProperty { card: CardId::new(1) }),
        );

        assert!(!ok);
        assert!(matches!(state.events.last(), Some(GameEvent::EffectAborted { .. })));
    }

    #[test]
    fn test_steal_set_requires_complete() {
        let mut state = state();
        place(&mut state, VICTIM, 1, Color::Blue);

        let deal = response(ActionKind::DealBreaker, Payload::StealSet { color: Color::Blue });
        assert!(!EffectResolver::execute(&mut state, &deal));

        place(&mut state, VICTIM, 2, Color::Blue);
        assert!(EffectResolver::execute(&mut state, &deal));
        assert!(state.ledger(ACTOR).is_complete(Color::Blue));
        assert!(state.ledger(VICTIM).properties.is_empty());
    }

    #[test]
    fn test_swap_keeps_colors() {
        let mut state = state();
        place(&mut state, ACTOR, 1, Color::Pink);
        place(&mut state, VICTIM, 2, Color::Green);

        let ok = EffectResolver::execute(
            &mut state,
            &response(
                ActionKind::ForcedDeal,
                Payload::Swap {
                    offered: CardId::new(1),
                    requested: CardId::new(2),
                },
            ),
        );

        assert!(ok);
        assert_eq!(state.ledger(ACTOR).property_color(CardId::new(2)), Some(Color::Green));
        assert_eq!(state.ledger(VICTIM).property_color(CardId::new(1)), Some(Color::Pink));
        assert_eq!(state.total_cards(), 2);
    }
}
