//! Card plays from hand.
//!
//! Playing a card is split into planning (every check, no mutation) and
//! execution (infallible once planned). Targeted actions end by opening an
//! `ActionResponse` for the opponent.

use crate::cards::{ActionKind, Card, CardId, CardKind, Color};
use crate::core::action::PlayChoice;
use crate::core::error::ActionError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::effects::{check_build, check_rent, check_set_steal, check_single_property};
use crate::events::GameEvent;
use crate::stack::{ActionResponse, Payload};

use super::deal::DealRules;

/// A validated card play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Plan {
    Bank,
    Place(Color),
    PassGo,
    Build(Color),
    Rent { color: Color, double: Option<CardId> },
    Targeted(Payload),
}

impl DealRules {
    pub(super) fn play_card(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: CardId,
        choice: PlayChoice,
    ) -> Result<(), ActionError> {
        Self::ensure_turn_player(state, player)?;
        Self::ensure_acting(state)?;
        if state.cards_played >= self.config.plays_per_turn {
            return Err(ActionError::MaxCardsPlayed);
        }

        let played = state
            .ledger(player)
            .hand_card(card)
            .ok_or(ActionError::CardNotInHand(card))?;
        let plan = self.plan(state, player, played, choice)?;

        let Some(played) = state.ledger_mut(player).take_from_hand(card) else {
            return Err(ActionError::CardNotInHand(card));
        };
        self.execute(state, player, played, plan);
        Ok(())
    }

    fn plan(&self, state: &GameState, player: PlayerId, card: &Card, choice: PlayChoice) -> Result<Plan, ActionError> {
        match (card.kind, choice) {
            (CardKind::Money, PlayChoice::Auto | PlayChoice::AsMoney) => Ok(Plan::Bank),
            (CardKind::Money, _) => Err(ActionError::InvalidChoice),

            (CardKind::Property(property), PlayChoice::Auto) => property
                .colors
                .default_color()
                .map(Plan::Place)
                .ok_or(ActionError::InvalidChoice),
            (CardKind::Property(property), PlayChoice::Color(color)) => {
                if property.colors.contains(color) {
                    Ok(Plan::Place(color))
                } else {
                    Err(ActionError::InvalidColor(color))
                }
            }
            (CardKind::Property(_), _) => Err(ActionError::InvalidChoice),

            (CardKind::Action(_), PlayChoice::AsMoney) => Ok(Plan::Bank),
            (CardKind::Action(kind), choice) => self.plan_action(state, player, card.id, kind, choice),
        }
    }

    fn plan_action(
        &self,
        state: &GameState,
        player: PlayerId,
        card: CardId,
        kind: ActionKind,
        choice: PlayChoice,
    ) -> Result<Plan, ActionError> {
        let own = state.ledger(player);
        let opponent = state.ledger(player.opponent());

        match (kind, choice) {
            (ActionKind::PassGo, PlayChoice::Auto) => Ok(Plan::PassGo),
            (ActionKind::DebtCollector, PlayChoice::Auto) => Ok(Plan::Targeted(Payload::Pay {
                amount: self.config.debt_collector_amount,
            })),
            (ActionKind::Birthday, PlayChoice::Auto) => Ok(Plan::Targeted(Payload::Pay {
                amount: self.config.birthday_amount,
            })),
            (ActionKind::PropertyRent(..) | ActionKind::WildRent, PlayChoice::Rent { color, double }) => {
                check_rent(own, kind, color)?;
                if let Some(double) = double {
                    if double == card {
                        return Err(ActionError::InvalidChoice);
                    }
                    let doubler = own.hand_card(double).ok_or(ActionError::CardNotInHand(double))?;
                    if doubler.action_kind() != Some(ActionKind::DoubleRent) {
                        return Err(ActionError::InvalidChoice);
                    }
                    if state.cards_played + 2 > self.config.plays_per_turn {
                        return Err(ActionError::MaxCardsPlayed);
                    }
                }
                Ok(Plan::Rent { color, double })
            }
            (ActionKind::SlyDeal, PlayChoice::SlyDeal { target }) => {
                check_single_property(opponent, target)?;
                Ok(Plan::Targeted(Payload::StealProperty { card: target }))
            }
            (ActionKind::ForcedDeal, PlayChoice::ForcedDeal { offered, requested }) => {
                check_single_property(own, offered)?;
                check_single_property(opponent, requested)?;
                Ok(Plan::Targeted(Payload::Swap { offered, requested }))
            }
            (ActionKind::DealBreaker, PlayChoice::DealBreaker { color }) => {
                check_set_steal(opponent, color)?;
                Ok(Plan::Targeted(Payload::StealSet { color }))
            }
            (ActionKind::House | ActionKind::Hotel, PlayChoice::Build { color }) => {
                check_build(own, kind, color)?;
                Ok(Plan::Build(color))
            }
            _ => Err(ActionError::InvalidChoice),
        }
    }

    fn execute(&self, state: &mut GameState, player: PlayerId, card: Card, plan: Plan) {
        state.cards_played += 1;
        let id = card.id;

        match plan {
            Plan::Bank => {
                state.emit(GameEvent::MoneyBanked {
                    player,
                    card: id,
                    name: card.name.clone(),
                    value: card.value,
                });
                state.ledger_mut(player).add_money(card);
            }
            Plan::Place(color) => {
                let name = card.name.clone();
                if let Err(card) = state.ledger_mut(player).add_property(card, color) {
                    state.ledger_mut(player).hand.push(card);
                    return;
                }
                state.emit(GameEvent::PropertyPlayed {
                    player,
                    card: id,
                    name,
                    color,
                });
            }
            Plan::PassGo => {
                state.piles.play_action(card);
                state.emit(GameEvent::ActionPlayed {
                    player,
                    card: id,
                    kind: ActionKind::PassGo,
                });
                let drawn = self.draw_into(state, player, self.config.pass_go_draw);
                state.emit(GameEvent::CardsDrawn { player, count: drawn });
            }
            Plan::Build(color) => {
                let Some(kind) = card.action_kind() else {
                    return;
                };
                if let Err(card) = state.ledger_mut(player).add_building(color, card) {
                    state.ledger_mut(player).hand.push(card);
                    return;
                }
                state.emit(GameEvent::BuildingAdded {
                    player,
                    card: id,
                    kind,
                    color,
                });
            }
            Plan::Rent { color, double } => {
                let Some(kind) = card.action_kind() else {
                    return;
                };
                let mut amount = state.ledger(player).rent_due(color);
                let doubler = double.and_then(|d| state.ledger_mut(player).take_from_hand(d));
                let doubled = doubler.is_some();
                if let Some(doubler) = doubler {
                    amount *= 2;
                    state.cards_played += 1;
                    state.emit(GameEvent::ActionPlayed {
                        player,
                        card: doubler.id,
                        kind: ActionKind::DoubleRent,
                    });
                    state.piles.discard(doubler);
                }

                state.piles.play_action(card);
                state.emit(GameEvent::ActionPlayed { player, card: id, kind });
                state.emit(GameEvent::RentCharged {
                    player,
                    target: player.opponent(),
                    color,
                    amount,
                    doubled,
                });
                Self::open_response(state, player, id, kind, Payload::Pay { amount });
            }
            Plan::Targeted(payload) => {
                let Some(kind) = card.action_kind() else {
                    return;
                };
                state.piles.play_action(card);
                state.emit(GameEvent::ActionPlayed { player, card: id, kind });
                Self::open_response(state, player, id, kind, payload);
            }
        }
    }

    fn open_response(state: &mut GameState, player: PlayerId, card: CardId, kind: ActionKind, payload: Payload) {
        state.response = Some(ActionResponse::open(
            kind,
            player,
            player.opponent(),
            card,
            payload,
        ));
    }
}
