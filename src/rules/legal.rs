//! Candidate command enumeration.
//!
//! Candidates over-approximate: every command a player could plausibly
//! issue is listed with its targets filled in, and `legal_actions` keeps
//! the ones `apply` accepts. Administrative commands (`CancelPayment`)
//! are never offered.

use crate::cards::{ActionKind, Card, CardKind, Color};
use crate::core::action::{Command, PlayChoice};
use crate::core::player::PlayerId;
use crate::core::state::{GameState, TurnPhase};

use super::deal::DealRules;

impl DealRules {
    pub(super) fn candidates(&self, state: &GameState, player: PlayerId) -> Vec<Command> {
        match state.phase {
            TurnPhase::AwaitingStart => return vec![Command::StartGame],
            TurnPhase::Over => return Vec::new(),
            _ => {}
        }

        if let Some(response) = &state.response {
            if response.target != player {
                return Vec::new();
            }
            let mut commands = vec![Command::Accept];
            if state.ledger(player).has_just_say_no() {
                commands.push(Command::JustSayNo);
            }
            return commands;
        }

        if let Some(request) = &state.payment {
            if request.payer != player {
                return Vec::new();
            }
            let mut commands: Vec<Command> = state
                .ledger(player)
                .available_assets()
                .into_iter()
                .map(|asset| Command::SelectPaymentAsset { asset })
                .collect();
            commands.push(Command::ConfirmPayment);
            commands.push(Command::PayAllAvailable);
            return commands;
        }

        if player != state.current {
            return Vec::new();
        }
        let ledger = state.ledger(player);
        match state.phase {
            TurnPhase::AwaitingDraw => vec![Command::Draw],
            TurnPhase::AwaitingDiscard { .. } => ledger
                .hand
                .iter()
                .map(|card| Command::Discard { card: card.id })
                .collect(),
            TurnPhase::Acting => {
                let mut commands = vec![Command::EndTurn];
                for card in &ledger.hand {
                    commands.extend(
                        Self::play_choices(state, player, card)
                            .into_iter()
                            .map(|choice| Command::PlayCard { card: card.id, choice }),
                    );
                }
                for (from, set) in ledger.sets() {
                    for card in &set.cards {
                        let Some(property) = card.as_property() else {
                            continue;
                        };
                        if !property.colors.is_wildcard() {
                            continue;
                        }
                        commands.extend(
                            property
                                .colors
                                .colors()
                                .filter(|&color| color != from)
                                .map(|color| Command::SwitchWildcard { card: card.id, color }),
                        );
                    }
                }
                commands
            }
            TurnPhase::AwaitingStart | TurnPhase::Over => Vec::new(),
        }
    }

    fn play_choices(state: &GameState, player: PlayerId, card: &Card) -> Vec<PlayChoice> {
        let own = state.ledger(player);
        let opponent = state.ledger(player.opponent());

        let kind = match card.kind {
            CardKind::Money => return vec![PlayChoice::Auto],
            CardKind::Property(property) => {
                return property.colors.colors().map(PlayChoice::Color).collect();
            }
            CardKind::Action(kind) => kind,
        };

        let mut choices = vec![PlayChoice::AsMoney];
        match kind {
            ActionKind::PassGo | ActionKind::DebtCollector | ActionKind::Birthday => {
                choices.push(PlayChoice::Auto);
            }
            ActionKind::PropertyRent(..) | ActionKind::WildRent => {
                let doubles: Vec<_> = own
                    .hand
                    .iter()
                    .filter(|c| c.action_kind() == Some(ActionKind::DoubleRent))
                    .map(|c| Some(c.id))
                    .collect();
                let colors = kind.rent_colors().into_iter().flat_map(|set| set.colors());
                for color in colors.filter(|&color| own.property_count(color) > 0) {
                    for double in std::iter::once(None).chain(doubles.iter().copied()) {
                        choices.push(PlayChoice::Rent { color, double });
                    }
                }
            }
            ActionKind::SlyDeal => {
                choices.extend(
                    opponent
                        .sets()
                        .flat_map(|(_, set)| set.cards.iter())
                        .map(|target| PlayChoice::SlyDeal { target: target.id }),
                );
            }
            ActionKind::ForcedDeal => {
                for (_, mine) in own.sets() {
                    for offered in &mine.cards {
                        for (_, theirs) in opponent.sets() {
                            choices.extend(theirs.cards.iter().map(|requested| PlayChoice::ForcedDeal {
                                offered: offered.id,
                                requested: requested.id,
                            }));
                        }
                    }
                }
            }
            ActionKind::DealBreaker => {
                choices.extend(opponent.complete_colors().into_iter().map(|color| PlayChoice::DealBreaker { color }));
            }
            ActionKind::House | ActionKind::Hotel => {
                choices.extend(
                    Color::ALL
                        .into_iter()
                        .filter(|&color| own.is_complete(color))
                        .map(|color| PlayChoice::Build { color }),
                );
            }
            ActionKind::JustSayNo | ActionKind::DoubleRent => {}
        }
        choices
    }
}
