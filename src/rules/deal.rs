//! The Monopoly Deal rules.
//!
//! `DealRules` dispatches each command to its handler (turn flow in
//! `turn.rs`, card plays in `play.rs`, responses and payments in
//! `respond.rs`), then runs the checks every accepted command shares:
//! newly completed sets are announced and the win condition is tested.
//!
//! Handlers validate everything before their first mutation, so a
//! rejected command leaves the state exactly as it was.

use tracing::{debug, info};

use crate::cards::Color;
use crate::core::action::Command;
use crate::core::config::GameConfig;
use crate::core::error::ActionError;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::{GameState, TurnPhase};
use crate::events::GameEvent;

use super::engine::RulesEngine;

/// Rules for a two-player game.
#[derive(Clone, Debug, Default)]
pub struct DealRules {
    pub(super) config: GameConfig,
}

impl DealRules {
    /// Create rules with the given configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Reject commands before the deal and after the win.
    pub(super) fn ensure_running(state: &GameState) -> Result<(), ActionError> {
        match state.phase {
            TurnPhase::AwaitingStart => Err(ActionError::GameNotStarted),
            TurnPhase::Over => Err(ActionError::GameOver),
            _ => Ok(()),
        }
    }

    /// Reject turn commands from the wrong player or while something is pending.
    pub(super) fn ensure_turn_player(state: &GameState, player: PlayerId) -> Result<(), ActionError> {
        Self::ensure_running(state)?;
        if player != state.current {
            return Err(ActionError::NotYourTurn(player));
        }
        if state.response.is_some() {
            return Err(ActionError::ResponsePending);
        }
        if state.payment.is_some() {
            return Err(ActionError::PaymentPending);
        }
        Ok(())
    }

    /// Reject card plays outside the acting phase.
    pub(super) fn ensure_acting(state: &GameState) -> Result<(), ActionError> {
        match state.phase {
            TurnPhase::Acting => Ok(()),
            TurnPhase::AwaitingDraw => Err(ActionError::CardsNotDrawn),
            TurnPhase::AwaitingDiscard { .. } => Err(ActionError::DiscardRequired),
            _ => Err(ActionError::WrongPhase),
        }
    }

    fn dispatch(&self, state: &mut GameState, player: PlayerId, command: Command) -> Result<(), ActionError> {
        match command {
            Command::StartGame => self.start_game(state),
            Command::Draw => self.draw(state, player),
            Command::PlayCard { card, choice } => self.play_card(state, player, card, choice),
            Command::Discard { card } => self.discard(state, player, card),
            Command::EndTurn => self.end_turn(state, player),
            Command::JustSayNo => self.just_say_no(state, player),
            Command::Accept => self.accept(state, player),
            Command::SelectPaymentAsset { asset } => self.select_payment_asset(state, player, asset),
            Command::ConfirmPayment => self.confirm_payment(state, player, false),
            Command::PayAllAvailable => self.confirm_payment(state, player, true),
            Command::CancelPayment => self.cancel_payment(state),
            Command::SwitchWildcard { card, color } => self.switch_wildcard(state, player, card, color),
        }
    }

    /// Announce newly completed sets and check for a winner.
    ///
    /// `player` issued the command and is checked first.
    fn after_command(&self, state: &mut GameState, player: PlayerId, before: &PlayerMap<Vec<Color>>) {
        let order = [player, player.opponent()];

        for p in order {
            let completed: Vec<Color> = state
                .ledger(p)
                .complete_colors()
                .into_iter()
                .filter(|color| !before[p].contains(color))
                .collect();
            for color in completed {
                state.emit(GameEvent::SetCompleted { player: p, color });
            }
        }

        if state.winner.is_some() {
            return;
        }
        for p in order {
            let sets = state.ledger(p).complete_sets();
            if sets >= self.config.sets_to_win {
                info!(winner = %p, sets, "game won");
                state.winner = Some(p);
                state.phase = TurnPhase::Over;
                state.response = None;
                state.payment = None;
                state.emit(GameEvent::GameWon { player: p, sets });
                return;
            }
        }
    }
}

impl RulesEngine for DealRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn candidate_commands(&self, state: &GameState, player: PlayerId) -> Vec<Command> {
        self.candidates(state, player)
    }

    fn apply(
        &self,
        state: &mut GameState,
        player: PlayerId,
        command: Command,
    ) -> Result<Vec<GameEvent>, ActionError> {
        let mark = state.events.mark();
        let turn = state.turn;
        let before = PlayerMap::new(|p| state.ledger(p).complete_colors());

        if let Err(error) = self.dispatch(state, player, command) {
            debug!(%player, ?command, code = error.code(), "command rejected");
            return Err(error);
        }

        state.record(player, command, turn);
        self.after_command(state, player, &before);
        debug!(%player, ?command, "command accepted");

        Ok(state.events.since(mark))
    }

    fn winner(&self, state: &GameState) -> Option<PlayerId> {
        state.winner
    }
}
