//! High-level game handle.
//!
//! `Game` pairs `DealRules` with a `GameState` and exposes one method per
//! command. Every method returns the events the command produced, or the
//! reason it was rejected (in which case nothing changed).
//!
//! ## Example
//!
//! ```
//! use monopoly_deal::game::GameBuilder;
//! use monopoly_deal::core::PlayerId;
//!
//! let mut game = GameBuilder::new().seed(7).build();
//! game.start_game().unwrap();
//!
//! let first = PlayerId::new(0);
//! assert_eq!(game.awaiting_player(), Some(first));
//! game.draw(first).unwrap();
//! assert_eq!(game.state().ledger(first).hand.len(), 7);
//! ```

mod builder;

pub use builder::GameBuilder;

use crate::cards::{CardId, Color};
use crate::core::action::{AssetRef, Command, PlayChoice};
use crate::core::config::GameConfig;
use crate::core::error::ActionError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::events::GameEvent;
use crate::rules::{DealRules, RulesEngine};

/// Result of a command.
pub type CommandResult = Result<Vec<GameEvent>, ActionError>;

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    rules: DealRules,
    state: GameState,
}

impl Game {
    /// Create an undealt game with the full deck.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::from_state(config, GameState::new(seed))
    }

    /// Wrap an existing state.
    #[must_use]
    pub fn from_state(config: GameConfig, state: GameState) -> Self {
        Self {
            rules: DealRules::new(config),
            state,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Rules configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.rules.config()
    }

    /// Consume the handle, returning the state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Apply any command on behalf of `player`.
    pub fn apply(&mut self, player: PlayerId, command: Command) -> CommandResult {
        self.rules.apply(&mut self.state, player, command)
    }

    // === Turn flow ===

    /// Shuffle and deal. Player 1 moves first.
    pub fn start_game(&mut self) -> CommandResult {
        let first = self.state.current;
        self.apply(first, Command::StartGame)
    }

    pub fn draw(&mut self, player: PlayerId) -> CommandResult {
        self.apply(player, Command::Draw)
    }

    pub fn play_card(&mut self, player: PlayerId, card: CardId, choice: PlayChoice) -> CommandResult {
        self.apply(player, Command::PlayCard { card, choice })
    }

    pub fn discard(&mut self, player: PlayerId, card: CardId) -> CommandResult {
        self.apply(player, Command::Discard { card })
    }

    pub fn end_turn(&mut self, player: PlayerId) -> CommandResult {
        self.apply(player, Command::EndTurn)
    }

    // === Responses ===

    pub fn respond_just_say_no(&mut self, player: PlayerId) -> CommandResult {
        self.apply(player, Command::JustSayNo)
    }

    pub fn accept_action(&mut self, player: PlayerId) -> CommandResult {
        self.apply(player, Command::Accept)
    }

    // === Payments ===

    /// Toggle an asset in or out of the pending payment.
    pub fn select_payment_asset(&mut self, player: PlayerId, asset: AssetRef) -> CommandResult {
        self.apply(player, Command::SelectPaymentAsset { asset })
    }

    pub fn confirm_payment(&mut self, player: PlayerId) -> CommandResult {
        self.apply(player, Command::ConfirmPayment)
    }

    pub fn pay_all_available(&mut self, player: PlayerId) -> CommandResult {
        self.apply(player, Command::PayAllAvailable)
    }

    /// Force-clear any pending response or payment without moving assets.
    pub fn cancel_payment(&mut self) -> CommandResult {
        let player = self.state.current;
        self.apply(player, Command::CancelPayment)
    }

    // === Properties ===

    pub fn switch_wildcard_color(&mut self, player: PlayerId, card: CardId, color: Color) -> CommandResult {
        self.apply(player, Command::SwitchWildcard { card, color })
    }

    // === Queries ===

    /// Every command `player` could issue right now.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Command> {
        self.rules.legal_actions(&self.state, player)
    }

    /// Who must act next.
    #[must_use]
    pub fn awaiting_player(&self) -> Option<PlayerId> {
        self.state.awaiting_player()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.rules.winner(&self.state)
    }
}
