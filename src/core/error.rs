//! Rejection reasons for illegal commands.
//!
//! A rejected command leaves the game state untouched. Each variant maps to
//! a stable upper-snake reason code that presentation layers can match on
//! or translate.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Color};
use crate::core::player::PlayerId;

/// Why a command was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ActionError {
    #[error("The game has not started")]
    GameNotStarted,

    #[error("The game has already started")]
    GameAlreadyStarted,

    #[error("The game is over")]
    GameOver,

    #[error("It is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("That is not possible right now")]
    WrongPhase,

    #[error("Cards must be drawn first")]
    CardsNotDrawn,

    #[error("Cards have already been drawn this turn")]
    AlreadyDrawn,

    #[error("No card plays left this turn")]
    MaxCardsPlayed,

    #[error("{0} is not in hand")]
    CardNotInHand(CardId),

    #[error("An action is waiting for a response")]
    ResponsePending,

    #[error("A payment is waiting to be settled")]
    PaymentPending,

    #[error("No action is waiting for a response")]
    NoPendingResponse,

    #[error("{0} is not the responder")]
    NotYourResponse(PlayerId),

    #[error("No Just Say No card in hand")]
    NoJustSayNo,

    #[error("No payment is waiting to be settled")]
    NoPendingPayment,

    #[error("{0} is not the payer")]
    NotPayer(PlayerId),

    #[error("{0} is not a payable asset")]
    AssetNotFound(CardId),

    #[error("Full wildcards cannot be used for payment")]
    ProtectedAsset,

    #[error("Select at least one asset to pay with")]
    EmptySelection,

    #[error("That card cannot be played that way")]
    InvalidChoice,

    #[error("That card cannot count as {0}")]
    InvalidColor(Color),

    #[error("No {0} properties to charge rent for")]
    NoMatchingProperties(Color),

    #[error("No valid target")]
    NoValidTarget,

    #[error("That property is part of a complete set")]
    TargetInCompleteSet,

    #[error("The {0} set is not complete")]
    SetNotComplete(Color),

    #[error("{0} is not a placed wildcard")]
    NotAWildcard(CardId),

    #[error("Nothing is pending")]
    NothingPending,

    #[error("A building cannot go on the {0} set")]
    BuildingNotAllowed(Color),

    #[error("A discard is required before the turn ends")]
    DiscardRequired,
}

impl ActionError {
    /// Stable reason code.
    ///
    /// ```
    /// use monopoly_deal::core::{ActionError, PlayerId};
    ///
    /// assert_eq!(ActionError::NotYourTurn(PlayerId::new(1)).code(), "NOT_YOUR_TURN");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            ActionError::GameNotStarted => "GAME_NOT_STARTED",
            ActionError::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            ActionError::GameOver => "GAME_OVER",
            ActionError::NotYourTurn(_) => "NOT_YOUR_TURN",
            ActionError::WrongPhase => "WRONG_PHASE",
            ActionError::CardsNotDrawn => "CARDS_NOT_DRAWN",
            ActionError::AlreadyDrawn => "ALREADY_DRAWN",
            ActionError::MaxCardsPlayed => "MAX_CARDS_PLAYED",
            ActionError::CardNotInHand(_) => "CARD_NOT_IN_HAND",
            ActionError::ResponsePending => "RESPONSE_PENDING",
            ActionError::PaymentPending => "PAYMENT_PENDING",
            ActionError::NoPendingResponse => "NO_PENDING_RESPONSE",
            ActionError::NotYourResponse(_) => "NOT_YOUR_RESPONSE",
            ActionError::NoJustSayNo => "NO_JUST_SAY_NO",
            ActionError::NoPendingPayment => "NO_PENDING_PAYMENT",
            ActionError::NotPayer(_) => "NOT_PAYER",
            ActionError::AssetNotFound(_) => "ASSET_NOT_FOUND",
            ActionError::ProtectedAsset => "PROTECTED_ASSET",
            ActionError::EmptySelection => "EMPTY_SELECTION",
            ActionError::InvalidChoice => "INVALID_CHOICE",
            ActionError::InvalidColor(_) => "INVALID_COLOR",
            ActionError::NoMatchingProperties(_) => "NO_MATCHING_PROPERTIES",
            ActionError::NoValidTarget => "NO_VALID_TARGET",
            ActionError::TargetInCompleteSet => "TARGET_IN_COMPLETE_SET",
            ActionError::SetNotComplete(_) => "SET_NOT_COMPLETE",
            ActionError::NotAWildcard(_) => "NOT_A_WILDCARD",
            ActionError::NothingPending => "NOTHING_PENDING",
            ActionError::BuildingNotAllowed(_) => "BUILDING_NOT_ALLOWED",
            ActionError::DiscardRequired => "DISCARD_REQUIRED",
        }
    }
}
