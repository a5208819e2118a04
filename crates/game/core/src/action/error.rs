//! Rejected-action reasons.
//!
//! Every variant is locally recoverable from the caller's point of view: the
//! action is refused and the game state is left exactly as it was.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};

/// Errors that can occur while validating or applying a player action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The game already reached a terminal state.
    #[error("the game is already over")]
    GameOver,

    /// There is no question on the board.
    #[error("no active question")]
    NoActiveQuestion,

    /// The question cursor points outside the sequence.
    #[error("question index {index} is outside the sequence of {len}")]
    InvalidIndex { index: usize, len: usize },

    /// The question on the board does not have the fixed option layout.
    #[error("question {id} is malformed: {options} options, correct index {correct}")]
    MalformedQuestion { id: u32, options: usize, correct: u8 },

    #[error("option index {index} out of range (question has {option_count} options)")]
    OptionIndexOutOfRange { index: usize, option_count: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    /// The option was eliminated by the cards lifeline.
    #[error("option {index} was eliminated by the cards")]
    OptionEliminated { index: usize },

    #[error("no skips remaining")]
    NoSkipsRemaining,

    #[error("university help already used")]
    UniversityHelpAlreadyUsed,

    #[error("cards already used")]
    CardsAlreadyUsed,

    #[error("invalid card value {0} (expected 1, 2 or 3)")]
    InvalidCardValue(u8),

    /// Post-validation found a broken state invariant.
    #[error("state invariant violated: {0}")]
    InvariantViolated(&'static str),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            GameOver | NoActiveQuestion => ErrorSeverity::Recoverable,
            OptionEliminated { .. } => ErrorSeverity::Recoverable,
            NoSkipsRemaining | UniversityHelpAlreadyUsed | CardsAlreadyUsed => {
                ErrorSeverity::Recoverable
            }
            OptionIndexOutOfRange { .. } | EmptyOption { .. } | InvalidCardValue(_) => {
                ErrorSeverity::Validation
            }
            InvalidIndex { .. } | MalformedQuestion { .. } | InvariantViolated(_) => {
                ErrorSeverity::Internal
            }
            Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            GameOver => "ACTION_GAME_OVER",
            NoActiveQuestion => "ACTION_NO_ACTIVE_QUESTION",
            InvalidIndex { .. } => "ACTION_INVALID_INDEX",
            MalformedQuestion { .. } => "ACTION_MALFORMED_QUESTION",
            OptionIndexOutOfRange { .. } => "ACTION_OPTION_INDEX_OUT_OF_RANGE",
            EmptyOption { .. } => "ACTION_EMPTY_OPTION",
            OptionEliminated { .. } => "ACTION_OPTION_ELIMINATED",
            NoSkipsRemaining => "ACTION_NO_SKIPS_REMAINING",
            UniversityHelpAlreadyUsed => "ACTION_UNIVERSITY_HELP_ALREADY_USED",
            CardsAlreadyUsed => "ACTION_CARDS_ALREADY_USED",
            InvalidCardValue(_) => "ACTION_INVALID_CARD_VALUE",
            InvariantViolated(_) => "ACTION_INVARIANT_VIOLATED",
            Oracle(error) => error.error_code(),
        }
    }
}
