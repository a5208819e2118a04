//! Error types for action execution pipeline.

use crate::action::ActionError;
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("answer rejected: {0}")]
    Answer(TransitionPhaseError<ActionError>),

    #[error("skip rejected: {0}")]
    Skip(TransitionPhaseError<ActionError>),

    #[error("university help rejected: {0}")]
    UniversityHelp(TransitionPhaseError<ActionError>),

    #[error("cards help rejected: {0}")]
    CardsHelp(TransitionPhaseError<ActionError>),
}

impl ExecuteError {
    fn inner(&self) -> &TransitionPhaseError<ActionError> {
        match self {
            ExecuteError::Answer(inner)
            | ExecuteError::Skip(inner)
            | ExecuteError::UniversityHelp(inner)
            | ExecuteError::CardsHelp(inner) => inner,
        }
    }

    /// Pipeline stage that rejected the action.
    pub fn phase(&self) -> TransitionPhase {
        self.inner().phase
    }

    /// Underlying rejection reason.
    pub fn reason(&self) -> &ActionError {
        &self.inner().error
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.reason().severity()
    }

    fn error_code(&self) -> &'static str {
        self.reason().error_code()
    }
}
