//! Unified error types surfaced by the runtime API.
//!
//! Wraps engine rejections and loader failures so clients can bubble them up
//! with consistent context.
use thiserror::Error;

use quiz_core::{ActionError, ErrorSeverity, ExecuteError, GameError, OracleError};

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The engine refused the action. The state is unchanged.
    #[error(transparent)]
    Rejected(#[from] ExecuteError),

    /// Input refused before reaching the engine (e.g. an out-of-range card).
    #[error(transparent)]
    InvalidInput(#[from] ActionError),

    #[error("question bank failed: {0}")]
    Loader(#[from] OracleError),

    #[error("engine returned an unexpected result for {action}")]
    UnexpectedResult { action: &'static str },
}

impl SessionError {
    /// Underlying action error, if the failure was a rule rejection.
    pub fn action_error(&self) -> Option<&ActionError> {
        match self {
            SessionError::Rejected(error) => Some(error.reason()),
            SessionError::InvalidInput(error) => Some(error),
            _ => None,
        }
    }
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SessionError::Rejected(error) => error.severity(),
            SessionError::InvalidInput(error) => error.severity(),
            SessionError::Loader(error) => error.severity(),
            SessionError::UnexpectedResult { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SessionError::Rejected(error) => error.error_code(),
            SessionError::InvalidInput(error) => error.error_code(),
            SessionError::Loader(error) => error.error_code(),
            SessionError::UnexpectedResult { .. } => "SESSION_UNEXPECTED_RESULT",
        }
    }
}
