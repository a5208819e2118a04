//! Oracle access errors.
//!
//! Errors related to collaborator availability and content access.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
///
/// Missing oracles are fatal since the engine cannot judge answers without
/// its rules, prize ladder and random source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// ConfigOracle is not available in the environment.
    #[error("ConfigOracle not available")]
    ConfigNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,

    /// Prize table is not available in the environment.
    #[error("prize table not available")]
    PrizesNotAvailable,

    /// The question bank produced no question for a new play-through.
    #[error("question bank produced an empty question sequence")]
    EmptyQuestionSequence,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            PrizesNotAvailable => "ORACLE_PRIZES_NOT_AVAILABLE",
            EmptyQuestionSequence => "ORACLE_EMPTY_QUESTION_SEQUENCE",
        }
    }
}
