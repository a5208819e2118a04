//! Deterministic quiz rules shared by the runtime, content tools and clients.
//!
//! `quiz-core` defines the canonical rules (question model, lifelines, prize
//! ladder, validator) and exposes pure APIs that can be reused by both the
//! runtime and offline tools such as the content linter. All state mutation
//! flows through [`engine::GameEngine`], and supporting crates depend on the
//! types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod validation;

#[cfg(test)]
mod test_helpers;

pub use action::{
    Action, ActionError, ActionResult, ActionTransition, AnswerAction, AnswerOutcome, CardDraw,
    CardValue, CardsHelpAction, LifelineKind, SkipAction, UniversityHelpAction,
    UniversityHelpResult,
};
pub use config::{AnswerPolicy, GameConfig};
pub use engine::{ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{
    ConfigOracle, Env, GameEnv, OracleError, PcgRng, Prize, PrizeTable, QuestionBankLoader,
    RngOracle, RollContext, compute_seed, shuffle,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    AnswerRecord, AnswerStatus, Difficulty, GameState, GameStatus, HiddenOptions,
    INCORRECT_OPTION_COUNT, OPTION_COUNT, Question, StateReport, option_label,
};
pub use validation::{
    AnswerCheck, QuestionIssue, check_invariants, validate_answer, validate_answer_option,
    validate_card_value, validate_game_state, validate_help_usage, validate_question,
};
