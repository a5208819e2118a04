//! Player actions.
//!
//! Each action is a transition type implementing [`ActionTransition`]. The
//! engine drives every transition through the same three phases:
//! `pre_validate` → `apply` → `post_validate`.
//!
//! # Module Structure
//!
//! - `answer`: answering the question on the board
//! - `skip`: the skip lifeline
//! - `university`: the simulated audience poll
//! - `cards`: eliminating wrong options
//! - `error`: rejection reasons shared by all actions

mod answer;
mod cards;
mod error;
mod skip;
mod university;

pub use answer::{AnswerAction, AnswerOutcome};
pub use cards::{CardDraw, CardValue, CardsHelpAction};
pub use error::ActionError;
pub use skip::SkipAction;
pub use university::{UniversityHelpAction, UniversityHelpResult, simulate_poll};

use crate::env::GameEnv;
use crate::state::{GameState, HiddenOptions};

/// Defines how a concrete action mutates game state.
///
/// Implementors override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. All hooks
/// receive read-only access to the environment and must stay side-effect
/// free.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A player intent forwarded by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Answer(AnswerAction),
    Skip(SkipAction),
    UniversityHelp(UniversityHelpAction),
    CardsHelp(CardsHelpAction),
}

impl Action {
    pub fn answer(option: usize) -> Self {
        Action::Answer(AnswerAction::new(option))
    }

    pub fn skip() -> Self {
        Action::Skip(SkipAction)
    }

    pub fn university_help() -> Self {
        Action::UniversityHelp(UniversityHelpAction)
    }

    pub fn cards_help(draw: CardDraw) -> Self {
        Action::CardsHelp(CardsHelpAction::new(draw))
    }

    /// Stable name for logs.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Action-specific payload returned by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Answer(AnswerOutcome),
    Skip,
    UniversityHelp(UniversityHelpResult),
    /// Options eliminated by the cards.
    CardsHelp(HiddenOptions),
}

/// The three lifelines.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifelineKind {
    Skip,
    University,
    Cards,
}
