//! Authoritative game state representation.
//!
//! This module owns the data structures that describe one play-through: the
//! question sequence, the score, lifeline bookkeeping and the answer log.
//! Runtime layers clone or query this state but mutate it exclusively through
//! the engine.
mod hidden;
mod history;
mod question;
mod report;

pub use hidden::HiddenOptions;
pub use history::{AnswerRecord, AnswerStatus};
pub use question::{Difficulty, INCORRECT_OPTION_COUNT, OPTION_COUNT, Question, option_label};
pub use report::StateReport;

use crate::env::{RollContext, compute_seed};

/// Coarse phase of a play-through. `Won` and `Lost` are terminal until reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Canonical snapshot of a play-through.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once when the state is built and never modified.
    /// Combined with `nonce` to generate unique seeds for each random event.
    pub game_seed: u64,

    /// Number of actions applied so far. Incremented by the engine only.
    pub nonce: u64,

    /// Questions of this play-through, fixed at creation.
    pub question_sequence: Vec<Question>,
    /// Position into `question_sequence`.
    pub current_index: usize,
    /// Correct answers so far.
    pub score: u32,
    pub skips_remaining: u8,
    pub university_help_used: bool,
    pub cards_help_used: bool,
    /// Options eliminated on the current question.
    pub hidden_options: HiddenOptions,
    pub status: GameStatus,
    /// Every answered or skipped question, in order.
    pub history: Vec<AnswerRecord>,
}

impl GameState {
    /// Creates the initial state of a play-through.
    pub fn new(question_sequence: Vec<Question>, max_skips: u8, game_seed: u64) -> Self {
        Self {
            game_seed,
            nonce: 0,
            question_sequence,
            current_index: 0,
            score: 0,
            skips_remaining: max_skips,
            university_help_used: false,
            cards_help_used: false,
            hidden_options: HiddenOptions::empty(),
            status: GameStatus::Playing,
            history: Vec::new(),
        }
    }

    /// Question on the board, `None` once the game is over or the sequence is exhausted.
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_over() {
            return None;
        }
        self.question_sequence.get(self.current_index)
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Meaningful only once [`is_over`](Self::is_over) returns true.
    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn total_questions(&self) -> usize {
        self.question_sequence.len()
    }

    pub fn is_option_hidden(&self, index: usize) -> bool {
        self.hidden_options.hides(index)
    }

    /// Seed for one random roll of the action currently being applied.
    pub fn roll_seed(&self, context: RollContext, index: u32) -> u64 {
        compute_seed(self.game_seed, self.nonce, context.with_index(index))
    }

    /// Debug report, rendered through `Display`.
    pub fn report(&self) -> StateReport<'_> {
        StateReport::new(self)
    }

    /// Moves to the next question and clears eliminated options.
    ///
    /// Returns false when the sequence is exhausted.
    pub(crate) fn advance(&mut self) -> bool {
        self.current_index = (self.current_index + 1).min(self.question_sequence.len());
        self.hidden_options = HiddenOptions::empty();
        self.current_index < self.question_sequence.len()
    }

    pub(crate) fn finish(&mut self, status: GameStatus) {
        self.status = status;
        self.hidden_options = HiddenOptions::empty();
    }
}
