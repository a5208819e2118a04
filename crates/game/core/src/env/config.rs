//! Configuration oracle for exposing game configuration to the engine.

use crate::config::{AnswerPolicy, GameConfig};

/// Provides access to the rules chosen for this play-through.
pub trait ConfigOracle: Send + Sync {
    /// Returns the rule applied to wrong answers.
    fn answer_policy(&self) -> AnswerPolicy;

    /// Returns the number of skips granted per play-through.
    fn max_skips(&self) -> u8;
}

impl ConfigOracle for GameConfig {
    fn answer_policy(&self) -> AnswerPolicy {
        self.answer_policy
    }

    fn max_skips(&self) -> u8 {
        self.max_skips
    }
}
