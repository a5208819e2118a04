/// How a wrong answer is treated.
///
/// Both rule sets are playable; the policy is picked explicitly per game and
/// never mixed.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AnswerPolicy {
    /// Classic quiz-show rule: any wrong answer ends the game as a loss.
    #[default]
    Strict,
    /// Practice rule: a wrong answer forfeits the question and play moves on.
    /// Running out of questions ends the game as a win.
    Lenient,
}

impl AnswerPolicy {
    /// Returns true if a wrong answer is terminal.
    pub const fn ends_on_wrong_answer(self) -> bool {
        matches!(self, Self::Strict)
    }

    /// Outcome of exhausting the question sequence without topping the ladder.
    pub const fn exhausted_sequence_wins(self) -> bool {
        matches!(self, Self::Lenient)
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of skips granted at the start of every play-through.
    pub max_skips: u8,
    /// Rule applied to wrong answers.
    pub answer_policy: AnswerPolicy,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_SKIPS: u8 = 3;

    pub fn new() -> Self {
        Self {
            max_skips: Self::DEFAULT_MAX_SKIPS,
            answer_policy: AnswerPolicy::default(),
        }
    }

    pub fn with_policy(answer_policy: AnswerPolicy) -> Self {
        Self {
            answer_policy,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_max_skips(mut self, max_skips: u8) -> Self {
        self.max_skips = max_skips;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
