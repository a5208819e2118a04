//! Fixtures shared by the unit tests of this crate.

use crate::config::{AnswerPolicy, GameConfig};
use crate::env::{Env, GameEnv, PcgRng, Prize, PrizeTable};
use crate::state::{Difficulty, GameState, Question};

pub(crate) fn question(id: u32, correct_index: u8) -> Question {
    Question::new(
        id,
        format!("Question {id}?"),
        ["first", "second", "third", "fourth"],
        correct_index,
        Difficulty::Easy,
    )
}

/// `count` questions whose correct option cycles through 2, 3, 0, 1.
pub(crate) fn questions(count: u32) -> Vec<Question> {
    (1..=count)
        .map(|id| question(id, ((id + 1) % 4) as u8))
        .collect()
}

pub(crate) fn state(count: u32) -> GameState {
    GameState::new(questions(count), GameConfig::DEFAULT_MAX_SKIPS, 0xC0FFEE)
}

pub(crate) struct Fixture {
    pub config: GameConfig,
    pub rng: PcgRng,
    pub prizes: PrizeTable,
}

impl Fixture {
    /// Ladder with one rung per question.
    pub fn new(policy: AnswerPolicy, ladder_len: u64) -> Self {
        Self {
            config: GameConfig::with_policy(policy),
            rng: PcgRng,
            prizes: (1..=ladder_len).map(|rung| Prize::Amount(rung * 1_000)).collect(),
        }
    }

    pub fn env(&self) -> GameEnv<'_> {
        Env::with_all(&self.config, &self.rng, &self.prizes).as_game_env()
    }
}
