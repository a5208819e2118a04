//! In-memory question bank and per-game selection.

use quiz_core::{
    Difficulty, OracleError, PrizeTable, Question, QuestionBankLoader, RngOracle, shuffle,
};
use strum::IntoEnumIterator;

/// Questions per difficulty tier in a classic play-through.
pub const DEFAULT_PER_DIFFICULTY: usize = 5;

/// How a play-through's question sequence is drawn from the bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "snake_case"))]
pub enum SelectionPolicy {
    /// Bank order, untouched. Mostly useful for scripted games.
    InOrder,
    /// Whole bank shuffled, optionally truncated.
    Shuffled {
        #[cfg_attr(feature = "serde", serde(default))]
        limit: Option<usize>,
    },
    /// Shuffled within each tier, then `per_difficulty` easy questions,
    /// followed by medium, followed by hard.
    Stratified { per_difficulty: usize },
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        SelectionPolicy::Stratified {
            per_difficulty: DEFAULT_PER_DIFFICULTY,
        }
    }
}

impl SelectionPolicy {
    /// Upper bound on the sequence length this policy can produce.
    pub fn max_len(&self, bank_len: usize) -> usize {
        match *self {
            SelectionPolicy::InOrder => bank_len,
            SelectionPolicy::Shuffled { limit } => limit.map_or(bank_len, |limit| limit.min(bank_len)),
            SelectionPolicy::Stratified { per_difficulty } => {
                (per_difficulty * Difficulty::iter().count()).min(bank_len)
            }
        }
    }
}

/// Static question catalog plus prize ladder.
///
/// Implements [`QuestionBankLoader`]: every call draws a fresh sequence from
/// the full catalog according to the selection policy.
#[derive(Clone, Debug, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
    prizes: PrizeTable,
    selection: SelectionPolicy,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>, prizes: PrizeTable) -> Self {
        Self {
            questions,
            prizes,
            selection: SelectionPolicy::default(),
        }
    }

    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn prizes(&self) -> &PrizeTable {
        &self.prizes
    }

    pub fn selection(&self) -> SelectionPolicy {
        self.selection
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of questions in `difficulty`.
    pub fn count_by_difficulty(&self, difficulty: Difficulty) -> usize {
        self.questions
            .iter()
            .filter(|question| question.difficulty == difficulty)
            .count()
    }

    fn select(&self, rng: &dyn RngOracle, seed: u64) -> Vec<Question> {
        match self.selection {
            SelectionPolicy::InOrder => self.questions.clone(),
            SelectionPolicy::Shuffled { limit } => {
                let mut pool = self.questions.clone();
                shuffle(rng, seed, &mut pool);
                if let Some(limit) = limit {
                    pool.truncate(limit);
                }
                pool
            }
            SelectionPolicy::Stratified { per_difficulty } => {
                let mut pool = self.questions.clone();
                shuffle(rng, seed, &mut pool);
                let mut sequence = Vec::with_capacity(self.selection.max_len(pool.len()));
                for difficulty in Difficulty::iter() {
                    sequence.extend(
                        pool.iter()
                            .filter(|question| question.difficulty == difficulty)
                            .take(per_difficulty)
                            .cloned(),
                    );
                }
                sequence
            }
        }
    }
}

impl QuestionBankLoader for QuestionBank {
    fn load_questions(&self, rng: &dyn RngOracle, seed: u64) -> Result<Vec<Question>, OracleError> {
        let sequence = self.select(rng, seed);
        if sequence.is_empty() {
            return Err(OracleError::EmptyQuestionSequence);
        }
        Ok(sequence)
    }

    fn prize_table(&self) -> PrizeTable {
        self.prizes.clone()
    }
}
