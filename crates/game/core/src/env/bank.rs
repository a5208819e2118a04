use super::{OracleError, PrizeTable, RngOracle};
use crate::state::Question;

/// Supplies the static content of a play-through.
///
/// Implementations read from a fixed data source. Each call to
/// [`load_questions`](Self::load_questions) produces a fresh ordering derived
/// from `seed`, so a reset can draw a different sequence.
pub trait QuestionBankLoader {
    /// Builds the ordered question sequence for one play-through.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::EmptyQuestionSequence` if no question could be
    /// selected.
    fn load_questions(&self, rng: &dyn RngOracle, seed: u64) -> Result<Vec<Question>, OracleError>;

    /// Prize ladder for the play-through.
    fn prize_table(&self) -> PrizeTable;
}
