/// What happened to a question that left the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnswerStatus {
    Correct,
    Incorrect,
    Skipped,
}

/// One entry of the play-through log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnswerRecord {
    pub question_id: u32,
    /// Option picked by the player, `None` for skips.
    pub selected: Option<usize>,
    pub status: AnswerStatus,
}

impl AnswerRecord {
    pub fn answered(question_id: u32, selected: usize, correct: bool) -> Self {
        Self {
            question_id,
            selected: Some(selected),
            status: if correct {
                AnswerStatus::Correct
            } else {
                AnswerStatus::Incorrect
            },
        }
    }

    pub fn skipped(question_id: u32) -> Self {
        Self {
            question_id,
            selected: None,
            status: AnswerStatus::Skipped,
        }
    }
}
