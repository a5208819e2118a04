//! Pure validation of player actions and question content.
//!
//! These predicates are advisory: the presentation layer calls them to
//! enable or disable controls, and the content linter runs
//! [`validate_question`] over a whole bank. Action transitions call the same
//! checks again in `pre_validate` and remain the final authority.

use crate::action::{ActionError, CardValue, LifelineKind};
use crate::config::AnswerPolicy;
use crate::state::{GameState, GameStatus, OPTION_COUNT, Question};

/// Accepted answer, as seen before it is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerCheck {
    pub question_id: u32,
    pub is_correct: bool,
}

impl AnswerCheck {
    /// Whether play continues past this answer under `policy`, ignoring wins.
    pub fn can_proceed(&self, policy: AnswerPolicy) -> bool {
        self.is_correct || !policy.ends_on_wrong_answer()
    }

    /// Status this answer alone leads to: `Lost` for a fatal miss, else `Playing`.
    ///
    /// Wins depend on the prize ladder and the sequence length, so they are
    /// only known once the answer is applied.
    pub fn end_reason(&self, policy: AnswerPolicy) -> GameStatus {
        if self.can_proceed(policy) {
            GameStatus::Playing
        } else {
            GameStatus::Lost
        }
    }
}

/// Structural problems of a question record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuestionIssue {
    #[error("question text is empty")]
    EmptyText,

    #[error("expected exactly 4 options, found {found}")]
    MissingOptions { found: usize },

    #[error("option {} is empty", .index + 1)]
    EmptyOption { index: usize },

    #[error("correct answer index {0} is invalid")]
    InvalidCorrectIndex(u8),

    #[error("difficulty '{0}' is not one of easy, medium, hard")]
    UnknownDifficulty(String),

    #[error("question id must be positive")]
    InvalidId,
}

/// Checks that the game can accept an action and returns the question on the board.
///
/// # Errors
///
/// `GameOver` once the game ended, `InvalidIndex` when the cursor is past the
/// sequence, `NoActiveQuestion` when no question is on the board, and
/// `MalformedQuestion` when that question lacks the four-option layout.
pub fn validate_game_state(state: &GameState) -> Result<&Question, ActionError> {
    if state.is_over() {
        return Err(ActionError::GameOver);
    }
    if state.current_index > state.total_questions() {
        return Err(ActionError::InvalidIndex {
            index: state.current_index,
            len: state.total_questions(),
        });
    }
    let question = state.current_question().ok_or(ActionError::NoActiveQuestion)?;
    if question.option_count() != OPTION_COUNT || question.correct_option() >= OPTION_COUNT {
        return Err(ActionError::MalformedQuestion {
            id: question.id,
            options: question.option_count(),
            correct: question.correct_index,
        });
    }
    Ok(question)
}

/// Checks that `index` names a selectable, non-blank option of `question`.
pub fn validate_answer_option(index: usize, question: Option<&Question>) -> Result<(), ActionError> {
    let question = question.ok_or(ActionError::NoActiveQuestion)?;

    let option = question
        .option(index)
        .ok_or(ActionError::OptionIndexOutOfRange {
            index,
            option_count: question.option_count(),
        })?;

    if option.trim().is_empty() {
        return Err(ActionError::EmptyOption { index });
    }
    Ok(())
}

/// Full answer validation: game state, option shape and eliminated options.
pub fn validate_answer(index: usize, state: &GameState) -> Result<AnswerCheck, ActionError> {
    let question = validate_game_state(state)?;
    validate_answer_option(index, Some(question))?;

    if state.is_option_hidden(index) {
        return Err(ActionError::OptionEliminated { index });
    }

    Ok(AnswerCheck {
        question_id: question.id,
        is_correct: question.is_correct(index),
    })
}

/// Checks whether a lifeline can be used right now.
pub fn validate_help_usage(kind: LifelineKind, state: &GameState) -> Result<(), ActionError> {
    validate_game_state(state)?;

    match kind {
        LifelineKind::Skip if state.skips_remaining == 0 => Err(ActionError::NoSkipsRemaining),
        LifelineKind::University if state.university_help_used => {
            Err(ActionError::UniversityHelpAlreadyUsed)
        }
        LifelineKind::Cards if state.cards_help_used => Err(ActionError::CardsAlreadyUsed),
        _ => Ok(()),
    }
}

/// Accepts only the card values 1, 2 and 3.
pub fn validate_card_value(value: u8) -> Result<CardValue, ActionError> {
    CardValue::try_from(value)
}

/// Lists every structural problem of a question, not just the first.
///
/// An empty list means the question is well formed.
pub fn validate_question(question: &Question) -> Vec<QuestionIssue> {
    let mut issues = Vec::new();

    if question.text.trim().is_empty() {
        issues.push(QuestionIssue::EmptyText);
    }

    if question.options.len() != OPTION_COUNT {
        issues.push(QuestionIssue::MissingOptions {
            found: question.options.len(),
        });
    } else {
        issues.extend(
            question
                .options
                .iter()
                .enumerate()
                .filter(|(_, option)| option.trim().is_empty())
                .map(|(index, _)| QuestionIssue::EmptyOption { index }),
        );
    }

    if question.correct_option() >= OPTION_COUNT {
        issues.push(QuestionIssue::InvalidCorrectIndex(question.correct_index));
    }

    if question.id == 0 {
        issues.push(QuestionIssue::InvalidId);
    }

    issues
}

/// Post-condition shared by every action.
pub fn check_invariants(state: &GameState, max_skips: u8) -> Result<(), ActionError> {
    if state.current_index > state.total_questions() {
        return Err(ActionError::InvariantViolated("question index past the sequence"));
    }
    if state.score as usize > state.current_index {
        return Err(ActionError::InvariantViolated("score exceeds questions played"));
    }
    if state.skips_remaining > max_skips {
        return Err(ActionError::InvariantViolated("skips above the configured maximum"));
    }
    if let Some(question) = state.current_question() {
        if state.is_option_hidden(question.correct_option()) {
            return Err(ActionError::InvariantViolated("correct option is hidden"));
        }
    } else if !state.hidden_options.is_empty() {
        return Err(ActionError::InvariantViolated("options hidden without a question"));
    }
    if !state.is_over() && state.current_index == state.total_questions() {
        return Err(ActionError::InvariantViolated("sequence exhausted but game still running"));
    }
    Ok(())
}
