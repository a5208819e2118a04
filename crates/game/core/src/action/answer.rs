use crate::action::{ActionError, ActionTransition};
use crate::env::GameEnv;
use crate::state::{AnswerRecord, GameState, GameStatus};
use crate::validation::{check_invariants, validate_answer};

/// Picks an option on the current question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnswerAction {
    pub option: usize,
}

impl AnswerAction {
    pub fn new(option: usize) -> Self {
        Self { option }
    }
}

/// Result of judging an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnswerOutcome {
    pub question_id: u32,
    pub selected: usize,
    pub correct: bool,
    /// Revealed so the presentation layer can highlight it.
    pub correct_index: usize,
    /// Game status after the answer.
    pub status: GameStatus,
}

impl AnswerOutcome {
    /// True for a wrong answer the game survived (lenient rules).
    pub fn shows_wrong_answer_notice(&self) -> bool {
        !self.correct && self.status != GameStatus::Lost
    }
}

impl ActionTransition for AnswerAction {
    type Error = ActionError;
    type Result = AnswerOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        validate_answer(self.option, state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let policy = env.config()?.answer_policy();
        let prizes = env.prizes()?;

        let question = state.current_question().ok_or(ActionError::NoActiveQuestion)?;
        let question_id = question.id;
        let correct_index = question.correct_option();
        let correct = question.is_correct(self.option);

        state
            .history
            .push(AnswerRecord::answered(question_id, self.option, correct));

        if correct {
            state.score += 1;
            let has_next = state.advance();
            if prizes.is_complete(state.score) || !has_next {
                state.finish(GameStatus::Won);
            }
        } else if policy.ends_on_wrong_answer() {
            // The cursor stays on the missed question.
            state.finish(GameStatus::Lost);
        } else if !state.advance() {
            state.finish(GameStatus::Won);
        }

        Ok(AnswerOutcome {
            question_id,
            selected: self.option,
            correct,
            correct_index,
            status: state.status,
        })
    }

    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state, env.config()?.max_skips())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnswerPolicy;
    use crate::state::HiddenOptions;
    use crate::test_helpers::{Fixture, state};

    fn run(
        action: AnswerAction,
        state: &mut GameState,
        fixture: &Fixture,
    ) -> Result<AnswerOutcome, ActionError> {
        let env = fixture.env();
        action.pre_validate(state, &env)?;
        let outcome = action.apply(state, &env)?;
        action.post_validate(state, &env)?;
        Ok(outcome)
    }

    #[test]
    fn correct_answer_scores_and_advances() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        let mut state = state(5);
        state.hidden_options = HiddenOptions::A;

        // First question's correct option is 2.
        let outcome = run(AnswerAction::new(2), &mut state, &fixture).unwrap();

        assert!(outcome.correct);
        assert_eq!(state.score, 1);
        assert_eq!(state.current_index, 1);
        assert!(state.hidden_options.is_empty());
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn wrong_answer_loses_under_strict_rules() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        let mut state = state(5);

        let outcome = run(AnswerAction::new(0), &mut state, &fixture).unwrap();

        assert!(!outcome.correct);
        assert_eq!(outcome.correct_index, 2);
        assert!(!outcome.shows_wrong_answer_notice());
        assert!(state.is_over());
        assert!(!state.won());
        assert!(state.current_question().is_none());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn wrong_answer_moves_on_under_lenient_rules() {
        let fixture = Fixture::new(AnswerPolicy::Lenient, 5);
        let mut state = state(5);

        let outcome = run(AnswerAction::new(0), &mut state, &fixture).unwrap();

        assert!(outcome.shows_wrong_answer_notice());
        assert_eq!(state.score, 0);
        assert_eq!(state.current_index, 1);
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn lenient_game_ends_as_win_when_questions_run_out() {
        let fixture = Fixture::new(AnswerPolicy::Lenient, 5);
        let mut state = state(1);

        let outcome = run(AnswerAction::new(3), &mut state, &fixture).unwrap();

        assert!(!outcome.correct);
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(state.score, 0);
        assert_eq!(state.current_index, 1);
    }

    #[test]
    fn last_correct_answer_wins() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 10);
        let mut state = state(2);

        run(AnswerAction::new(2), &mut state, &fixture).unwrap();
        let outcome = run(AnswerAction::new(3), &mut state, &fixture).unwrap();

        assert_eq!(outcome.status, GameStatus::Won);
        assert!(state.won());
        assert!(state.current_question().is_none());
        assert_eq!(state.score, 2);
        assert_eq!(state.current_index, 2);
    }

    #[test]
    fn topping_the_ladder_wins_before_sequence_ends() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 1);
        let mut state = state(5);

        let outcome = run(AnswerAction::new(2), &mut state, &fixture).unwrap();

        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(state.score, 1);
        assert!(state.score as usize <= state.current_index);
    }

    #[test]
    fn rejects_hidden_option() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        let mut state = state(5);
        state.hidden_options = HiddenOptions::B;
        let before = state.clone();

        let result = run(AnswerAction::new(1), &mut state, &fixture);

        assert_eq!(result, Err(ActionError::OptionEliminated { index: 1 }));
        assert_eq!(state, before);
    }

    #[test]
    fn rejects_answers_after_game_over() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        let mut state = state(5);
        run(AnswerAction::new(0), &mut state, &fixture).unwrap();

        let result = run(AnswerAction::new(2), &mut state, &fixture);
        assert_eq!(result, Err(ActionError::GameOver));
    }

    #[test]
    fn records_history() {
        let fixture = Fixture::new(AnswerPolicy::Lenient, 5);
        let mut state = state(5);
        run(AnswerAction::new(2), &mut state, &fixture).unwrap();
        run(AnswerAction::new(0), &mut state, &fixture).unwrap();

        assert_eq!(
            state.history,
            vec![
                AnswerRecord::answered(1, 2, true),
                AnswerRecord::answered(2, 0, false),
            ]
        );
    }
}
