use crate::action::{ActionError, ActionTransition, LifelineKind};
use crate::env::GameEnv;
use crate::state::{AnswerRecord, GameState, GameStatus};
use crate::validation::{check_invariants, validate_help_usage};

/// Moves past the current question without answering it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkipAction;

impl ActionTransition for SkipAction {
    type Error = ActionError;
    type Result = ();

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        validate_help_usage(LifelineKind::Skip, state)
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let policy = env.config()?.answer_policy();
        let question_id = state
            .current_question()
            .ok_or(ActionError::NoActiveQuestion)?
            .id;

        state.skips_remaining = state
            .skips_remaining
            .checked_sub(1)
            .ok_or(ActionError::NoSkipsRemaining)?;
        state.history.push(AnswerRecord::skipped(question_id));

        if !state.advance() {
            let status = if policy.exhausted_sequence_wins() {
                GameStatus::Won
            } else {
                GameStatus::Lost
            };
            state.finish(status);
        }
        Ok(())
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

    fn run(state: &mut GameState, fixture: &Fixture) -> Result<(), ActionError> {
        let env = fixture.env();
        SkipAction.pre_validate(state, &env)?;
        SkipAction.apply(state, &env)?;
        SkipAction.post_validate(state, &env)
    }

    #[test]
    fn skip_consumes_one_and_advances() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        let mut state = state(5);
        state.hidden_options = HiddenOptions::C;

        run(&mut state, &fixture).unwrap();

        assert_eq!(state.skips_remaining, 2);
        assert_eq!(state.current_index, 1);
        assert_eq!(state.score, 0);
        assert!(state.hidden_options.is_empty());
    }

    #[test]
    fn skip_without_remaining_skips_is_rejected() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        let mut state = state(5);
        state.skips_remaining = 0;
        let before = state.clone();

        assert_eq!(run(&mut state, &fixture), Err(ActionError::NoSkipsRemaining));
        assert_eq!(state, before);
    }

    #[test]
    fn skips_never_go_below_zero() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 10);
        let mut state = state(10);

        for expected in [2, 1, 0] {
            run(&mut state, &fixture).unwrap();
            assert_eq!(state.skips_remaining, expected);
        }
        assert!(run(&mut state, &fixture).is_err());
        assert_eq!(state.skips_remaining, 0);
        assert_eq!(state.current_index, 3);
    }

    #[test]
    fn skipping_the_last_question_ends_the_game() {
        let fixture = Fixture::new(AnswerPolicy::Lenient, 5);
        let mut lenient = state(1);
        run(&mut lenient, &fixture).unwrap();
        assert_eq!(lenient.status, GameStatus::Won);
        assert!(lenient.current_question().is_none());

        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        let mut strict = state(1);
        run(&mut strict, &fixture).unwrap();
        assert_eq!(strict.status, GameStatus::Lost);
        assert_eq!(strict.skips_remaining, 2);
    }
}
