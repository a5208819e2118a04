//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! drives every action through the transition phases, keeps the action
//! counter, and surfaces rich error information to the runtime. A rejected
//! action leaves the state exactly as it was.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionResult};
use crate::env::GameEnv;
use crate::state::{GameState, GameStatus};

/// Complete outcome of action execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Action-specific execution result (answer verdict, poll, hidden options).
    pub action_result: ActionResult,

    /// Game status after the action.
    pub status: GameStatus,

    /// Nonce assigned to this action.
    pub nonce: u64,
}

/// Game engine that manages action execution.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action by routing it through the transition pipeline.
    ///
    /// On success the nonce is incremented. On failure in any phase the
    /// state is restored to its value before the call.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let before = self.state.clone();

        match transition::execute_transition(action, self.state, &env) {
            Ok(action_result) => {
                let nonce = self.state.nonce;
                self.state.nonce += 1;
                Ok(ExecutionOutcome {
                    action_result,
                    status: self.state.status,
                    nonce,
                })
            }
            Err(error) => {
                *self.state = before;
                Err(error)
            }
        }
    }

    /// Computes the outcome of `action` on a scratch copy of `state`.
    ///
    /// Lets the presentation layer stage feedback (reveal the correct option,
    /// then commit) without touching the authoritative state. Random rolls
    /// match what [`execute`](Self::execute) would produce for the same nonce.
    pub fn preview(
        state: &GameState,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let mut scratch = state.clone();
        GameEngine::new(&mut scratch).execute(env, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionError, CardDraw};
    use crate::config::AnswerPolicy;
    use crate::env::{Env, PcgRng};
    use crate::test_helpers::{Fixture, state};

    #[test]
    fn successful_actions_bump_the_nonce() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 10);
        let mut state = state(10);
        let mut engine = GameEngine::new(&mut state);

        let first = engine.execute(fixture.env(), &Action::skip()).unwrap();
        let second = engine
            .execute(fixture.env(), &Action::university_help())
            .unwrap();

        assert_eq!(first.nonce, 0);
        assert_eq!(second.nonce, 1);
        assert_eq!(state.nonce, 2);
    }

    #[test]
    fn rejected_actions_leave_state_untouched() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 10);
        let mut state = state(10);
        state.cards_help_used = true;
        let before = state.clone();

        let error = GameEngine::new(&mut state)
            .execute(fixture.env(), &Action::cards_help(CardDraw::Blank))
            .unwrap_err();

        assert_eq!(error.phase(), TransitionPhase::PreValidate);
        assert_eq!(error.reason(), &ActionError::CardsAlreadyUsed);
        assert_eq!(state, before);
    }

    #[test]
    fn apply_failures_roll_back() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 10);
        let mut state = state(10);
        let before = state.clone();

        // No rng oracle: pre-validation passes, apply cannot roll.
        let env = Env::<_, PcgRng>::new(Some(&fixture.config), None, Some(&fixture.prizes));
        let error = GameEngine::new(&mut state)
            .execute(env.as_game_env(), &Action::university_help())
            .unwrap_err();

        assert_eq!(error.phase(), TransitionPhase::Apply);
        assert_eq!(state, before);
    }

    #[test]
    fn preview_does_not_mutate() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 10);
        let state = state(10);

        let outcome = GameEngine::preview(&state, fixture.env(), &Action::answer(0)).unwrap();

        assert_eq!(outcome.status, GameStatus::Lost);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.nonce, 0);
    }
}
