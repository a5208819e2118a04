use arrayvec::ArrayVec;

use crate::action::{ActionError, ActionTransition, LifelineKind};
use crate::env::{GameEnv, RngOracle, RollContext};
use crate::state::{GameState, INCORRECT_OPTION_COUNT, OPTION_COUNT};
use crate::validation::{check_invariants, validate_game_state, validate_help_usage};

/// Lowest share of the poll given to the correct option.
pub const CORRECT_SHARE_MIN: u32 = 40;
/// Highest share of the poll given to the correct option.
pub const CORRECT_SHARE_MAX: u32 = 70;

/// Asks the university students. One use per play-through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniversityHelpAction;

/// Poll percentages per option. Always sums to 100.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniversityHelpResult {
    pub percentages: [u8; OPTION_COUNT],
}

impl UniversityHelpResult {
    pub fn total(&self) -> u32 {
        self.percentages.iter().map(|&share| share as u32).sum()
    }

    /// Option with the largest share (lowest index on ties).
    pub fn leader(&self) -> usize {
        let mut leader = 0;
        for (index, &share) in self.percentages.iter().enumerate() {
            if share > self.percentages[leader] {
                leader = index;
            }
        }
        leader
    }
}

/// Simulates the poll for the question whose answer is `correct_index`.
///
/// The correct option receives a share in `[40, 70]`. Each wrong option but
/// the last takes a roll in `[0, 60% of what is left]`, and the last one
/// takes the remainder.
pub fn simulate_poll<R>(rng: &R, state: &GameState, correct_index: usize) -> UniversityHelpResult
where
    R: RngOracle + ?Sized,
{
    let mut percentages = [0u8; OPTION_COUNT];
    let correct_share = rng.range(
        state.roll_seed(RollContext::PollShare, 0),
        CORRECT_SHARE_MIN,
        CORRECT_SHARE_MAX,
    );
    percentages[correct_index] = correct_share as u8;

    let others: ArrayVec<usize, INCORRECT_OPTION_COUNT> = (0..OPTION_COUNT)
        .filter(|&index| index != correct_index)
        .collect();

    let mut remaining = 100 - correct_share;
    for (slot, &index) in others.iter().enumerate() {
        let share = if slot + 1 == others.len() {
            remaining
        } else {
            rng.range(
                state.roll_seed(RollContext::PollSpread, slot as u32),
                0,
                remaining * 6 / 10,
            )
        };
        percentages[index] = share as u8;
        remaining -= share;
    }

    UniversityHelpResult { percentages }
}

impl ActionTransition for UniversityHelpAction {
    type Error = ActionError;
    type Result = UniversityHelpResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        validate_help_usage(LifelineKind::University, state)
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let rng = env.rng()?;
        let correct_index = validate_game_state(state)?.correct_option();

        let result = simulate_poll(rng, state, correct_index);
        state.university_help_used = true;
        Ok(result)
    }

    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state, env.config()?.max_skips())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnswerPolicy;
    use crate::env::PcgRng;
    use crate::state::{Difficulty, Question};
    use crate::test_helpers::{Fixture, question, state};

    fn run(state: &mut GameState, fixture: &Fixture) -> Result<UniversityHelpResult, ActionError> {
        let env = fixture.env();
        UniversityHelpAction.pre_validate(state, &env)?;
        let result = UniversityHelpAction.apply(state, &env)?;
        UniversityHelpAction.post_validate(state, &env)?;
        Ok(result)
    }

    #[test]
    fn poll_favours_correct_option_and_sums_to_100() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        let mut state = GameState::new(vec![question(1, 1)], 3, 11);

        let result = run(&mut state, &fixture).unwrap();

        assert_eq!(result.percentages.len(), 4);
        assert_eq!(result.total(), 100);
        assert!(result.percentages[1] >= 40);
        assert!(result.percentages[1] <= 70);
        assert!(state.university_help_used);
    }

    #[test]
    fn poll_shape_holds_across_seeds() {
        let rng = PcgRng;
        for seed in 0..2_000u64 {
            for correct in 0..OPTION_COUNT {
                let mut state = GameState::new(vec![question(1, correct as u8)], 3, seed);
                state.nonce = seed % 7;
                let result = simulate_poll(&rng, &state, correct);

                assert_eq!(result.total(), 100, "seed {seed}");
                let correct_share = result.percentages[correct];
                assert!((40..=70).contains(&correct_share), "seed {seed}");
                // Wrong options only split what the correct one left.
                let best_wrong = result
                    .percentages
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| *index != correct)
                    .map(|(_, &share)| share)
                    .max()
                    .unwrap();
                assert!(best_wrong <= 60, "seed {seed}");
            }
        }
    }

    #[test]
    fn second_use_is_rejected_without_changes() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        let mut state = state(3);
        run(&mut state, &fixture).unwrap();
        let before = state.clone();

        assert_eq!(
            run(&mut state, &fixture),
            Err(ActionError::UniversityHelpAlreadyUsed)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn same_seed_and_nonce_give_same_poll() {
        let rng = PcgRng;
        let state = state(1);
        assert_eq!(simulate_poll(&rng, &state, 2), simulate_poll(&rng, &state, 2));
    }

    #[test]
    fn malformed_question_is_refused_without_changes() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        let bad = Question::new(1, "Q", ["a", "b", "c", "d"], 5, Difficulty::Easy);
        let mut state = GameState::new(vec![bad], 3, 9);
        let before = state.clone();

        assert!(matches!(
            run(&mut state, &fixture),
            Err(ActionError::MalformedQuestion { id: 1, correct: 5, .. })
        ));
        let env = fixture.env();
        assert!(matches!(
            UniversityHelpAction.apply(&mut state, &env),
            Err(ActionError::MalformedQuestion { .. })
        ));
        assert_eq!(state, before);
    }
}
