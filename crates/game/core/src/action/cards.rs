use arrayvec::ArrayVec;

use crate::action::{ActionError, ActionTransition, LifelineKind};
use crate::env::{GameEnv, RollContext, shuffle};
use crate::state::{GameState, HiddenOptions, INCORRECT_OPTION_COUNT};
use crate::validation::{check_invariants, validate_game_state, validate_help_usage};

/// Number of wrong options a card eliminates (1, 2 or 3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct CardValue(u8);

impl CardValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CardValue {
    type Error = ActionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ActionError::InvalidCardValue(value))
        }
    }
}

impl From<CardValue> for u8 {
    fn from(value: CardValue) -> Self {
        value.0
    }
}

/// Card turned over by the player.
///
/// The deck holds the values 1 to 3 and a blank card; drawing the blank one
/// spends the lifeline without eliminating anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardDraw {
    Blank,
    Eliminate(CardValue),
}

impl CardDraw {
    /// Resolves a numeric strength, `0` meaning the blank card.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::InvalidCardValue` for strengths above 3.
    pub fn from_strength(strength: u8) -> Result<Self, ActionError> {
        match strength {
            0 => Ok(CardDraw::Blank),
            value => CardValue::try_from(value).map(CardDraw::Eliminate),
        }
    }

    pub fn strength(self) -> u8 {
        match self {
            CardDraw::Blank => 0,
            CardDraw::Eliminate(value) => value.get(),
        }
    }
}

/// Eliminates wrong options from the current question. One use per play-through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardsHelpAction {
    pub draw: CardDraw,
}

impl CardsHelpAction {
    pub fn new(draw: CardDraw) -> Self {
        Self { draw }
    }
}

impl ActionTransition for CardsHelpAction {
    type Error = ActionError;
    type Result = HiddenOptions;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        validate_help_usage(LifelineKind::Cards, state)
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let rng = env.rng()?;
        let question = validate_game_state(state)?;

        let mut candidates: ArrayVec<usize, INCORRECT_OPTION_COUNT> =
            question.incorrect_options().collect();
        shuffle(rng, state.roll_seed(RollContext::CardPick, 0), &mut candidates);

        let hidden: HiddenOptions = candidates
            .into_iter()
            .take(self.draw.strength() as usize)
            .collect();

        state.cards_help_used = true;
        state.hidden_options = hidden;
        Ok(hidden)
    }

    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state, env.config()?.max_skips())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnswerPolicy;
    use crate::state::{Difficulty, Question};
    use crate::test_helpers::{Fixture, state};

    fn run(
        draw: CardDraw,
        state: &mut GameState,
        fixture: &Fixture,
    ) -> Result<HiddenOptions, ActionError> {
        let action = CardsHelpAction::new(draw);
        let env = fixture.env();
        action.pre_validate(state, &env)?;
        let hidden = action.apply(state, &env)?;
        action.post_validate(state, &env)?;
        Ok(hidden)
    }

    fn eliminate(value: u8) -> CardDraw {
        CardDraw::from_strength(value).unwrap()
    }

    #[test]
    fn hides_requested_number_of_wrong_options() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        let mut state = state(5);

        let hidden = run(eliminate(2), &mut state, &fixture).unwrap();

        assert_eq!(hidden.count(), 2);
        assert!(!hidden.hides(2));
        assert_eq!(state.hidden_options, hidden);
        assert!(state.cards_help_used);
    }

    #[test]
    fn second_use_is_rejected() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        let mut state = state(5);
        let hidden = run(eliminate(2), &mut state, &fixture).unwrap();

        assert_eq!(
            run(eliminate(1), &mut state, &fixture),
            Err(ActionError::CardsAlreadyUsed)
        );
        assert_eq!(state.hidden_options, hidden);
    }

    #[test]
    fn three_cards_leave_only_the_correct_option() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        for seed in 0..200 {
            let mut state = state(5);
            state.game_seed = seed;
            let hidden = run(eliminate(3), &mut state, &fixture).unwrap();
            assert_eq!(hidden.indices().collect::<Vec<_>>(), vec![0, 1, 3]);
        }
    }

    #[test]
    fn never_hides_the_correct_option() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        for seed in 0..500 {
            for value in 1..=3 {
                let mut state = state(5);
                state.game_seed = seed;
                let hidden = run(eliminate(value), &mut state, &fixture).unwrap();
                assert_eq!(hidden.count(), value as usize);
                assert!(!hidden.hides(2), "seed {seed} value {value}");
            }
        }
    }

    #[test]
    fn blank_card_spends_the_lifeline() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        let mut state = state(5);

        let hidden = run(CardDraw::Blank, &mut state, &fixture).unwrap();

        assert!(hidden.is_empty());
        assert!(state.cards_help_used);
    }

    #[test]
    fn card_values_outside_range_are_invalid() {
        assert_eq!(CardDraw::from_strength(0), Ok(CardDraw::Blank));
        assert_eq!(CardDraw::from_strength(3).map(CardDraw::strength), Ok(3));
        assert_eq!(
            CardDraw::from_strength(4),
            Err(ActionError::InvalidCardValue(4))
        );
        assert_eq!(CardValue::try_from(0), Err(ActionError::InvalidCardValue(0)));
    }

    #[test]
    fn malformed_question_is_refused_without_changes() {
        let fixture = Fixture::new(AnswerPolicy::Strict, 5);
        let bad = Question::new(1, "Q", ["a", "b", "c", "d"], 5, Difficulty::Easy);
        let mut state = GameState::new(vec![bad], 3, 9);
        let before = state.clone();

        assert!(matches!(
            run(eliminate(1), &mut state, &fixture),
            Err(ActionError::MalformedQuestion { id: 1, .. })
        ));
        let env = fixture.env();
        assert!(matches!(
            CardsHelpAction::new(eliminate(3)).apply(&mut state, &env),
            Err(ActionError::MalformedQuestion { .. })
        ));
        assert_eq!(state, before);
    }
}
