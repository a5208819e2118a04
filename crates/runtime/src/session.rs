//! Session facade over the quiz engine.
//!
//! A [`QuizSession`] owns one play-through at a time: the authoritative
//! [`GameState`], the static oracles and the question-bank collaborator used
//! to draw a new sequence on reset. Every action goes through
//! [`GameEngine`], so a rejected action leaves the state untouched.

use quiz_core::{
    Action, ActionResult, AnswerOutcome, CardDraw, ExecutionOutcome, GameConfig, GameEngine,
    GameError, GameState, HiddenOptions, LifelineKind, PcgRng, Prize, PrizeTable,
    QuestionBankLoader, RngOracle, StateReport, UniversityHelpResult, compute_seed,
    validate_card_value, validate_help_usage,
};

use crate::api::{Result, SessionError};
use crate::oracle::OracleManager;

/// Seed context for the question-bank draw of a generation.
const SEQUENCE_SEED_CONTEXT: u32 = 0x5e9;
/// Seed context for the in-game rolls of a generation.
const GAME_SEED_CONTEXT: u32 = 0x9a3e;

/// One player's quiz, from the first question to reset.
pub struct QuizSession<L, R = PcgRng>
where
    L: QuestionBankLoader,
    R: RngOracle,
{
    loader: L,
    oracles: OracleManager<R>,
    root_seed: u64,
    /// Number of resets so far. Mixed into every derived seed.
    generation: u64,
    state: GameState,
    wrong_answer_notice: bool,
}

impl<L> QuizSession<L, PcgRng>
where
    L: QuestionBankLoader,
{
    /// Starts a session with the default PCG random source.
    pub fn with_pcg(loader: L, config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(loader, PcgRng, config, seed)
    }
}

impl<L, R> QuizSession<L, R>
where
    L: QuestionBankLoader,
    R: RngOracle,
{
    /// Starts a session and draws the first question sequence.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Loader` if the bank cannot produce a sequence.
    pub fn new(loader: L, rng: R, config: GameConfig, seed: u64) -> Result<Self> {
        let oracles = OracleManager::new(config, loader.prize_table(), rng);
        let state = Self::fresh_state(&loader, &oracles, seed, 0)?;

        tracing::info!(
            seed,
            questions = state.total_questions(),
            policy = %oracles.config().answer_policy,
            prizes = oracles.prizes().len(),
            "Quiz session started"
        );

        Ok(Self {
            loader,
            oracles,
            root_seed: seed,
            generation: 0,
            state,
            wrong_answer_notice: false,
        })
    }

    fn fresh_state(
        loader: &L,
        oracles: &OracleManager<R>,
        root_seed: u64,
        generation: u64,
    ) -> Result<GameState> {
        let sequence_seed = compute_seed(root_seed, generation, SEQUENCE_SEED_CONTEXT);
        let game_seed = compute_seed(root_seed, generation, GAME_SEED_CONTEXT);

        let questions = loader.load_questions(oracles.rng(), sequence_seed)?;
        Ok(GameState::new(
            questions,
            oracles.config().max_skips,
            game_seed,
        ))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        self.oracles.config()
    }

    pub fn prizes(&self) -> &PrizeTable {
        self.oracles.prizes()
    }

    /// Number of resets since the session started.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Debug report of the current state.
    pub fn report(&self) -> StateReport<'_> {
        self.state.report()
    }

    /// Whether the lifeline can be used right now.
    pub fn can_use(&self, kind: LifelineKind) -> bool {
        validate_help_usage(kind, &self.state).is_ok()
    }

    /// Answers the question on the board.
    ///
    /// A wrong answer that keeps the game going raises the wrong-answer notice.
    pub fn answer_question(&mut self, option: usize) -> Result<AnswerOutcome> {
        let action = Action::answer(option);
        let outcome = match self.execute(&action)?.action_result {
            ActionResult::Answer(outcome) => outcome,
            _ => return Err(unexpected(&action)),
        };

        if outcome.shows_wrong_answer_notice() {
            self.wrong_answer_notice = true;
        }
        if outcome.status.is_over() {
            tracing::info!(
                status = %outcome.status,
                score = self.state.score,
                prize = %self.current_prize().map(ToString::to_string).unwrap_or_default(),
                "Game over"
            );
        }
        Ok(outcome)
    }

    /// Outcome `answer_question(option)` would have, without applying it.
    pub fn preview_answer(&self, option: usize) -> Result<AnswerOutcome> {
        let action = Action::answer(option);
        let outcome = GameEngine::preview(&self.state, self.oracles.as_game_env(), &action)?;
        match outcome.action_result {
            ActionResult::Answer(outcome) => Ok(outcome),
            _ => Err(unexpected(&action)),
        }
    }

    pub fn skip_question(&mut self) -> Result<()> {
        let action = Action::skip();
        let outcome = self.execute(&action)?;
        if outcome.status.is_over() {
            tracing::info!(status = %outcome.status, score = self.state.score, "Game over after skip");
        }
        Ok(())
    }

    pub fn use_university_help(&mut self) -> Result<UniversityHelpResult> {
        let action = Action::university_help();
        match self.execute(&action)?.action_result {
            ActionResult::UniversityHelp(poll) => Ok(poll),
            _ => Err(unexpected(&action)),
        }
    }

    /// Plays the cards lifeline with a card value of 1, 2 or 3.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidInput` for any other value, leaving the
    /// lifeline unused.
    pub fn use_cards_help(&mut self, card_value: u8) -> Result<HiddenOptions> {
        let value = validate_card_value(card_value).inspect_err(|error| {
            tracing::warn!(card_value, code = error.error_code(), "Card value rejected");
        })?;
        self.play_card(CardDraw::Eliminate(value))
    }

    /// Plays the cards lifeline with any card from the deck, blank included.
    pub fn play_card(&mut self, draw: CardDraw) -> Result<HiddenOptions> {
        let action = Action::cards_help(draw);
        match self.execute(&action)?.action_result {
            ActionResult::CardsHelp(hidden) => Ok(hidden),
            _ => Err(unexpected(&action)),
        }
    }

    /// Starts over with a freshly drawn sequence and all lifelines restored.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Loader` if the bank cannot produce a sequence;
    /// the previous game is kept in that case.
    pub fn reset_game(&mut self) -> Result<()> {
        let generation = self.generation + 1;
        let state = Self::fresh_state(&self.loader, &self.oracles, self.root_seed, generation)?;

        self.state = state;
        self.generation = generation;
        self.wrong_answer_notice = false;

        tracing::info!(
            generation,
            questions = self.state.total_questions(),
            "Game reset"
        );
        Ok(())
    }

    /// Prize already secured, `None` before the first correct answer.
    pub fn current_prize(&self) -> Option<&Prize> {
        self.prizes().current_prize(self.state.score)
    }

    /// Prize for the next correct answer, capped at the top of the ladder.
    pub fn next_prize(&self) -> Option<&Prize> {
        self.prizes().next_prize(self.state.score)
    }

    pub fn wrong_answer_notice(&self) -> bool {
        self.wrong_answer_notice
    }

    pub fn set_wrong_answer_notice(&mut self, visible: bool) {
        self.wrong_answer_notice = visible;
    }

    pub fn dismiss_wrong_answer_notice(&mut self) {
        self.wrong_answer_notice = false;
    }

    fn execute(&mut self, action: &Action) -> Result<ExecutionOutcome> {
        let env = self.oracles.as_game_env();
        match GameEngine::new(&mut self.state).execute(env, action) {
            Ok(outcome) => {
                tracing::debug!(
                    action = action.as_str(),
                    nonce = outcome.nonce,
                    status = %outcome.status,
                    index = self.state.current_index,
                    score = self.state.score,
                    "Action applied"
                );
                Ok(outcome)
            }
            Err(error) => {
                tracing::warn!(
                    action = action.as_str(),
                    phase = error.phase().as_str(),
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "Action rejected: {}",
                    error
                );
                Err(SessionError::Rejected(error))
            }
        }
    }
}

fn unexpected(action: &Action) -> SessionError {
    SessionError::UnexpectedResult {
        action: action.as_str(),
    }
}
