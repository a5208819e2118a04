//! Line-based game loop.
//!
//! [`QuizApp`] renders the session to a writer, reads commands from a reader
//! and forwards them to the [`QuizSession`]. It owns everything purely
//! visual: the card deck draw, the reveal pause and the wrong-answer notice
//! display.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use quiz_core::{
    CardDraw, GameStatus, LifelineKind, QuestionBankLoader, UniversityHelpResult, option_label,
    validate_help_usage,
};
use quiz_runtime::{QuizSession, SessionError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::input::{HELP, PlayerCommand, parse_command};

/// Whether the loop keeps reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct QuizApp<L, I, O>
where
    L: QuestionBankLoader,
{
    session: QuizSession<L>,
    input: I,
    output: O,
    deck: StdRng,
    reveal_delay: Duration,
}

impl<L, I, O> QuizApp<L, I, O>
where
    L: QuestionBankLoader,
    I: BufRead,
    O: Write,
{
    pub fn new(session: QuizSession<L>, input: I, output: O, deck_seed: u64) -> Self {
        Self {
            session,
            input,
            output,
            deck: StdRng::seed_from_u64(deck_seed),
            reveal_delay: Duration::ZERO,
        }
    }

    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    pub fn session(&self) -> &QuizSession<L> {
        &self.session
    }

    /// Runs until the player quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Show do Milhão! Type 'h' for help.")?;
        self.render()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("Input closed");
                break;
            }

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(error) => {
                    writeln!(self.output, "{error}")?;
                    continue;
                }
            };

            if self.handle(command)? == Flow::Quit {
                break;
            }
        }

        writeln!(self.output, "Bye!")?;
        Ok(())
    }

    fn handle(&mut self, command: PlayerCommand) -> Result<Flow> {
        tracing::debug!(?command, "Player command");

        if self.session.state().is_over()
            && !matches!(
                command,
                PlayerCommand::Reset | PlayerCommand::Quit | PlayerCommand::Help | PlayerCommand::Report
            )
        {
            writeln!(self.output, "The game is over. Type 'r' to play again or 'q' to quit.")?;
            return Ok(Flow::Continue);
        }

        match command {
            PlayerCommand::Answer(index) => self.answer(index)?,
            PlayerCommand::Skip => match self.session.skip_question() {
                Ok(()) => {
                    writeln!(self.output, "Question skipped.")?;
                    self.render()?;
                }
                Err(error) => self.refuse(&error)?,
            },
            PlayerCommand::University => match self.session.use_university_help() {
                Ok(poll) => self.render_poll(&poll)?,
                Err(error) => self.refuse(&error)?,
            },
            PlayerCommand::Cards => self.draw_card()?,
            PlayerCommand::Report => writeln!(self.output, "{}", self.session.report())?,
            PlayerCommand::Reset => {
                self.session.reset_game()?;
                writeln!(self.output, "New game!")?;
                self.render()?;
            }
            PlayerCommand::Help => writeln!(self.output, "{HELP}")?,
            PlayerCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Reveals the verdict first, then commits the answer.
    fn answer(&mut self, index: usize) -> Result<()> {
        let preview = match self.session.preview_answer(index) {
            Ok(preview) => preview,
            Err(error) => return self.refuse(&error),
        };

        writeln!(self.output, "Final answer: {}.", option_label(index))?;
        if !self.reveal_delay.is_zero() {
            self.output.flush()?;
            thread::sleep(self.reveal_delay);
        }

        if preview.correct {
            writeln!(self.output, "Correct!")?;
        } else {
            writeln!(
                self.output,
                "Wrong! The answer was {}.",
                option_label(preview.correct_index)
            )?;
        }

        self.session.answer_question(index)?;

        if self.session.wrong_answer_notice() {
            writeln!(self.output, "No prize for this one. Moving on.")?;
            self.session.dismiss_wrong_answer_notice();
        }
        self.render()
    }

    fn draw_card(&mut self) -> Result<()> {
        if let Err(error) = validate_help_usage(LifelineKind::Cards, self.session.state()) {
            writeln!(self.output, "Not allowed: {error}")?;
            return Ok(());
        }

        let draw = CardDraw::from_strength(self.deck.gen_range(0..=3))?;
        match draw {
            CardDraw::Blank => writeln!(self.output, "You drew the blank card. Nothing eliminated.")?,
            CardDraw::Eliminate(value) => writeln!(self.output, "You drew a {}.", value.get())?,
        }

        match self.session.play_card(draw) {
            Ok(_) => self.render(),
            Err(error) => self.refuse(&error),
        }
    }

    fn refuse(&mut self, error: &SessionError) -> Result<()> {
        writeln!(self.output, "Not allowed: {error}")?;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let state = self.session.state();

        if state.is_over() {
            let prize = self
                .session
                .current_prize()
                .map(ToString::to_string)
                .unwrap_or_else(|| "nothing".to_owned());
            match state.status {
                GameStatus::Won => writeln!(self.output, "You won! Prize: {prize}")?,
                _ => writeln!(self.output, "Game over. You leave with: {prize}")?,
            }
            writeln!(self.output, "Type 'r' to play again or 'q' to quit.")?;
            return Ok(());
        }

        let Some(question) = state.current_question() else {
            return Ok(());
        };

        writeln!(self.output)?;
        writeln!(
            self.output,
            "Question {} of {} ({})",
            state.current_index + 1,
            state.total_questions(),
            question.difficulty
        )?;
        writeln!(
            self.output,
            "Playing for {} | Secured: {}",
            self.session
                .next_prize()
                .map(ToString::to_string)
                .unwrap_or_default(),
            self.session
                .current_prize()
                .map(ToString::to_string)
                .unwrap_or_else(|| "nothing".to_owned())
        )?;
        writeln!(self.output, "{}", question.text)?;
        for (index, option) in question.options.iter().enumerate() {
            if state.is_option_hidden(index) {
                writeln!(self.output, "  {}) ----", option_label(index))?;
            } else {
                writeln!(self.output, "  {}) {}", option_label(index), option)?;
            }
        }

        let mut lifelines = Vec::new();
        if state.skips_remaining > 0 {
            lifelines.push(format!("[s]kip x{}", state.skips_remaining));
        }
        if !state.university_help_used {
            lifelines.push("[u]niversity".to_owned());
        }
        if !state.cards_help_used {
            lifelines.push("[k] cards".to_owned());
        }
        if lifelines.is_empty() {
            writeln!(self.output, "No lifelines left.")?;
        } else {
            writeln!(self.output, "Lifelines: {}", lifelines.join("  "))?;
        }
        Ok(())
    }

    fn render_poll(&mut self, poll: &UniversityHelpResult) -> Result<()> {
        writeln!(self.output, "The students voted:")?;
        for (index, share) in poll.percentages.iter().enumerate() {
            let bar = "#".repeat(usize::from(*share) / 5);
            writeln!(self.output, "  {}) {:>3}% {}", option_label(index), share, bar)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_content::{QuestionBank, SelectionPolicy};
    use quiz_core::{AnswerPolicy, Difficulty, GameConfig, Prize, Question};
    use std::io::Cursor;

    fn bank() -> QuestionBank {
        let questions = vec![
            Question::new(1, "One?", ["w", "x", "y", "z"], 0, Difficulty::Easy),
            Question::new(2, "Two?", ["w", "x", "y", "z"], 3, Difficulty::Medium),
        ];
        QuestionBank::new(questions, vec![Prize::Amount(500), Prize::Amount(1_000)].into())
            .with_selection(SelectionPolicy::InOrder)
    }

    fn play(script: &str, policy: AnswerPolicy) -> (String, GameStatus) {
        let session =
            QuizSession::with_pcg(bank(), GameConfig::with_policy(policy), 7).unwrap();
        let mut output = Vec::new();
        let mut app = QuizApp::new(session, Cursor::new(script.to_owned()), &mut output, 1);
        app.run().unwrap();
        let status = app.session().state().status;
        drop(app);
        (String::from_utf8(output).unwrap(), status)
    }

    #[test]
    fn winning_game() {
        let (output, status) = play("a\nd\nq\n", AnswerPolicy::Strict);

        assert_eq!(status, GameStatus::Won);
        assert!(output.contains("Question 1 of 2 (easy)"));
        assert!(output.contains("Correct!"));
        assert!(output.contains("You won! Prize: 1,000"));
        assert!(output.ends_with("Bye!\n"));
    }

    #[test]
    fn wrong_answer_reveals_and_ends() {
        let (output, status) = play("b\na\n", AnswerPolicy::Strict);

        assert_eq!(status, GameStatus::Lost);
        assert!(output.contains("Wrong! The answer was A."));
        assert!(output.contains("Game over. You leave with: nothing"));
        assert!(output.contains("The game is over."));
    }

    #[test]
    fn lenient_notice_is_shown_once() {
        let (output, status) = play("b\n", AnswerPolicy::Lenient);

        assert_eq!(status, GameStatus::Playing);
        assert_eq!(output.matches("No prize for this one").count(), 1);
        assert!(output.contains("Question 2 of 2"));
    }

    #[test]
    fn lifelines_and_bad_input() {
        let (output, status) = play("zz\nu\nu\nk\ns\n", AnswerPolicy::Strict);

        assert!(output.contains("[k] cards"));
        assert!(output.contains("You drew"));
        assert!(!output.contains("Final answer"));
        assert_eq!(status, GameStatus::Playing);
        assert!(output.contains("unknown command 'zz'"));
        assert!(output.contains("The students voted:"));
        assert!(output.contains("Not allowed: university help rejected"));
        assert!(output.contains("Question skipped."));
    }

    #[test]
    fn reset_starts_over() {
        let (output, status) = play("b\nr\na\n", AnswerPolicy::Strict);

        assert!(output.contains("New game!"));
        assert_eq!(status, GameStatus::Playing);
    }
}
