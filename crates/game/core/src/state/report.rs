use core::fmt;

use super::GameState;

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Human-readable dump of a [`GameState`], for debugging and logs.
#[derive(Clone, Copy, Debug)]
pub struct StateReport<'a> {
    state: &'a GameState,
}

impl<'a> StateReport<'a> {
    pub(super) fn new(state: &'a GameState) -> Self {
        Self { state }
    }
}

impl fmt::Display for StateReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        writeln!(f, "=== GAME STATE REPORT ===")?;
        writeln!(
            f,
            "Current question: {} of {}",
            state.current_index + 1,
            state.total_questions()
        )?;
        writeln!(f, "Score: {}", state.score)?;
        writeln!(f, "Skips remaining: {}", state.skips_remaining)?;
        writeln!(f, "University help used: {}", yes_no(state.university_help_used))?;
        writeln!(f, "Cards used: {}", yes_no(state.cards_help_used))?;
        writeln!(f, "Game over: {}", yes_no(state.is_over()))?;
        writeln!(f, "Won: {}", yes_no(state.won()))?;

        write!(f, "Hidden options: [")?;
        for (position, index) in state.hidden_options.indices().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        writeln!(f, "]")?;

        match state.current_question() {
            Some(question) => {
                writeln!(f, "Active question: yes")?;
                writeln!(f, "Question text: \"{}\"", question.text)?;
                writeln!(f, "Correct answer: {}", question.correct_index)?;
                write!(f, "Difficulty: {}", question.difficulty)
            }
            None => write!(f, "Active question: no"),
        }
    }
}
