//! Input processing for the CLI client.
//!
//! This module owns the line-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings.

use quiz_core::OPTION_COUNT;

/// High-level outcome of processing one input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Answer with the option at this index (0-based).
    Answer(usize),
    Skip,
    University,
    Cards,
    /// Print the debug state report.
    Report,
    Reset,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("type a letter from A to D, or 'h' for help")]
    Empty,

    #[error("unknown command '{0}', type 'h' for help")]
    Unknown(String),
}

/// Converts a raw input line into a command.
///
/// Options are accepted as letters (`a`-`d`) or numbers (`1`-`4`).
pub fn parse_command(line: &str) -> Result<PlayerCommand, InputError> {
    let word = line.trim().to_ascii_lowercase();
    if word.is_empty() {
        return Err(InputError::Empty);
    }

    if let Some(index) = option_index(&word) {
        return Ok(PlayerCommand::Answer(index));
    }

    let command = match word.as_str() {
        "s" | "skip" | "pular" => PlayerCommand::Skip,
        "u" | "uni" | "university" | "universitarios" => PlayerCommand::University,
        "k" | "cards" | "cartas" => PlayerCommand::Cards,
        "r" | "reset" | "restart" => PlayerCommand::Reset,
        "?" | "h" | "help" => PlayerCommand::Help,
        "debug" | "report" => PlayerCommand::Report,
        "q" | "quit" | "exit" => PlayerCommand::Quit,
        _ => return Err(InputError::Unknown(word)),
    };
    Ok(command)
}

fn option_index(word: &str) -> Option<usize> {
    let mut chars = word.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let index = match first {
        'a'..='d' => first as usize - 'a' as usize,
        '1'..='4' => first as usize - '1' as usize,
        _ => return None,
    };
    (index < OPTION_COUNT).then_some(index)
}

pub const HELP: &str = "\
Commands:
  a-d or 1-4   answer with that option
  s            skip the question
  u            ask the university students
  k            draw a card to eliminate wrong options
  r            start a new game
  debug        print the game state report
  q            quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_pick_options() {
        assert_eq!(parse_command("a"), Ok(PlayerCommand::Answer(0)));
        assert_eq!(parse_command(" D \n"), Ok(PlayerCommand::Answer(3)));
        assert_eq!(parse_command("2"), Ok(PlayerCommand::Answer(1)));
        assert_eq!(parse_command("4"), Ok(PlayerCommand::Answer(3)));
    }

    #[test]
    fn out_of_range_options_are_unknown() {
        assert_eq!(parse_command("e"), Err(InputError::Unknown("e".into())));
        assert_eq!(parse_command("5"), Err(InputError::Unknown("5".into())));
        assert_eq!(parse_command("0"), Err(InputError::Unknown("0".into())));
    }

    #[test]
    fn lifelines_and_controls() {
        assert_eq!(parse_command("skip"), Ok(PlayerCommand::Skip));
        assert_eq!(parse_command("U"), Ok(PlayerCommand::University));
        assert_eq!(parse_command("cartas"), Ok(PlayerCommand::Cards));
        assert_eq!(parse_command("r"), Ok(PlayerCommand::Reset));
        assert_eq!(parse_command("debug"), Ok(PlayerCommand::Report));
        assert_eq!(parse_command("?"), Ok(PlayerCommand::Help));
        assert_eq!(parse_command("quit"), Ok(PlayerCommand::Quit));
    }

    #[test]
    fn cards_key_does_not_clash_with_an_option() {
        assert_eq!(parse_command("k"), Ok(PlayerCommand::Cards));
        assert_eq!(parse_command("CARDS"), Ok(PlayerCommand::Cards));
        assert_eq!(parse_command("c"), Ok(PlayerCommand::Answer(2)));
    }

    #[test]
    fn blank_line_is_an_error() {
        assert_eq!(parse_command("   "), Err(InputError::Empty));
    }
}
