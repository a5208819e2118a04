//! Subcommands of the `quiz` binary.
mod lint;
mod play;

pub use lint::Lint;
pub use play::Play;
