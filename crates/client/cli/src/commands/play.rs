//! Play an interactive game on stdin/stdout.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quiz_content::{ContentConfig, ContentFactory, QuestionBank, builtin_bank};
use quiz_core::AnswerPolicy;
use quiz_runtime::QuizSession;

use crate::app::QuizApp;
use crate::config::CliConfig;

/// Play a game
#[derive(Parser, Default)]
pub struct Play {
    /// Directory with `questions.ron` (or .json / .toml) and `config.toml`
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Root seed; the same seed replays the same game
    #[arg(short, long, value_name = "SEED")]
    seed: Option<u64>,

    /// Wrong answers forfeit the question instead of ending the game
    #[arg(long)]
    lenient: bool,
}

impl Play {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let (bank, mut content) = match self.data_dir.as_ref().or(config.data_dir.as_ref()) {
            Some(dir) => {
                let factory = ContentFactory::new(dir);
                let content = factory.load_config()?;
                let bank = factory
                    .load_bank()
                    .with_context(|| format!("Failed to load content from {}", dir.display()))?;
                (bank, content)
            }
            None => (builtin_bank()?, ContentConfig::default()),
        };

        if self.lenient {
            content.game.answer_policy = AnswerPolicy::Lenient;
        } else if let Some(policy) = config.answer_policy {
            content.game.answer_policy = policy;
        }

        let seed = self.seed.or(config.seed).unwrap_or_else(rand::random);
        tracing::info!(seed, questions = bank.len(), "Loaded question bank");

        let session: QuizSession<QuestionBank> = QuizSession::with_pcg(bank, content.game, seed)
            .context("Failed to start a game")?;

        let stdin = io::stdin();
        let mut app = QuizApp::new(session, stdin.lock(), io::stdout(), seed)
            .with_reveal_delay(config.reveal_delay);
        app.run()
    }
}
