//! CLI configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use quiz_core::AnswerPolicy;

/// Settings that can come from the environment or a `.env` file.
///
/// Command-line flags take precedence over every field.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub answer_policy: Option<AnswerPolicy>,
    pub log_filter: Option<String>,
    /// Pause between revealing the correct option and moving on.
    pub reveal_delay: Duration,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `QUIZ_DATA_DIR` - Directory with `questions.ron` and `config.toml` (default: built-in catalog)
    /// - `QUIZ_SEED` - Root seed of the session (default: random)
    /// - `QUIZ_ANSWER_POLICY` - `strict` or `lenient` (default: from `config.toml`)
    /// - `QUIZ_LOG` - Log filter directive, falls back to `RUST_LOG` (default: `warn`)
    /// - `QUIZ_REVEAL_MS` - Answer reveal pause in milliseconds (default: 0)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("QUIZ_DATA_DIR").ok().map(PathBuf::from);
        config.seed = read_env::<u64>("QUIZ_SEED");
        config.answer_policy = read_env::<AnswerPolicy>("QUIZ_ANSWER_POLICY");
        config.log_filter = env::var("QUIZ_LOG").or_else(|_| env::var("RUST_LOG")).ok();

        if let Some(millis) = read_env::<u64>("QUIZ_REVEAL_MS") {
            config.reveal_delay = Duration::from_millis(millis);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
