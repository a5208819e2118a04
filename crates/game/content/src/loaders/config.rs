//! Game configuration loader.

use std::path::Path;

use quiz_core::GameConfig;
use serde::{Deserialize, Serialize};

use crate::bank::SelectionPolicy;
use crate::loaders::{LoadResult, read_file};

/// Everything `config.toml` carries: the core rules plus the content-side
/// selection policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(flatten)]
    pub game: GameConfig,
    #[serde(default)]
    pub selection: SelectionPolicy,
}

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing the game rules and selection policy
    pub fn load(path: &Path) -> LoadResult<ContentConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ContentConfig> {
        let config: ContentConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::AnswerPolicy;

    #[test]
    fn parses_full_config() {
        let config = ConfigLoader::parse(
            r#"
max_skips = 2
answer_policy = "lenient"

[selection]
mode = "shuffled"
limit = 10
"#,
        )
        .unwrap();

        assert_eq!(config.game.max_skips, 2);
        assert_eq!(config.game.answer_policy, AnswerPolicy::Lenient);
        assert_eq!(config.selection, SelectionPolicy::Shuffled { limit: Some(10) });
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, ContentConfig::default());
        assert_eq!(config.game.max_skips, GameConfig::DEFAULT_MAX_SKIPS);
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(ConfigLoader::parse("answer_policy = \"forgiving\"").is_err());
    }
}
