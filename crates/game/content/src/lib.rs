//! Data-driven quiz content and loaders.
//!
//! This crate houses the static content of the game and provides loaders for
//! RON/JSON/TOML data files:
//! - Question catalogs and the prize ladder
//! - Game configuration (data-driven via TOML)
//! - The [`QuestionBank`] that draws each play-through's question sequence
//! - A catalog linter
//!
//! Content is consumed through the `QuestionBankLoader` collaborator and never
//! changes during a play-through.

pub mod bank;

#[cfg(feature = "loaders")]
pub mod lint;
#[cfg(feature = "loaders")]
pub mod loaders;

pub use bank::{DEFAULT_PER_DIFFICULTY, QuestionBank, SelectionPolicy};

#[cfg(feature = "loaders")]
pub use lint::{LintFinding, LintReport, lint_catalog};
#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentConfig, ContentFactory, ContentFormat, LoadResult, QuestionCatalog,
    QuestionLoader, QuestionRecord,
};

/// Catalog shipped with the crate.
#[cfg(feature = "loaders")]
pub const BUILTIN_CATALOG: &str = include_str!("../data/questions.ron");

/// Parses the shipped catalog into a bank with the default selection policy.
#[cfg(feature = "loaders")]
pub fn builtin_bank() -> LoadResult<QuestionBank> {
    QuestionLoader::parse(BUILTIN_CATALOG, ContentFormat::Ron)?.into_bank()
}

#[cfg(all(test, feature = "loaders"))]
mod tests {
    use super::*;
    use quiz_core::{Difficulty, PcgRng, QuestionBankLoader};

    #[test]
    fn builtin_catalog_is_clean_and_playable() {
        let catalog = QuestionLoader::parse(BUILTIN_CATALOG, ContentFormat::Ron).unwrap();
        let report = lint_catalog(&catalog, SelectionPolicy::default());
        assert!(report.is_clean(), "{:#?}", report);

        let bank = builtin_bank().unwrap();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(bank.count_by_difficulty(difficulty) >= DEFAULT_PER_DIFFICULTY);
        }
        let sequence = bank.load_questions(&PcgRng, 1).unwrap();
        assert_eq!(sequence.len(), 15);
        assert_eq!(bank.prize_table().len(), 15);
    }
}
