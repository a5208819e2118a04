//! Question catalog loader.

use std::path::Path;
use std::str::FromStr;

use quiz_core::{Difficulty, Prize, PrizeTable, Question, QuestionIssue, validate_question};
use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::loaders::{LoadResult, read_file};

/// Serialization format of a catalog file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ContentFormat {
    Ron,
    Json,
    Toml,
}

impl ContentFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| anyhow::anyhow!("No file extension on {}", path.display()))?;
        ContentFormat::from_str(extension)
            .map_err(|_| anyhow::anyhow!("Unsupported content format '{}'", extension))
    }
}

/// A question as written in a catalog file.
///
/// The tier is kept as raw text so the linter can report unknown values
/// instead of failing the whole parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct: u8,
    pub level: String,
}

impl QuestionRecord {
    pub fn difficulty(&self) -> Result<Difficulty, QuestionIssue> {
        Difficulty::from_str(self.level.trim())
            .map_err(|_| QuestionIssue::UnknownDifficulty(self.level.clone()))
    }

    /// Typed question, or the first blocking issue.
    ///
    /// A record only becomes playable once [`validate_question`] finds
    /// nothing wrong with it.
    pub fn to_question(&self) -> Result<Question, QuestionIssue> {
        let difficulty = self.difficulty()?;
        let question = Question::new(
            self.id,
            self.question.clone(),
            self.options.iter().cloned(),
            self.correct,
            difficulty,
        );
        match validate_question(&question).into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(question),
        }
    }
}

/// Catalog file structure: questions plus the prize ladder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionCatalog {
    pub questions: Vec<QuestionRecord>,
    #[serde(default)]
    pub prizes: Vec<Prize>,
}

impl QuestionCatalog {
    /// Converts every record, failing on the first one that cannot be typed.
    pub fn typed_questions(&self) -> LoadResult<Vec<Question>> {
        self.questions
            .iter()
            .map(|record| {
                record
                    .to_question()
                    .map_err(|e| anyhow::anyhow!("Question {}: {}", record.id, e))
            })
            .collect()
    }

    pub fn prize_table(&self) -> PrizeTable {
        PrizeTable::new(self.prizes.clone())
    }

    /// Builds a bank with the default selection policy.
    pub fn into_bank(self) -> LoadResult<QuestionBank> {
        let questions = self.typed_questions()?;
        Ok(QuestionBank::new(questions, self.prize_table()))
    }
}

/// Loader for question catalogs.
pub struct QuestionLoader;

impl QuestionLoader {
    /// Load a catalog, picking the parser from the file extension.
    pub fn load(path: &Path) -> LoadResult<QuestionCatalog> {
        let format = ContentFormat::from_path(path)?;
        let content = read_file(path)?;
        Self::parse(&content, format)
    }

    /// Parse catalog text in the given format.
    pub fn parse(content: &str, format: ContentFormat) -> LoadResult<QuestionCatalog> {
        let catalog = match format {
            ContentFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse question catalog RON: {}", e))?,
            ContentFormat::Json => serde_json::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse question catalog JSON: {}", e))?,
            ContentFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse question catalog TOML: {}", e))?,
        };
        Ok(catalog)
    }
}
