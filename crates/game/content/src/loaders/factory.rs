//! Content factory for building the question bank from data files.

use std::path::{Path, PathBuf};

use crate::bank::QuestionBank;
use crate::loaders::{ConfigLoader, ContentConfig, LoadResult, QuestionCatalog, QuestionLoader};

/// Catalog file stems tried in order.
const CATALOG_FILES: [&str; 3] = ["questions.ron", "questions.json", "questions.toml"];

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml       (optional)
/// └── questions.ron     (or questions.json / questions.toml)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<ContentConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(ContentConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Path of the first catalog file present in the data directory.
    pub fn catalog_path(&self) -> LoadResult<PathBuf> {
        CATALOG_FILES
            .iter()
            .map(|name| self.data_dir.join(name))
            .find(|path| path.exists())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No question catalog ({}) in {}",
                    CATALOG_FILES.join(", "),
                    self.data_dir.display()
                )
            })
    }

    /// Load the raw question catalog.
    pub fn load_catalog(&self) -> LoadResult<QuestionCatalog> {
        QuestionLoader::load(&self.catalog_path()?)
    }

    /// Load the catalog and wrap it in a bank using the configured selection policy.
    pub fn load_bank(&self) -> LoadResult<QuestionBank> {
        let config = self.load_config()?;
        let bank = self.load_catalog()?.into_bank()?;
        Ok(bank.with_selection(config.selection))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
