//! Content loaders for reading game data from files.
//!
//! Question catalogs are accepted as RON, JSON or TOML (picked by file
//! extension). Game rules come from a TOML config file.

pub mod config;
pub mod factory;
pub mod questions;

pub use config::{ConfigLoader, ContentConfig};
pub use factory::ContentFactory;
pub use questions::{ContentFormat, QuestionCatalog, QuestionLoader, QuestionRecord};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
