//! Lint a question catalog.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Parser;
use quiz_content::{
    BUILTIN_CATALOG, ContentFactory, ContentFormat, LintReport, QuestionCatalog, QuestionLoader,
    SelectionPolicy, lint_catalog,
};

use crate::config::CliConfig;

/// Check a question catalog for structural problems
#[derive(Parser)]
pub struct Lint {
    /// Catalog file or data directory (defaults to the built-in catalog)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
}

impl Lint {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let path = self.path.or_else(|| config.data_dir.clone());
        let (catalog, selection, source) = match path {
            Some(path) => load(&path)?,
            None => (
                QuestionLoader::parse(BUILTIN_CATALOG, ContentFormat::Ron)?,
                SelectionPolicy::default(),
                "built-in catalog".to_owned(),
            ),
        };

        let report = lint_catalog(&catalog, selection);
        print_report(&source, catalog.questions.len(), &report);

        if report.error_count() > 0 {
            bail!("{} error(s) in {}", report.error_count(), source);
        }
        Ok(())
    }
}

/// Directories use their `config.toml` selection; single files the default one.
fn load(path: &Path) -> Result<(QuestionCatalog, SelectionPolicy, String)> {
    if path.is_dir() {
        let factory = ContentFactory::new(path);
        let selection = factory.load_config()?.selection;
        let catalog_path = factory.catalog_path()?;
        let catalog = QuestionLoader::load(&catalog_path)?;
        Ok((catalog, selection, catalog_path.display().to_string()))
    } else {
        let catalog = QuestionLoader::load(path)?;
        Ok((catalog, SelectionPolicy::default(), path.display().to_string()))
    }
}

fn print_report(source: &str, questions: usize, report: &LintReport) {
    println!("{source}: {questions} question(s)");
    for finding in report.iter() {
        let level = if finding.is_warning() { "warning" } else { "error" };
        println!("  {level}: {finding}");
    }
    if report.is_clean() {
        println!("  no problems found");
    } else {
        println!(
            "  {} error(s), {} warning(s)",
            report.error_count(),
            report.warning_count()
        );
    }
}
