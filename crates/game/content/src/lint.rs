//! Structural checks over a question catalog.

use std::collections::HashMap;
use std::fmt;

use quiz_core::{Difficulty, Question, QuestionIssue, validate_question};
use strum::IntoEnumIterator;

use crate::bank::SelectionPolicy;
use crate::loaders::QuestionCatalog;

/// One problem found in a catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LintFinding {
    Question {
        position: usize,
        id: u32,
        issue: QuestionIssue,
    },
    DuplicateId {
        id: u32,
        first: usize,
        second: usize,
    },
    EmptyPrizeTable,
    EmptyCatalog,
    /// A stratified game will come up short in this tier.
    ThinTier {
        difficulty: Difficulty,
        found: usize,
        wanted: usize,
    },
}

impl LintFinding {
    /// Warnings do not prevent the catalog from being played.
    pub fn is_warning(&self) -> bool {
        matches!(self, LintFinding::ThinTier { .. })
    }
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintFinding::Question {
                position,
                id,
                issue,
            } => write!(f, "question #{position} (id {id}): {issue}"),
            LintFinding::DuplicateId { id, first, second } => {
                write!(f, "id {id} used by questions #{first} and #{second}")
            }
            LintFinding::EmptyPrizeTable => f.write_str("prize table is empty"),
            LintFinding::EmptyCatalog => f.write_str("catalog has no questions"),
            LintFinding::ThinTier {
                difficulty,
                found,
                wanted,
            } => write!(f, "only {found} {difficulty} questions, {wanted} wanted"),
        }
    }
}

/// Findings for a whole catalog, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LintReport {
    pub findings: Vec<LintFinding>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.findings.iter().filter(|f| !f.is_warning()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_warning()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LintFinding> {
        self.findings.iter()
    }
}

/// Lints every record, id uniqueness, the prize ladder and tier coverage.
///
/// Positions are 1-based so they match what an editor shows.
pub fn lint_catalog(catalog: &QuestionCatalog, selection: SelectionPolicy) -> LintReport {
    let mut findings = Vec::new();
    let mut seen: HashMap<u32, usize> = HashMap::new();
    let mut tiers: HashMap<Difficulty, usize> = HashMap::new();

    if catalog.questions.is_empty() {
        findings.push(LintFinding::EmptyCatalog);
    }

    for (offset, record) in catalog.questions.iter().enumerate() {
        let position = offset + 1;
        let difficulty = record.difficulty();

        let structural = Question::new(
            record.id,
            record.question.clone(),
            record.options.iter().cloned(),
            record.correct,
            *difficulty.as_ref().unwrap_or(&Difficulty::Easy),
        );
        let mut issues = validate_question(&structural);
        match difficulty {
            Ok(difficulty) => *tiers.entry(difficulty).or_default() += 1,
            Err(issue) => issues.push(issue),
        }
        findings.extend(issues.into_iter().map(|issue| LintFinding::Question {
            position,
            id: record.id,
            issue,
        }));

        if let Some(first) = seen.insert(record.id, position) {
            findings.push(LintFinding::DuplicateId {
                id: record.id,
                first,
                second: position,
            });
        }
    }

    if catalog.prizes.is_empty() {
        findings.push(LintFinding::EmptyPrizeTable);
    }

    if let SelectionPolicy::Stratified { per_difficulty } = selection {
        for difficulty in Difficulty::iter() {
            let found = tiers.get(&difficulty).copied().unwrap_or(0);
            if found < per_difficulty {
                findings.push(LintFinding::ThinTier {
                    difficulty,
                    found,
                    wanted: per_difficulty,
                });
            }
        }
    }

    LintReport { findings }
}
