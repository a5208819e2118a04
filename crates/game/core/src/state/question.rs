//! Question records and the fixed option layout.

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

/// Number of wrong options on every question.
pub const INCORRECT_OPTION_COUNT: usize = OPTION_COUNT - 1;

/// Difficulty tier of a question.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A multiple-choice question. Immutable once loaded.
///
/// Serialized field names (`question`, `correct`, `level`) match the content
/// files shipped with the game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    pub id: u32,
    #[cfg_attr(feature = "serde", serde(rename = "question"))]
    pub text: String,
    pub options: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "correct"))]
    pub correct_index: u8,
    #[cfg_attr(feature = "serde", serde(rename = "level"))]
    pub difficulty: Difficulty,
}

impl Question {
    pub fn new<I, S>(
        id: u32,
        text: impl Into<String>,
        options: I,
        correct_index: u8,
        difficulty: Difficulty,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_index,
            difficulty,
        }
    }

    /// Returns the option text at `index`, if present.
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn correct_option(&self) -> usize {
        self.correct_index as usize
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_option()
    }

    /// Iterates over the indices of the wrong options.
    pub fn incorrect_options(&self) -> impl Iterator<Item = usize> + '_ {
        (0..OPTION_COUNT).filter(move |&index| !self.is_correct(index))
    }
}

/// Letter label shown next to an option (`A`..`D`).
pub fn option_label(index: usize) -> char {
    match index {
        0 => 'A',
        1 => 'B',
        2 => 'C',
        3 => 'D',
        _ => '?',
    }
}
