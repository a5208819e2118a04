//! Prize ladder.

use core::fmt;

/// Reward for a given number of correct answers.
///
/// Content files may list plain amounts or pre-formatted labels.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Prize {
    Amount(u64),
    Label(String),
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prize::Label(label) => f.write_str(label),
            Prize::Amount(amount) => {
                let digits = amount.to_string();
                for (position, digit) in digits.chars().enumerate() {
                    if position > 0 && (digits.len() - position) % 3 == 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{digit}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<u64> for Prize {
    fn from(amount: u64) -> Self {
        Prize::Amount(amount)
    }
}

impl From<&str> for Prize {
    fn from(label: &str) -> Self {
        Prize::Label(label.to_owned())
    }
}

/// Ordered prize values indexed by number of correct answers.
///
/// `prizes[score - 1]` is the reward for `score` correct answers. Its length
/// is the number of correct answers needed to top the ladder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PrizeTable {
    prizes: Vec<Prize>,
}

impl PrizeTable {
    pub fn new(prizes: Vec<Prize>) -> Self {
        Self { prizes }
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prize> {
        self.prizes.iter()
    }

    /// Highest prize of the ladder.
    pub fn top_prize(&self) -> Option<&Prize> {
        self.prizes.last()
    }

    /// Prize secured with `score` correct answers; `None` means no prize yet.
    pub fn current_prize(&self, score: u32) -> Option<&Prize> {
        let score = score as usize;
        if score == 0 {
            return None;
        }
        self.prizes.get(score - 1).or_else(|| self.top_prize())
    }

    /// Prize at stake on the next correct answer, capped at the top prize.
    pub fn next_prize(&self, score: u32) -> Option<&Prize> {
        self.prizes.get(score as usize).or_else(|| self.top_prize())
    }

    /// Returns true once `score` reaches the top of a non-empty ladder.
    pub fn is_complete(&self, score: u32) -> bool {
        !self.is_empty() && score as usize >= self.len()
    }
}

impl From<Vec<Prize>> for PrizeTable {
    fn from(prizes: Vec<Prize>) -> Self {
        Self::new(prizes)
    }
}

impl FromIterator<Prize> for PrizeTable {
    fn from_iter<T: IntoIterator<Item = Prize>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
