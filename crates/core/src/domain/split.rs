//! Percentage split of questions across difficulty tiers.
//!
//! [`validate_split`] is the pure check. [`DifficultySplit`] can only be
//! built from values that passed it, so any code holding one may persist it.

use std::fmt;

use super::DomainError;

pub const PERCENT_MIN: i32 = 0;
pub const PERCENT_MAX: i32 = 100;
pub const PERCENT_TOTAL: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Easy => "easy",
            Tier::Medium => "medium",
            Tier::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Checks that every share is in `[0, 100]` and that the shares add up to 100.
///
/// Range violations are reported before the total, in easy, medium, hard order.
pub fn validate_split(easy: i32, medium: i32, hard: i32) -> Result<(), DomainError> {
    for (tier, value) in [(Tier::Easy, easy), (Tier::Medium, medium), (Tier::Hard, hard)] {
        if !(PERCENT_MIN..=PERCENT_MAX).contains(&value) {
            return Err(DomainError::PercentageOutOfRange { tier, value });
        }
    }

    let total = easy + medium + hard;
    if total != PERCENT_TOTAL {
        return Err(DomainError::InconsistentTotal { total });
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DifficultySplit {
    easy: u8,
    medium: u8,
    hard: u8,
}

impl DifficultySplit {
    pub fn new(easy: i32, medium: i32, hard: i32) -> Result<Self, DomainError> {
        validate_split(easy, medium, hard)?;
        Ok(Self::from_validated(easy, medium, hard))
    }

    // Callers must have run `validate_split` on the same values.
    fn from_validated(easy: i32, medium: i32, hard: i32) -> Self {
        Self {
            easy: easy as u8,
            medium: medium as u8,
            hard: hard as u8,
        }
    }

    pub fn easy(self) -> u8 {
        self.easy
    }

    pub fn medium(self) -> u8 {
        self.medium
    }

    pub fn hard(self) -> u8 {
        self.hard
    }
}
