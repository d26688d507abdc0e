use thiserror::Error;

use super::Tier;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{tier} must be between 0 and 100, got {value}")]
    PercentageOutOfRange { tier: Tier, value: i32 },
    #[error("sum of easy, medium and hard must equal 100, got {total}")]
    InconsistentTotal { total: i32 },
    #[error("title must not be blank")]
    EmptyTitle,
    #[error("title is too long: {len} characters, at most {max} allowed")]
    TitleTooLong { len: usize, max: usize },
    #[error("unknown difficulty level '{0}', expected one of EASY, MEDIUM, HARD")]
    UnknownDifficulty(String),
    #[error("invalid {kind} id '{value}'")]
    InvalidId { kind: &'static str, value: String },
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(u64),
}
