use std::fmt;

use thiserror::Error;

use crate::domain::DomainError;
use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("validation failed: {0}")]
    Validation(#[from] DomainError),
    #[error("storage failure: {0}")]
    Storage(#[source] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Unique violations reaching this conversion were not anticipated by a
/// pre-check, so they surface as storage faults. Writes that expect one go
/// through [`conflict_on_unique`] instead.
impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UniqueViolation(detail) => {
                Self::Storage(anyhow::anyhow!("unexpected unique constraint violation: {detail}"))
            }
            RepositoryError::Storage(err) => Self::Storage(err),
        }
    }
}

pub(crate) fn conflict_on_unique(message: &'static str) -> impl FnOnce(RepositoryError) -> ServiceError {
    move |err| match err {
        RepositoryError::UniqueViolation(_) => ServiceError::Conflict(message.to_string()),
        other => other.into(),
    }
}
