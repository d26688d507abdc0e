//! sea-orm adapters for the core repository ports.
//!
//! Every adapter borrows a connection, so the same code runs on the pool or
//! inside a `DatabaseTransaction`.

mod position_repository;
mod question_repository;
mod skill_repository;
mod skill_requirement_repository;

pub use position_repository::SeaOrmPositionRepository;
pub use question_repository::{SeaOrmQuestionRepository, question_condition};
pub use skill_repository::SeaOrmSkillRepository;
pub use skill_requirement_repository::SeaOrmSkillRequirementRepository;

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use question_service_core::repository::RepositoryError;
use sea_orm::{DbErr, SqlErr};

fn db_err(err: DbErr) -> RepositoryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => RepositoryError::UniqueViolation(detail),
        _ => RepositoryError::Storage(err.into()),
    }
}

fn parse_id<T>(column: &str, raw: &str) -> Result<T, RepositoryError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    T::from_str(raw)
        .map_err(|e| RepositoryError::Storage(anyhow!("invalid {column} '{raw}' from database: {e}")))
}

fn invalid_row(column: &str, err: impl fmt::Display) -> RepositoryError {
    RepositoryError::Storage(anyhow!("invalid {column} from database: {err}"))
}

static LAST_STAMP_MICROS: AtomicI64 = AtomicI64::new(i64::MIN);

/// Wall-clock time in microseconds, bumped so that every call returns a
/// value strictly greater than the previous one. Lists order by
/// `created_at`, so equal stamps would fall back to random id order.
fn now() -> sea_orm::prelude::DateTime {
    let wall = Utc::now().timestamp_micros();
    let previous = LAST_STAMP_MICROS
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(wall.max(last.saturating_add(1)))
        })
        .unwrap_or_else(|last| last);
    let stamp = wall.max(previous.saturating_add(1));

    DateTime::<Utc>::from_timestamp_micros(stamp)
        .unwrap_or_else(Utc::now)
        .naive_utc()
}
