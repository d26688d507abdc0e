//! HTTP transport for the question catalog.
//!
//! Reads run on the pool. Writes open a transaction, run one service call
//! and commit; an early return drops the transaction, which rolls it back.

pub mod error;
pub mod health;
pub mod positions;
pub mod questions;
pub mod skill_requirements;
pub mod skills;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use question_service_api_types::PageQuery;
use question_service_core::domain::{DomainError, PageRequest};
use tower_http::trace::TraceLayer;

pub const API_PREFIX: &str = "/api/v1";

pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(positions::router())
        .merge(skills::router())
        .merge(questions::router())
        .merge(skill_requirements::router());

    Router::new()
        .merge(health::router())
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn parse_id<T>(raw: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = DomainError>,
{
    Ok(raw.parse()?)
}

fn page_request(query: PageQuery) -> Result<Option<PageRequest>, ApiError> {
    Ok(PageRequest::from_parts(query.page_number, query.page_size)?)
}
