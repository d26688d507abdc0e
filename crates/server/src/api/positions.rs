use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use question_service_api_types::{PageQuery, PositionRequest, PositionResponse};
use question_service_core::domain::{Position, PositionId, PositionTitle};
use sea_orm::TransactionTrait;

use super::{ApiError, AppState, page_request, parse_id};
use crate::services;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/positions", get(list_positions).post(create_position))
        .route(
            "/positions/{id}",
            get(get_position).put(update_position).delete(delete_position),
        )
}

fn to_response(position: Position) -> PositionResponse {
    PositionResponse {
        id: position.id.to_string(),
        title: position.title.into_inner(),
    }
}

async fn list_positions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<PositionResponse>>, ApiError> {
    let page = page_request(query)?;
    let positions = services::positions(&state.db).list(page).await?;
    Ok(Json(positions.into_iter().map(to_response).collect()))
}

async fn get_position(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PositionResponse>, ApiError> {
    let id: PositionId = parse_id(&id)?;
    let position = services::positions(&state.db)
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Position", id))?;
    Ok(Json(to_response(position)))
}

async fn create_position(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PositionRequest>,
) -> Result<(StatusCode, Json<PositionResponse>), ApiError> {
    let title = PositionTitle::new(body.title)?;

    let txn = state.db.begin().await?;
    let position = services::positions(&txn).create(title).await?;
    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(to_response(position))))
}

async fn update_position(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<PositionRequest>,
) -> Result<Json<PositionResponse>, ApiError> {
    let id: PositionId = parse_id(&id)?;
    let title = PositionTitle::new(body.title)?;

    let txn = state.db.begin().await?;
    let position = services::positions(&txn).update(id, title).await?;
    txn.commit().await?;

    Ok(Json(to_response(position)))
}

async fn delete_position(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: PositionId = parse_id(&id)?;

    let txn = state.db.begin().await?;
    let deleted = services::positions(&txn).delete(id).await?;
    txn.commit().await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Position", id))
    }
}
