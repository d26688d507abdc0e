use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
};
use question_service_api_types::{
    PageQuery, PositionIdQuery, SkillRequirementRequest, SkillRequirementResponse,
};
use question_service_core::domain::{PositionId, SkillId, SkillRequirement, SkillRequirementId};
use question_service_core::service::SkillRequirementInput;
use sea_orm::TransactionTrait;

use super::{ApiError, AppState, page_request, parse_id};
use crate::services;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/skill-requirements",
            get(list_requirements).post(create_requirement),
        )
        .route("/skill-requirements/search", get(list_requirements_by_position))
        .route(
            "/skill-requirements/{id}",
            get(get_requirement)
                .put(update_requirement)
                .delete(delete_requirement),
        )
        .route(
            "/skill-requirements/position/{position_id}/skill/{skill_id}",
            delete(delete_requirement_by_pair),
        )
}

fn to_response(requirement: SkillRequirement) -> SkillRequirementResponse {
    SkillRequirementResponse {
        id: requirement.id.to_string(),
        position_id: requirement.position_id.to_string(),
        skill_id: requirement.skill_id.to_string(),
        easy: requirement.split.easy(),
        medium: requirement.split.medium(),
        hard: requirement.split.hard(),
    }
}

/// Ids are checked here; percentages are left to the service so reference
/// and duplicate checks still run first.
fn parse_input(body: SkillRequirementRequest) -> Result<SkillRequirementInput, ApiError> {
    Ok(SkillRequirementInput {
        position_id: parse_id(&body.position_id)?,
        skill_id: parse_id(&body.skill_id)?,
        easy: body.easy,
        medium: body.medium,
        hard: body.hard,
    })
}

async fn list_requirements(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<SkillRequirementResponse>>, ApiError> {
    let page = page_request(query)?;
    let requirements = services::skill_requirements(&state.db).list(page).await?;
    Ok(Json(requirements.into_iter().map(to_response).collect()))
}

async fn get_requirement(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SkillRequirementResponse>, ApiError> {
    let id: SkillRequirementId = parse_id(&id)?;
    let requirement = services::skill_requirements(&state.db)
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("SkillRequirement", id))?;
    Ok(Json(to_response(requirement)))
}

async fn list_requirements_by_position(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PositionIdQuery>,
) -> Result<Json<Vec<SkillRequirementResponse>>, ApiError> {
    let position_id: PositionId = parse_id(&query.position_id)?;
    let requirements = services::skill_requirements(&state.db)
        .list_by_position(position_id)
        .await?;
    Ok(Json(requirements.into_iter().map(to_response).collect()))
}

async fn create_requirement(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SkillRequirementRequest>,
) -> Result<(StatusCode, Json<SkillRequirementResponse>), ApiError> {
    let input = parse_input(body)?;

    let txn = state.db.begin().await?;
    let requirement = services::skill_requirements(&txn).create(input).await?;
    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(to_response(requirement))))
}

async fn update_requirement(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<SkillRequirementRequest>,
) -> Result<Json<SkillRequirementResponse>, ApiError> {
    let id: SkillRequirementId = parse_id(&id)?;
    let input = parse_input(body)?;

    let txn = state.db.begin().await?;
    let requirement = services::skill_requirements(&txn)
        .update(id, input)
        .await?;
    txn.commit().await?;

    Ok(Json(to_response(requirement)))
}

async fn delete_requirement(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: SkillRequirementId = parse_id(&id)?;

    let txn = state.db.begin().await?;
    let deleted = services::skill_requirements(&txn).delete(id).await?;
    txn.commit().await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("SkillRequirement", id))
    }
}

async fn delete_requirement_by_pair(
    State(state): State<Arc<AppState>>,
    Path((position_id, skill_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let position_id: PositionId = parse_id(&position_id)?;
    let skill_id: SkillId = parse_id(&skill_id)?;

    let txn = state.db.begin().await?;
    let deleted = services::skill_requirements(&txn)
        .delete_by_position_and_skill(position_id, skill_id)
        .await?;
    txn.commit().await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(
            "SkillRequirement",
            format!("(position {position_id}, skill {skill_id})"),
        ))
    }
}
