use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use question_service_api_types::{
    PageQuery, QuestionResponse, SkillRequest, SkillResponse, SkillTitleQuery,
};
use question_service_core::domain::{Skill, SkillId, SkillTitle};
use question_service_core::service::SkillDeleteOutcome;
use sea_orm::TransactionTrait;

use super::{ApiError, AppState, page_request, parse_id, questions};
use crate::services;

const SKILL_HAS_QUESTIONS: &str = "Skill has related questions";
const SKILL_HAS_REQUIREMENTS: &str = "Skill is required by positions";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/skills", get(list_skills).post(create_skill))
        .route("/skills/search", get(find_skill_by_title))
        .route(
            "/skills/{id}",
            get(get_skill).put(update_skill).delete(delete_skill),
        )
        .route("/skills/{id}/questions", get(list_skill_questions))
}

fn to_response(skill: Skill) -> SkillResponse {
    SkillResponse {
        id: skill.id.to_string(),
        title: skill.title.into_inner(),
    }
}

async fn list_skills(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<SkillResponse>>, ApiError> {
    let page = page_request(query)?;
    let skills = services::skills(&state.db).list(page).await?;
    Ok(Json(skills.into_iter().map(to_response).collect()))
}

async fn get_skill(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SkillResponse>, ApiError> {
    let id: SkillId = parse_id(&id)?;
    let skill = services::skills(&state.db)
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Skill", id))?;
    Ok(Json(to_response(skill)))
}

async fn find_skill_by_title(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SkillTitleQuery>,
) -> Result<Json<SkillResponse>, ApiError> {
    let title = query.title.trim();
    let skill = services::skills(&state.db)
        .get_by_title(title)
        .await?
        .ok_or_else(|| ApiError::not_found("Skill", format!("(title '{title}')")))?;
    Ok(Json(to_response(skill)))
}

async fn list_skill_questions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<QuestionResponse>>, ApiError> {
    let id: SkillId = parse_id(&id)?;
    let skill_questions = services::skills(&state.db)
        .questions_of_skill(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Skill", id))?;
    Ok(Json(
        skill_questions.into_iter().map(questions::to_response).collect(),
    ))
}

async fn create_skill(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SkillRequest>,
) -> Result<(StatusCode, Json<SkillResponse>), ApiError> {
    let title = SkillTitle::new(body.title)?;

    let txn = state.db.begin().await?;
    let skill = services::skills(&txn).create(title).await?;
    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(to_response(skill))))
}

async fn update_skill(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<SkillRequest>,
) -> Result<Json<SkillResponse>, ApiError> {
    let id: SkillId = parse_id(&id)?;
    let title = SkillTitle::new(body.title)?;

    let txn = state.db.begin().await?;
    let skill = services::skills(&txn).update(id, title).await?;
    txn.commit().await?;

    Ok(Json(to_response(skill)))
}

async fn delete_skill(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: SkillId = parse_id(&id)?;

    let txn = state.db.begin().await?;
    let outcome = services::skills(&txn).delete(id).await?;
    txn.commit().await?;

    match outcome {
        SkillDeleteOutcome::Deleted => Ok(StatusCode::NO_CONTENT),
        SkillDeleteOutcome::NotFound => Err(ApiError::not_found("Skill", id)),
        SkillDeleteOutcome::HasQuestions => Err(ApiError::conflict(SKILL_HAS_QUESTIONS)),
        SkillDeleteOutcome::HasRequirements => Err(ApiError::conflict(SKILL_HAS_REQUIREMENTS)),
    }
}
