use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use question_service_api_types::{
    PageQuery, QuestionRequest, QuestionResponse, QuestionSearchRequest,
};
use question_service_core::domain::{
    Difficulty, Question, QuestionDraft, QuestionId, QuestionSearchCriteria, QuestionTitle,
};
use sea_orm::TransactionTrait;

use super::{ApiError, AppState, page_request, parse_id};
use crate::services;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route(
            "/questions/{id}",
            get(get_question).put(update_question).delete(delete_question),
        )
}

pub(super) fn to_response(question: Question) -> QuestionResponse {
    QuestionResponse {
        id: question.id.to_string(),
        skill_id: question.skill_id.to_string(),
        title: question.title.into_inner(),
        right_answer: question.right_answer,
        difficulty_level: question.difficulty.to_string(),
    }
}

fn parse_draft(body: QuestionRequest) -> Result<QuestionDraft, ApiError> {
    Ok(QuestionDraft {
        skill_id: parse_id(&body.skill_id)?,
        title: QuestionTitle::new(body.title)?,
        right_answer: body.right_answer,
        difficulty: body.difficulty_level.parse::<Difficulty>()?,
    })
}

/// Blank strings count as absent, the same way the filter treats text.
fn parse_criteria(body: QuestionSearchRequest) -> Result<QuestionSearchCriteria, ApiError> {
    let skill_id = match body.skill_id.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(parse_id(raw)?),
        _ => None,
    };
    let difficulty = match body.difficulty_level.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(raw.parse::<Difficulty>()?),
        _ => None,
    };

    Ok(QuestionSearchCriteria {
        skill_id,
        title: body.title,
        right_answer: body.right_answer,
        difficulty,
    })
}

async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<QuestionResponse>>, ApiError> {
    let page = page_request(query)?;
    let questions = services::questions(&state.db).list(page).await?;
    Ok(Json(questions.into_iter().map(to_response).collect()))
}

async fn get_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let id: QuestionId = parse_id(&id)?;
    let question = services::questions(&state.db)
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Question", id))?;
    Ok(Json(to_response(question)))
}

async fn search_questions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
    Json(body): Json<QuestionSearchRequest>,
) -> Result<Json<Vec<QuestionResponse>>, ApiError> {
    let page = page_request(query)?;
    let criteria = parse_criteria(body)?;
    let questions = services::questions(&state.db)
        .search(&criteria, page)
        .await?;
    Ok(Json(questions.into_iter().map(to_response).collect()))
}

async fn create_question(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QuestionRequest>,
) -> Result<(StatusCode, Json<QuestionResponse>), ApiError> {
    let draft = parse_draft(body)?;

    let txn = state.db.begin().await?;
    let question = services::questions(&txn).create(draft).await?;
    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(to_response(question))))
}

async fn update_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<QuestionRequest>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let id: QuestionId = parse_id(&id)?;
    let draft = parse_draft(body)?;

    let txn = state.db.begin().await?;
    let question = services::questions(&txn).update(id, draft).await?;
    txn.commit().await?;

    Ok(Json(to_response(question)))
}

async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: QuestionId = parse_id(&id)?;

    let txn = state.db.begin().await?;
    let deleted = services::questions(&txn).delete(id).await?;
    txn.commit().await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Question", id))
    }
}
