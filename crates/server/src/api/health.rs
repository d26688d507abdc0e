use std::sync::Arc;

use axum::{Json, Router, routing::get};
use question_service_api_types::HealthCheckResponse;

use super::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::ok())
}
