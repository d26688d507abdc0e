//! Maps service and parsing failures onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use question_service_api_types::ErrorResponse;
use question_service_core::domain::DomainError;
use question_service_core::service::ServiceError;
use tracing::error;

#[derive(Debug)]
pub struct ApiError {
    message: String,
    code: &'static str,
    status: StatusCode,
}

impl ApiError {
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self {
            message: format!("{entity} with id {id} not found"),
            code: "NOT_FOUND",
            status: StatusCode::NOT_FOUND,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "CONFLICT",
            status: StatusCode::CONFLICT,
        }
    }

    /// Logs the cause and hides it from the client.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        error!(error = %err, "request failed with an internal error");
        Self {
            message: "internal server error".to_string(),
            code: "INTERNAL_ERROR",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let code = match err {
            DomainError::PercentageOutOfRange { .. } => "PERCENTAGE_OUT_OF_RANGE",
            DomainError::InconsistentTotal { .. } => "INCONSISTENT_TOTAL",
            DomainError::InvalidId { .. } => "INVALID_ID",
            _ => "VALIDATION_ERROR",
        };
        Self {
            message: err.to_string(),
            code,
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { entity, id } => Self::not_found(entity, id),
            ServiceError::Conflict(message) => Self::conflict(message),
            ServiceError::Validation(err) => err.into(),
            ServiceError::Storage(err) => Self::internal(format!("{err:#}")),
        }
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            code: self.code.to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}
