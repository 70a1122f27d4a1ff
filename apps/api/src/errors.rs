use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A skill's total authored pool is below the assembly minimum.
    /// Non-retryable until more content is authored. The skill id and counts
    /// propagate unchanged through the orchestrator and onto the wire.
    #[error("Skill '{skill_id}' has {found} questions; at least {required} are required")]
    InsufficientQuestions {
        skill_id: String,
        found: usize,
        required: usize,
    },

    #[error("At least one skill must be selected")]
    EmptySkillSelection,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InsufficientQuestions { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INSUFFICIENT_QUESTIONS",
                self.to_string(),
            ),
            AppError::EmptySkillSelection => (
                StatusCode::BAD_REQUEST,
                "EMPTY_SKILL_SELECTION",
                self.to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
