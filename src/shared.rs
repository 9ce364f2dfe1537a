use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::meeting::{generators::CodeGenerator, repository::MeetingRepository};
use crate::token::TokenIssuer;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub token_issuer: Arc<TokenIssuer>,
    pub meeting_repository: Arc<dyn MeetingRepository + Send + Sync>,
    pub code_generator: Arc<dyn CodeGenerator>,
}

impl AppState {
    pub fn new(
        token_issuer: Arc<TokenIssuer>,
        meeting_repository: Arc<dyn MeetingRepository + Send + Sync>,
        code_generator: Arc<dyn CodeGenerator>,
    ) -> Self {
        Self {
            token_issuer,
            meeting_repository,
            code_generator,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ConfigurationError(String),

    #[error("{0}")]
    ValidationError(String),

    /// Generated meeting code is already taken; handled by the registry's retry
    #[error("Meeting code already exists: {0}")]
    DuplicateCode(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("JWT error: {0}")]
    JwtError(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ConfigurationError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::DuplicateCode(code) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Meeting code already exists: {}", code),
            ),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
            AppError::JwtError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to sign token: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
