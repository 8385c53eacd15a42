use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

use crate::features::fights::services::FightError;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
    Unauthorized,
    FighterUnavailable(String),
    Timeout(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::FighterUnavailable(msg) => write!(f, "Fighter unavailable: {}", msg),
            Self::Timeout(msg) => write!(f, "Timeout: {}", msg),
        }
    }
}

impl WebError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(StorageError::InvalidFighter(_)) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::FighterUnavailable(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let body = match &self {
            Self::Storage(StorageError::NotFound) => {
                json!({
                    "error": "Resource not found"
                })
            }
            Self::Storage(StorageError::ConstraintViolation(msg))
            | Self::Storage(StorageError::InvalidFighter(msg)) => {
                json!({
                    "error": msg
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::Unauthorized => {
                json!({
                    "error": "Unauthorized"
                })
            }
            Self::FighterUnavailable(msg) => {
                tracing::warn!("Fighter unavailable: {}", msg);
                json!({
                    "error": "A fighter directory is unavailable"
                })
            }
            Self::Timeout(msg) => {
                tracing::warn!("Timeout: {}", msg);
                json!({
                    "error": "The fighters could not be fetched in time"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<FightError> for WebError {
    fn from(error: FightError) -> Self {
        match error {
            FightError::InvalidRequest(msg) => Self::BadRequest(msg),
            e @ FightError::FighterUnavailable { .. } => Self::FighterUnavailable(e.to_string()),
            e @ FightError::Timeout(_) => Self::Timeout(e.to_string()),
            FightError::Storage(e) => Self::Storage(e),
        }
    }
}

pub type WebResult<T> = Result<T, WebError>;
