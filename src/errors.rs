use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Could not retrieve transcript: {0}")]
    TranscriptUnavailable(String),

    #[error("Error generating quiz: {0}")]
    GenerationFailed(String),

    #[error("Error generating quiz: schema violation: {0}")]
    SchemaViolation(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::TranscriptUnavailable(_) => "TRANSCRIPT_UNAVAILABLE",
            AppError::GenerationFailed(_) => "GENERATION_FAILED",
            AppError::SchemaViolation(_) => "SCHEMA_VIOLATION",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller can act on the failure. Everything else is a
    /// server fault whose detail stays in the logs.
    pub fn is_client_fault(&self) -> bool {
        !matches!(self, AppError::InternalError(_))
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: u16,
    pub kind: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_fault() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = if self.is_client_fault() {
            self.to_string()
        } else {
            log::error!("{}", self);
            "Internal Server Error".to_string()
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail,
            code: self.status_code().as_u16(),
            kind: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
