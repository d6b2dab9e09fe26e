//! WebServer-specific error types and their HTTP rendering

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use planner::PlannerError;
use serde::{Deserialize, Serialize};
use shared::SharedError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error(transparent)]
    Planner(#[from] PlannerError),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Response building error: {0}")]
    ResponseError(String),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::Config(message.into())
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        WebServerError::InvalidRequest {
            details: details.into(),
        }
    }

    /// HTTP status and machine-readable code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            WebServerError::InvalidRequest { .. } => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            WebServerError::Planner(e) if e.is_validation() => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            WebServerError::Planner(e) if e.is_not_found() => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

/// API error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub timestamp: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = match &self {
            WebServerError::InvalidRequest { details } => {
                ApiError::new(code, "Invalid request body").with_details(details.clone())
            }
            WebServerError::Planner(PlannerError::Validation(e)) => ApiError::new(code, e.to_string()),
            _ if status.is_server_error() => {
                error!(error = %self, "Request failed");
                ApiError::new(code, "Internal server error").with_details(self.to_string())
            }
            _ => ApiError::new(code, self.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
