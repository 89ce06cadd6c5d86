//! Error responses shared by every endpoint.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::handlers::StudyError;
use crate::domain::conversation::ChatError;
use crate::domain::foundation::{ErrorCode, SessionId};
use crate::domain::study::SessionError;

/// JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Parses a path segment into a session id, or builds the 400 response.
pub fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

/// Builds the error body for a request whose JSON could not be read at all.
pub fn handle_json_rejection(rejection: JsonRejection) -> Response {
    let body = ErrorResponse::new(ErrorCode::ValidationFailed, rejection.body_text());
    (rejection.status(), Json(body)).into_response()
}

pub fn handle_study_error(error: StudyError) -> Response {
    let status = match &error {
        StudyError::NotFound(_) => StatusCode::NOT_FOUND,
        StudyError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StudyError::Session(SessionError::Chat(ChatError::EmptyMessage)) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        StudyError::Session(_) => StatusCode::CONFLICT,
        StudyError::IncorrectPassword => StatusCode::UNAUTHORIZED,
        StudyError::Forbidden => StatusCode::FORBIDDEN,
        StudyError::Storage(_) | StudyError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    }

    let mut body = ErrorResponse::new(error.code(), error.to_string());
    if let StudyError::Validation(errors) = &error {
        body.message = "Please correct the highlighted fields.".to_string();
        if let Ok(details) = serde_json::to_value(errors) {
            body = body.with_details(details);
        }
    }

    (status, Json(body)).into_response()
}
