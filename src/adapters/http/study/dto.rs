//! HTTP DTOs for participant endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::ErrorResponse;
use crate::application::handlers::ChatFailure;
use crate::domain::study::PageView;

/// Response to session creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub view: PageView,
}

/// One brainstorming message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// The brainstorm page after a turn, plus the turn's failure if any.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub view: PageView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl From<&ChatFailure> for ErrorResponse {
    fn from(failure: &ChatFailure) -> Self {
        ErrorResponse::new(failure.code(), failure.message())
    }
}
