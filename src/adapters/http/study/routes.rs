//! HTTP routes for participant endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_session, get_page, send_chat_message, submit_page};
use crate::adapters::http::StudyAppState;

/// Participant routes, mounted at `/api/sessions`.
///
/// - `POST /` - Create a session
/// - `GET /:id` - Current page view
/// - `POST /:id/submit` - Submit the current page
/// - `POST /:id/chat` - Send a brainstorming message
pub fn study_routes() -> Router<StudyAppState> {
    Router::new()
        .route("/", post(create_session))
        .route("/:id", get(get_page))
        .route("/:id/submit", post(submit_page))
        .route("/:id/chat", post(send_chat_message))
}
