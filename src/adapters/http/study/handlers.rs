//! HTTP handlers for participant endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::{
    handle_json_rejection, handle_study_error, parse_session_id, ErrorResponse, StudyAppState,
};
use crate::application::handlers::{
    GetPageQuery, PageSubmission, SendChatMessageCommand, SubmitPageCommand,
};
use crate::domain::study::render;

use super::dto::{ChatRequest, ChatResponse, CreateSessionResponse};

/// POST /api/sessions - Start a visit on the welcome page
pub async fn create_session(State(state): State<StudyAppState>) -> Response {
    match state.create_session_handler().handle().await {
        Ok(session) => {
            let response = CreateSessionResponse {
                session_id: session.id().to_string(),
                view: render(&session, state.render_context()),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_study_error(e),
    }
}

/// GET /api/sessions/:id - Current page
pub async fn get_page(
    State(state): State<StudyAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.get_page_handler().handle(GetPageQuery { session_id }).await {
        Ok(session) => Json(render(&session, state.render_context())).into_response(),
        Err(e) => handle_study_error(e),
    }
}

/// POST /api/sessions/:id/submit - Submit the current page's form
pub async fn submit_page(
    State(state): State<StudyAppState>,
    Path(session_id): Path<String>,
    payload: Result<Json<PageSubmission>, JsonRejection>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return handle_json_rejection(rejection),
    };

    let cmd = SubmitPageCommand {
        session_id,
        submission,
    };
    match state.submit_page_handler().handle(cmd).await {
        Ok(result) => Json(render(&result.session, state.render_context())).into_response(),
        Err(e) => handle_study_error(e),
    }
}

/// POST /api/sessions/:id/chat - One brainstorming turn
pub async fn send_chat_message(
    State(state): State<StudyAppState>,
    Path(session_id): Path<String>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return handle_json_rejection(rejection),
    };

    let cmd = SendChatMessageCommand {
        session_id,
        message: req.message,
    };
    match state.send_chat_message_handler().handle(cmd).await {
        Ok(result) => {
            let response = ChatResponse {
                view: render(&result.session, state.render_context()),
                error: result.failure.as_ref().map(ErrorResponse::from),
            };
            Json(response).into_response()
        }
        Err(e) => handle_study_error(e),
    }
}
