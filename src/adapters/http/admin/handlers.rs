//! HTTP handlers for administrator endpoints.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::{handle_study_error, parse_session_id, StudyAppState};
use crate::application::handlers::{ExportSubmissionsQuery, ListSubmissionsQuery};

use super::dto::{SubmissionFilter, SubmissionListResponse};

/// GET /api/sessions/:id/admin/submissions?q= - Filtered submission listing
pub async fn list_submissions(
    State(state): State<StudyAppState>,
    Path(session_id): Path<String>,
    Query(filter): Query<SubmissionFilter>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = ListSubmissionsQuery {
        session_id,
        participant_filter: filter.q,
    };
    match state.list_submissions_handler().handle(query).await {
        Ok(result) => Json(SubmissionListResponse::from(result)).into_response(),
        Err(e) => handle_study_error(e),
    }
}

/// GET /api/sessions/:id/admin/export?q= - CSV download of the filtered set
///
/// Responds 204 when the filter matches nothing.
pub async fn export_submissions(
    State(state): State<StudyAppState>,
    Path(session_id): Path<String>,
    Query(filter): Query<SubmissionFilter>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = ExportSubmissionsQuery {
        session_id,
        participant_filter: filter.q,
    };
    match state.export_submissions_handler().handle(query).await {
        Ok(result) => match result.csv {
            Some(bytes) => (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", result.file_name),
                    ),
                ],
                bytes,
            )
                .into_response(),
            None => StatusCode::NO_CONTENT.into_response(),
        },
        Err(e) => handle_study_error(e),
    }
}
