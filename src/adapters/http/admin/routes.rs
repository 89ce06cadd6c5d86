//! HTTP routes for administrator endpoints.

use axum::{routing::get, Router};

use super::handlers::{export_submissions, list_submissions};
use crate::adapters::http::StudyAppState;

/// Admin routes, mounted at `/api/sessions` next to the participant routes.
///
/// - `GET /:id/admin/submissions` - Filtered listing
/// - `GET /:id/admin/export` - CSV download
pub fn admin_routes() -> Router<StudyAppState> {
    Router::new()
        .route("/:id/admin/submissions", get(list_submissions))
        .route("/:id/admin/export", get(export_submissions))
}
