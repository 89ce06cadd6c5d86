//! HTTP adapters - REST API for the study.
//!
//! - `study` - Participant flow (sessions, page submissions, chat)
//! - `admin` - Submission listing and CSV export

pub mod admin;
mod error;
mod state;
pub mod study;

pub use error::{handle_json_rejection, handle_study_error, parse_session_id, ErrorResponse};
pub use state::StudyAppState;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the complete application router.
///
/// An empty `cors_origins` allows any origin.
pub fn study_router(state: StudyAppState, cors_origins: &[String]) -> Router {
    let api = study::study_routes().merge(admin::admin_routes());

    Router::new()
        .route("/health", get(health))
        .nest("/api/sessions", api)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}
