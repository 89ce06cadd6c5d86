//! HTTP adapter for participant endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatRequest, ChatResponse, CreateSessionResponse};
pub use routes::study_routes;
