//! HTTP adapter for administrator endpoints.
//!
//! Access is granted to sessions that passed the admin login, identified by
//! the session id in the path.

mod dto;
mod handlers;
mod routes;

pub use dto::{SubmissionFilter, SubmissionListResponse};
pub use routes::admin_routes;
