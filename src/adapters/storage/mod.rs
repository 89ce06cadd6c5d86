//! Storage adapters.
//!
//! - `InMemorySessionRepository` - Process-local session state
//! - `JsonSubmissionStore` - One JSON file per completed submission

mod in_memory_session_repository;
mod json_submission_store;

pub use in_memory_session_repository::InMemorySessionRepository;
pub use json_submission_store::JsonSubmissionStore;
