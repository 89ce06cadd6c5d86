//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Chat completion service
//! - `SessionRepository` - Process-local session state
//! - `SubmissionWriter` / `SubmissionReader` - Persisted submission records

mod ai_provider;
mod session_repository;
mod storage_error;
mod submission_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, RequestMetadata, TokenUsage,
};
pub use session_repository::SessionRepository;
pub use storage_error::StorageError;
pub use submission_store::{ReadFailure, SubmissionListing, SubmissionReader, SubmissionWriter};
