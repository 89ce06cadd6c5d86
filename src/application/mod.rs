//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Participant-facing handlers live under `study`, administrator queries
//! under `admin`.

pub mod handlers;

pub use handlers::{
    ChatFailure, CreateSessionHandler, ExportSubmissionsHandler, ExportSubmissionsQuery,
    ExportSubmissionsResult, GetPageHandler, GetPageQuery, ListSubmissionsHandler,
    ListSubmissionsQuery, ListSubmissionsResult, PageSubmission, SendChatMessageCommand,
    SendChatMessageHandler, SendChatMessageResult, StudyError, SubmitPageCommand,
    SubmitPageHandler, SubmitPageResult,
};
