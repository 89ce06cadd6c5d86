//! Application handlers.
//!
//! Command and query handlers that orchestrate the study flow over the ports.

pub mod admin;
mod error;
pub mod study;

pub use admin::{
    ExportSubmissionsHandler, ExportSubmissionsQuery, ExportSubmissionsResult,
    ListSubmissionsHandler, ListSubmissionsQuery, ListSubmissionsResult,
};
pub use error::StudyError;
pub use study::{
    ChatFailure, CreateSessionHandler, GetPageHandler, GetPageQuery, PageSubmission,
    SendChatMessageCommand, SendChatMessageHandler, SendChatMessageResult, SubmitPageCommand,
    SubmitPageHandler, SubmitPageResult,
};

use crate::domain::foundation::SessionId;
use crate::domain::study::StudySession;
use crate::ports::SessionRepository;

/// Loads a session or fails with `NotFound`.
pub(crate) async fn load_session(
    repository: &dyn SessionRepository,
    id: SessionId,
) -> Result<StudySession, StudyError> {
    repository
        .find_by_id(&id)
        .await?
        .ok_or(StudyError::NotFound(id))
}
