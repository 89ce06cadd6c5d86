//! Errors returned by study command and query handlers.

use thiserror::Error;

use crate::domain::conversation::ChatError;
use crate::domain::foundation::{ErrorCode, SessionId};
use crate::domain::study::{Page, SessionError};
use crate::domain::submission::ExportError;
use crate::domain::survey::FormErrors;
use crate::ports::StorageError;

#[derive(Debug, Error)]
pub enum StudyError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("{0}")]
    Validation(#[from] FormErrors),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("Administrator access required")]
    Forbidden,

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl StudyError {
    /// Machine-readable code for API responses.
    pub fn code(&self) -> ErrorCode {
        match self {
            StudyError::NotFound(_) => ErrorCode::SessionNotFound,
            StudyError::Validation(errors) if errors.has_attention_failure() => {
                ErrorCode::AttentionCheckFailed
            }
            StudyError::Validation(_) => ErrorCode::ValidationFailed,
            StudyError::Session(SessionError::Chat(ChatError::LimitReached { .. })) => {
                ErrorCode::ChatLimitReached
            }
            StudyError::Session(SessionError::Chat(ChatError::EmptyMessage)) => {
                ErrorCode::ValidationFailed
            }
            StudyError::Session(SessionError::WrongPage {
                expected: Page::Brainstorm,
                ..
            }) => ErrorCode::ChatNotStarted,
            StudyError::Session(_) => ErrorCode::InvalidStateTransition,
            StudyError::IncorrectPassword => ErrorCode::IncorrectPassword,
            StudyError::Forbidden => ErrorCode::Forbidden,
            StudyError::Storage(_) => ErrorCode::StorageError,
            StudyError::Export(_) => ErrorCode::InternalError,
        }
    }
}
