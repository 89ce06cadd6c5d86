//! Session repository port.
//!
//! Sessions are process-local; implementations only need to keep them for the
//! lifetime of the server.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::foundation::SessionId;
use crate::domain::study::StudySession;

/// Repository port for StudySession persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a new session.
    async fn save(&self, session: &StudySession) -> Result<(), StorageError>;

    /// Replace an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    async fn update(&self, session: &StudySession) -> Result<(), StorageError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<StudySession>, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SessionRepository) {}
    }
}
