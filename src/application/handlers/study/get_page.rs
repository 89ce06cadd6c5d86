//! GetPageHandler - Query for a session's current state.

use std::sync::Arc;

use crate::application::handlers::{load_session, StudyError};
use crate::domain::foundation::SessionId;
use crate::domain::study::StudySession;
use crate::ports::SessionRepository;

#[derive(Debug, Clone)]
pub struct GetPageQuery {
    pub session_id: SessionId,
}

/// Handler for reading a session.
pub struct GetPageHandler {
    repository: Arc<dyn SessionRepository>,
}

impl GetPageHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPageQuery) -> Result<StudySession, StudyError> {
        load_session(self.repository.as_ref(), query.session_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionRepository;

    #[tokio::test]
    async fn returns_stored_session() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let session = StudySession::new(10);
        repo.save(&session).await.unwrap();

        let handler = GetPageHandler::new(repo);
        let found = handler
            .handle(GetPageQuery {
                session_id: session.id(),
            })
            .await
            .unwrap();
        assert_eq!(found.id(), session.id());
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let handler = GetPageHandler::new(Arc::new(InMemorySessionRepository::new()));
        let result = handler
            .handle(GetPageQuery {
                session_id: SessionId::new(),
            })
            .await;
        assert!(matches!(result, Err(StudyError::NotFound(_))));
    }
}
