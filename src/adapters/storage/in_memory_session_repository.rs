//! In-memory session repository.
//!
//! Sessions live only as long as the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::domain::study::StudySession;
use crate::ports::{SessionRepository, StorageError};

#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, StudySession>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &StudySession) -> Result<(), StorageError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn update(&self, session: &StudySession) -> Result<(), StorageError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&session.id()) {
            Some(existing) => {
                *existing = session.clone();
                Ok(())
            }
            None => Err(StorageError::SessionNotFound(session.id())),
        }
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<StudySession>, StorageError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::study::Page;

    #[tokio::test]
    async fn save_and_find() {
        let repo = InMemorySessionRepository::new();
        let session = StudySession::new(10);

        repo.save(&session).await.unwrap();

        let found = repo.find_by_id(&session.id()).await.unwrap().unwrap();
        assert_eq!(found.id(), session.id());
        assert_eq!(repo.session_count().await, 1);
    }

    #[tokio::test]
    async fn find_unknown_returns_none() {
        let repo = InMemorySessionRepository::new();
        assert!(repo.find_by_id(&SessionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_stored_copy() {
        let repo = InMemorySessionRepository::new();
        let mut session = StudySession::new(10);
        repo.save(&session).await.unwrap();

        session.admin_login().unwrap();
        repo.update(&session).await.unwrap();

        let found = repo.find_by_id(&session.id()).await.unwrap().unwrap();
        assert_eq!(found.page(), Page::AdminDashboard);
    }

    #[tokio::test]
    async fn update_unknown_session_fails() {
        let repo = InMemorySessionRepository::new();
        let result = repo.update(&StudySession::new(10)).await;
        assert!(matches!(result, Err(StorageError::SessionNotFound(_))));
    }
}
