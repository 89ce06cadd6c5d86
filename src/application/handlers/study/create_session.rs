//! CreateSessionHandler - Starts a new visit on the welcome page.

use std::sync::Arc;

use crate::application::handlers::StudyError;
use crate::domain::study::StudySession;
use crate::ports::SessionRepository;

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
    turn_limit: u32,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, turn_limit: u32) -> Self {
        Self {
            repository,
            turn_limit,
        }
    }

    pub async fn handle(&self) -> Result<StudySession, StudyError> {
        let session = StudySession::new(self.turn_limit);
        self.repository.save(&session).await?;

        tracing::info!(session_id = %session.id(), "Study session created");
        Ok(session)
    }
}
