//! ListSubmissionsHandler - Filtered view of every stored submission.

use std::sync::Arc;

use super::require_admin;
use crate::application::handlers::StudyError;
use crate::domain::foundation::SessionId;
use crate::domain::submission::{filter_by_participant, StoredSubmission};
use crate::ports::{ReadFailure, SessionRepository, SubmissionReader};

#[derive(Debug, Clone)]
pub struct ListSubmissionsQuery {
    pub session_id: SessionId,
    /// Case-insensitive participant id substring; blank keeps everything.
    pub participant_filter: String,
}

#[derive(Debug, Clone)]
pub struct ListSubmissionsResult {
    /// Number of readable records before filtering.
    pub total: usize,
    pub entries: Vec<StoredSubmission>,
    pub failures: Vec<ReadFailure>,
}

impl ListSubmissionsResult {
    pub fn displayed(&self) -> usize {
        self.entries.len()
    }
}

/// Handler for the admin submission listing.
pub struct ListSubmissionsHandler {
    repository: Arc<dyn SessionRepository>,
    reader: Arc<dyn SubmissionReader>,
}

impl ListSubmissionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, reader: Arc<dyn SubmissionReader>) -> Self {
        Self { repository, reader }
    }

    pub async fn handle(
        &self,
        query: ListSubmissionsQuery,
    ) -> Result<ListSubmissionsResult, StudyError> {
        require_admin(self.repository.as_ref(), query.session_id).await?;

        let listing = self.reader.list().await?;
        let entries: Vec<StoredSubmission> =
            filter_by_participant(&listing.entries, &query.participant_filter, |s| &s.record)
                .into_iter()
                .cloned()
                .collect();

        Ok(ListSubmissionsResult {
            total: listing.entries.len(),
            entries,
            failures: listing.failures,
        })
    }
}
