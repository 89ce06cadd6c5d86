//! ExportSubmissionsHandler - Flattened CSV of the filtered submissions.

use std::sync::Arc;

use super::require_admin;
use crate::application::handlers::StudyError;
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::submission::{filter_by_participant, to_csv};
use crate::ports::{SessionRepository, SubmissionReader};

#[derive(Debug, Clone)]
pub struct ExportSubmissionsQuery {
    pub session_id: SessionId,
    pub participant_filter: String,
}

#[derive(Debug, Clone)]
pub struct ExportSubmissionsResult {
    /// `filtered_submissions_{timestamp}.csv`
    pub file_name: String,
    pub rows: usize,
    /// `None` when the filter matched nothing.
    pub csv: Option<Vec<u8>>,
}

pub struct ExportSubmissionsHandler {
    repository: Arc<dyn SessionRepository>,
    reader: Arc<dyn SubmissionReader>,
}

impl ExportSubmissionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, reader: Arc<dyn SubmissionReader>) -> Self {
        Self { repository, reader }
    }

    pub async fn handle(
        &self,
        query: ExportSubmissionsQuery,
    ) -> Result<ExportSubmissionsResult, StudyError> {
        require_admin(self.repository.as_ref(), query.session_id).await?;

        let listing = self.reader.list().await?;
        let selected: Vec<_> =
            filter_by_participant(&listing.entries, &query.participant_filter, |s| &s.record)
                .into_iter()
                .map(|s| &s.record)
                .collect();
        let csv = to_csv(&selected)?;

        tracing::info!(
            session_id = %query.session_id,
            rows = selected.len(),
            "Submissions exported"
        );
        Ok(ExportSubmissionsResult {
            file_name: format!("filtered_submissions_{}.csv", Timestamp::now()),
            rows: selected.len(),
            csv,
        })
    }
}
