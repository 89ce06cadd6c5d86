//! HTTP DTOs for administrator endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::ListSubmissionsResult;
use crate::domain::submission::StoredSubmission;
use crate::ports::ReadFailure;

/// `?q=` participant id filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionFilter {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionListResponse {
    /// "Displaying X of N submissions"
    pub caption: String,
    pub displayed: usize,
    pub total: usize,
    pub failures: Vec<ReadFailure>,
    pub entries: Vec<StoredSubmission>,
}

impl From<ListSubmissionsResult> for SubmissionListResponse {
    fn from(result: ListSubmissionsResult) -> Self {
        let displayed = result.displayed();
        Self {
            caption: format!("Displaying {} of {} submissions", displayed, result.total),
            displayed,
            total: result.total,
            failures: result.failures,
            entries: result.entries,
        }
    }
}
