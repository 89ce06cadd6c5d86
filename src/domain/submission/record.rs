//! Persisted submission records.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::TranscriptEntry;
use crate::domain::foundation::{ParticipantId, Timestamp};
use crate::domain::study::{SessionError, StudySession};
use crate::domain::survey::Answers;

/// Everything recorded for one completed participant session.
///
/// Field order matches the stored JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub prolific_id: ParticipantId,
    pub timestamp: Timestamp,
    #[serde(default)]
    pub survey_responses: Answers,
    #[serde(default)]
    pub chat_history: Vec<TranscriptEntry>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub feedback: Answers,
}

impl SubmissionRecord {
    /// Snapshots a session at `timestamp`.
    pub fn from_session(session: &StudySession, timestamp: Timestamp) -> Result<Self, SessionError> {
        let participant = session
            .participant_id()
            .ok_or(SessionError::MissingParticipant)?;

        Ok(Self {
            prolific_id: participant.clone(),
            timestamp,
            survey_responses: session.survey_responses().clone(),
            chat_history: session.transcript().to_vec(),
            summary: session.summary_text().to_string(),
            feedback: session.feedback_responses().clone(),
        })
    }

    /// Returns `chat_{participant}_{timestamp}.json`.
    pub fn file_name(&self) -> String {
        format!(
            "chat_{}_{}.json",
            self.prolific_id.file_component(),
            self.timestamp
        )
    }
}

/// A record together with the file it was read from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredSubmission {
    pub file_name: String,
    pub record: SubmissionRecord,
}
