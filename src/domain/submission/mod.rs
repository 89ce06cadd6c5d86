//! Submission module - Persisted records and their flattened export.

mod export;
mod record;

pub use export::{
    chat_text, filter_by_participant, to_csv, ExportError, ExportSchema, FEEDBACK_PREFIX,
    SURVEY_PREFIX,
};
pub use record::{StoredSubmission, SubmissionRecord};
