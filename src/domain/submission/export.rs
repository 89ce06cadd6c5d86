//! Filtering and flattened CSV export of submission records.
//!
//! Export runs in two steps: schema discovery over exactly the records being
//! exported, then row materialization against that schema.

use serde_json::Value;
use std::collections::BTreeSet;
use thiserror::Error;

use super::record::SubmissionRecord;
use crate::domain::conversation::Role;

pub const SURVEY_PREFIX: &str = "survey_";
pub const FEEDBACK_PREFIX: &str = "feedback_";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer could not be flushed: {0}")]
    Flush(String),
}

/// Keeps records whose participant id contains `query`, ignoring case.
///
/// A blank query keeps everything.
pub fn filter_by_participant<'a, T, F>(items: &'a [T], query: &str, record_of: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &SubmissionRecord,
{
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || record_of(*item)
                    .prolific_id
                    .as_str()
                    .to_lowercase()
                    .contains(&needle)
        })
        .collect()
}

/// Column layout for a set of records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportSchema {
    survey_keys: Vec<String>,
    feedback_keys: Vec<String>,
}

impl ExportSchema {
    /// Collects the sorted union of answer keys across `records`.
    pub fn discover<'a>(records: impl IntoIterator<Item = &'a SubmissionRecord>) -> Self {
        let mut survey = BTreeSet::new();
        let mut feedback = BTreeSet::new();
        for record in records {
            survey.extend(record.survey_responses.keys().cloned());
            feedback.extend(record.feedback.keys().cloned());
        }
        Self {
            survey_keys: survey.into_iter().collect(),
            feedback_keys: feedback.into_iter().collect(),
        }
    }

    /// Header row: ids, prefixed answer columns, then free text.
    pub fn headers(&self) -> Vec<String> {
        let mut headers = vec!["prolific_id".to_string(), "timestamp".to_string()];
        headers.extend(self.survey_keys.iter().map(|k| format!("{SURVEY_PREFIX}{k}")));
        headers.extend(self.feedback_keys.iter().map(|k| format!("{FEEDBACK_PREFIX}{k}")));
        headers.push("summary".to_string());
        headers.push("chat_history".to_string());
        headers
    }

    /// Flattens one record; missing answers become empty cells.
    pub fn row(&self, record: &SubmissionRecord) -> Vec<String> {
        let mut row = vec![
            record.prolific_id.as_str().to_string(),
            record.timestamp.to_string(),
        ];
        row.extend(
            self.survey_keys
                .iter()
                .map(|k| cell(record.survey_responses.get(k))),
        );
        row.extend(self.feedback_keys.iter().map(|k| cell(record.feedback.get(k))));
        row.push(record.summary.clone());
        row.push(chat_text(record));
        row
    }
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Participant-visible transcript as `[role] content` blocks.
pub fn chat_text(record: &SubmissionRecord) -> String {
    record
        .chat_history
        .iter()
        .filter(|e| e.role != Role::System)
        .map(|e| format!("[{}] {}", e.role, e.content))
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string()
}

/// Encodes `records` as CSV, or returns `None` when there is nothing to export.
pub fn to_csv(records: &[&SubmissionRecord]) -> Result<Option<Vec<u8>>, ExportError> {
    if records.is_empty() {
        return Ok(None);
    }

    let schema = ExportSchema::discover(records.iter().copied());
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(schema.headers())?;
    for record in records {
        writer.write_record(schema.row(record))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    Ok(Some(bytes))
}
