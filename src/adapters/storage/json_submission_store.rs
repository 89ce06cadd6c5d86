//! JSON file store for submission records.
//!
//! One pretty-printed file per record, named by
//! [`SubmissionRecord::file_name`], inside a single directory that is created
//! on first write.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::submission::{StoredSubmission, SubmissionRecord};
use crate::ports::{
    ReadFailure, StorageError, SubmissionListing, SubmissionReader, SubmissionWriter,
};

const RECORD_EXTENSION: &str = "json";
const INDENT: &[u8] = b"    ";

/// Filesystem-backed submission store.
#[derive(Debug, Clone)]
pub struct JsonSubmissionStore {
    dir: PathBuf,
}

impl JsonSubmissionStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_record(path: &Path) -> Result<SubmissionRecord, String> {
        let bytes = fs::read(path).await.map_err(|e| e.to_string())?;
        serde_json::from_slice(&bytes).map_err(|e| e.to_string())
    }
}

/// Serializes `record` with four-space indentation.
fn to_pretty_json(record: &SubmissionRecord) -> Result<Vec<u8>, StorageError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    record
        .serialize(&mut serializer)
        .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
    Ok(buf)
}

#[async_trait]
impl SubmissionWriter for JsonSubmissionStore {
    async fn write(&self, record: &SubmissionRecord) -> Result<String, StorageError> {
        fs::create_dir_all(&self.dir).await?;

        let file_name = record.file_name();
        let file_path = self.dir.join(&file_name);
        let contents = to_pretty_json(record)?;

        // Write atomically using a temporary file
        let temp_path = file_path.with_extension("json.tmp");
        fs::write(&temp_path, contents).await?;
        fs::rename(&temp_path, &file_path).await?;

        tracing::info!(file = %file_name, "Submission record written");
        Ok(file_name)
    }
}

#[async_trait]
impl SubmissionReader for JsonSubmissionStore {
    async fn list(&self) -> Result<SubmissionListing, StorageError> {
        fs::create_dir_all(&self.dir).await?;

        let mut names = Vec::new();
        let mut dir = fs::read_dir(&self.dir).await?;
        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            let is_record = path.extension().and_then(|e| e.to_str()) == Some(RECORD_EXTENSION);
            if is_record {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();

        let mut listing = SubmissionListing::default();
        for file_name in names {
            match Self::read_record(&self.dir.join(&file_name)).await {
                Ok(record) => listing.entries.push(StoredSubmission { file_name, record }),
                Err(reason) => {
                    tracing::warn!(file = %file_name, %reason, "Skipping unreadable submission");
                    listing.failures.push(ReadFailure { file_name, reason });
                }
            }
        }
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::TranscriptEntry;
    use crate::domain::foundation::{ParticipantId, Timestamp};
    use crate::domain::survey::Answers;
    use serde_json::json;
    use tempfile::TempDir;

    fn record(id: &str, stamp: &str) -> SubmissionRecord {
        let mut survey = Answers::new();
        survey.insert("age".into(), json!(33));
        SubmissionRecord {
            prolific_id: ParticipantId::new(id).unwrap(),
            timestamp: Timestamp::parse(stamp).unwrap(),
            survey_responses: survey,
            chat_history: vec![
                TranscriptEntry::system("rules"),
                TranscriptEntry::user("Flying buses"),
            ],
            summary: "Buses with wings.".into(),
            feedback: Answers::new(),
        }
    }

    #[tokio::test]
    async fn write_then_list_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonSubmissionStore::new(temp_dir.path().join("chat_logs"));
        let original = record("P1", "20250101_101010");

        let file_name = store.write(&original).await.unwrap();
        assert_eq!(file_name, "chat_P1_20250101_101010.json");

        let listing = store.list().await.unwrap();
        assert!(listing.failures.is_empty());
        assert_eq!(listing.entries.len(), 1);
        assert_eq!(listing.entries[0].file_name, file_name);
        assert_eq!(listing.entries[0].record, original);
    }

    #[tokio::test]
    async fn files_use_four_space_indentation() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonSubmissionStore::new(temp_dir.path());
        let file_name = store.write(&record("P1", "20250101_101010")).await.unwrap();

        let text = std::fs::read_to_string(temp_dir.path().join(file_name)).unwrap();
        assert!(text.starts_with("{\n    \"prolific_id\": \"P1\""));
    }

    #[tokio::test]
    async fn same_second_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonSubmissionStore::new(temp_dir.path());

        let mut first = record("P1", "20250101_101010");
        store.write(&first).await.unwrap();
        first.summary = "second version".into();
        store.write(&first).await.unwrap();

        let listing = store.list().await.unwrap();
        assert_eq!(listing.entries.len(), 1);
        assert_eq!(listing.entries[0].record.summary, "second version");
    }

    #[tokio::test]
    async fn listing_is_sorted_and_reports_bad_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonSubmissionStore::new(temp_dir.path());
        store.write(&record("B", "20250101_101010")).await.unwrap();
        store.write(&record("A", "20250101_101010")).await.unwrap();
        std::fs::write(temp_dir.path().join("broken.json"), "{ not json").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let listing = store.list().await.unwrap();
        let names: Vec<_> = listing.entries.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["chat_A_20250101_101010.json", "chat_B_20250101_101010.json"]
        );
        assert_eq!(listing.failures.len(), 1);
        assert_eq!(listing.failures[0].file_name, "broken.json");
    }

    #[tokio::test]
    async fn missing_directory_lists_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonSubmissionStore::new(temp_dir.path().join("not_yet"));
        let listing = store.list().await.unwrap();
        assert!(listing.entries.is_empty());
        assert!(listing.failures.is_empty());
    }

    #[tokio::test]
    async fn no_temp_files_remain_after_write() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonSubmissionStore::new(temp_dir.path());
        store.write(&record("P1", "20250101_101010")).await.unwrap();

        let leftovers = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }
}
