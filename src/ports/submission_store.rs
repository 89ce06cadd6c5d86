//! Submission store ports.
//!
//! The writer persists one completed session as an immutable record. The
//! reader lists every record in the submissions directory, reporting files it
//! cannot read without aborting the listing.

use async_trait::async_trait;
use serde::Serialize;

use super::StorageError;
use crate::domain::submission::{StoredSubmission, SubmissionRecord};

/// Port for writing completed submissions.
#[async_trait]
pub trait SubmissionWriter: Send + Sync {
    /// Writes `record` atomically and returns the file name used.
    ///
    /// A record with the same file name is overwritten.
    async fn write(&self, record: &SubmissionRecord) -> Result<String, StorageError>;
}

/// Port for reading persisted submissions.
#[async_trait]
pub trait SubmissionReader: Send + Sync {
    /// Reads every record in file-name order.
    ///
    /// # Errors
    ///
    /// Only directory-level failures are errors; unreadable files are
    /// reported in [`SubmissionListing::failures`].
    async fn list(&self) -> Result<SubmissionListing, StorageError>;
}

/// Result of reading the submissions directory.
#[derive(Debug, Clone, Default)]
pub struct SubmissionListing {
    pub entries: Vec<StoredSubmission>,
    pub failures: Vec<ReadFailure>,
}

/// A file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadFailure {
    pub file_name: String,
    pub reason: String,
}
