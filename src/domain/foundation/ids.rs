//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a participant's browsing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random SessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Participant identifier as entered on the welcome page (a Prolific ID).
///
/// Stored trimmed. The raw value is kept verbatim in submission records;
/// [`ParticipantId::file_component`] gives the form used in file names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Creates a participant id, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if the id is blank.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("participant_id"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the id with every character outside `[A-Za-z0-9_-]` replaced by `_`.
    pub fn file_component(&self) -> String {
        self.0
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_round_trips_through_string() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn session_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }

    #[test]
    fn participant_id_is_trimmed() {
        let id = ParticipantId::new("  5f3a9c  ").unwrap();
        assert_eq!(id.as_str(), "5f3a9c");
    }

    #[test]
    fn participant_id_rejects_blank() {
        assert!(ParticipantId::new("").is_err());
        assert!(ParticipantId::new("   \t").is_err());
    }

    #[test]
    fn file_component_replaces_path_characters() {
        let id = ParticipantId::new("../etc/passwd").unwrap();
        assert_eq!(id.file_component(), "___etc_passwd");

        let plain = ParticipantId::new("abc-123_X").unwrap();
        assert_eq!(plain.file_component(), "abc-123_X");
    }
}
