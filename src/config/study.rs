//! Study configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Study flow configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StudyConfig {
    /// Shared administrator password
    #[serde(default = "default_admin_password")]
    pub admin_password: Secret<String>,

    /// Directory holding one JSON file per submission
    #[serde(default = "default_submissions_dir")]
    pub submissions_dir: PathBuf,

    /// Brainstorming turns per participant
    #[serde(default = "default_turn_limit")]
    pub turn_limit: u32,
}

impl StudyConfig {
    pub fn admin_password(&self) -> &str {
        self.admin_password.expose_secret()
    }

    /// Validate study configuration
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        if self.turn_limit == 0 {
            return Err(ValidationError::InvalidTurnLimit);
        }
        if self.admin_password().is_empty() {
            return Err(ValidationError::MissingRequired("STUDY__ADMIN_PASSWORD"));
        }
        if self.submissions_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STUDY__SUBMISSIONS_DIR"));
        }
        if production && self.admin_password() == DEFAULT_ADMIN_PASSWORD {
            return Err(ValidationError::DefaultAdminPassword);
        }
        Ok(())
    }
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            admin_password: default_admin_password(),
            submissions_dir: default_submissions_dir(),
            turn_limit: default_turn_limit(),
        }
    }
}

fn default_admin_password() -> Secret<String> {
    Secret::new(DEFAULT_ADMIN_PASSWORD.to_string())
}

fn default_submissions_dir() -> PathBuf {
    PathBuf::from("chat_logs")
}

fn default_turn_limit() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_config_defaults() {
        let config = StudyConfig::default();
        assert_eq!(config.admin_password(), "admin123");
        assert_eq!(config.submissions_dir, PathBuf::from("chat_logs"));
        assert_eq!(config.turn_limit, 10);
    }

    #[test]
    fn test_default_password_allowed_outside_production() {
        assert!(StudyConfig::default().validate(false).is_ok());
    }

    #[test]
    fn test_default_password_rejected_in_production() {
        assert_eq!(
            StudyConfig::default().validate(true),
            Err(ValidationError::DefaultAdminPassword)
        );
    }

    #[test]
    fn test_zero_turn_limit_is_invalid() {
        let config = StudyConfig {
            turn_limit: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(false), Err(ValidationError::InvalidTurnLimit));
    }

    #[test]
    fn test_empty_password_is_invalid() {
        let config = StudyConfig {
            admin_password: Secret::new(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(false),
            Err(ValidationError::MissingRequired(_))
        ));
    }
}
