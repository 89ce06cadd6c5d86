//! SubmitPageHandler - Validates a page's form and advances the session.
//!
//! The transition is checked before the form, so a submission for the wrong
//! page is a conflict rather than a validation failure. Validation failures
//! leave the session untouched.

use std::sync::Arc;

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use subtle::ConstantTimeEq;

use crate::application::handlers::{load_session, StudyError};
use crate::domain::foundation::{SessionId, StateMachine, Timestamp};
use crate::domain::study::{Page, PageAction, SessionError, StudySession};
use crate::domain::submission::SubmissionRecord;
use crate::domain::survey::{
    AdminLoginForm, Answers, ConsentForm, DemographicsForm, FeedbackForm, PersonalityForm,
    SummaryForm,
};
use crate::ports::{SessionRepository, SubmissionWriter};

/// One page's submitted form, tagged by the action it requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PageSubmission {
    StartParticipant(ConsentForm),
    AdminLogin(AdminLoginForm),
    SubmitDemographics(DemographicsForm),
    SubmitPersonality(PersonalityForm),
    StartBrainstorm,
    FinishBrainstorm,
    SubmitSummary(SummaryForm),
    SubmitFeedback(FeedbackForm),
    Logout,
}

impl PageSubmission {
    pub fn action(&self) -> PageAction {
        match self {
            PageSubmission::StartParticipant(_) => PageAction::StartParticipant,
            PageSubmission::AdminLogin(_) => PageAction::AdminLogin,
            PageSubmission::SubmitDemographics(_) => PageAction::SubmitDemographics,
            PageSubmission::SubmitPersonality(_) => PageAction::SubmitPersonality,
            PageSubmission::StartBrainstorm => PageAction::StartBrainstorm,
            PageSubmission::FinishBrainstorm => PageAction::FinishBrainstorm,
            PageSubmission::SubmitSummary(_) => PageAction::SubmitSummary,
            PageSubmission::SubmitFeedback(_) => PageAction::SubmitFeedback,
            PageSubmission::Logout => PageAction::Logout,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmitPageCommand {
    pub session_id: SessionId,
    pub submission: PageSubmission,
}

#[derive(Debug, Clone)]
pub struct SubmitPageResult {
    pub session: StudySession,
    /// File name of the record written by a feedback submission.
    pub stored_as: Option<String>,
}

/// Handler for page submissions.
pub struct SubmitPageHandler {
    repository: Arc<dyn SessionRepository>,
    writer: Arc<dyn SubmissionWriter>,
    admin_password: Secret<String>,
}

impl SubmitPageHandler {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        writer: Arc<dyn SubmissionWriter>,
        admin_password: Secret<String>,
    ) -> Self {
        Self {
            repository,
            writer,
            admin_password,
        }
    }

    pub async fn handle(&self, cmd: SubmitPageCommand) -> Result<SubmitPageResult, StudyError> {
        let mut session = load_session(self.repository.as_ref(), cmd.session_id).await?;
        let action = cmd.submission.action();
        session
            .page()
            .transition(action)
            .map_err(SessionError::from)?;

        let from = session.page();
        let result = self.apply(&mut session, cmd.submission).await;
        if let Err(StudyError::Validation(errors)) = &result {
            tracing::info!(
                session_id = %session.id(),
                page = %from,
                error_count = errors.len(),
                attention_failed = errors.has_attention_failure(),
                "Page submission rejected"
            );
        }
        let stored_as = result?;

        if stored_as.is_none() {
            self.repository.update(&session).await?;
        }

        tracing::info!(
            session_id = %session.id(),
            from = %from,
            to = %session.page(),
            "Page advanced"
        );
        Ok(SubmitPageResult { session, stored_as })
    }

    async fn apply(
        &self,
        session: &mut StudySession,
        submission: PageSubmission,
    ) -> Result<Option<String>, StudyError> {
        match submission {
            PageSubmission::StartParticipant(form) => {
                session.start_participant(form.validate()?)?;
            }
            PageSubmission::AdminLogin(form) => {
                if !self.password_matches(&form.password) {
                    tracing::warn!(session_id = %session.id(), "Admin login rejected");
                    return Err(StudyError::IncorrectPassword);
                }
                session.admin_login()?;
            }
            PageSubmission::SubmitDemographics(form) => {
                session.submit_demographics(form.validate()?)?;
            }
            PageSubmission::SubmitPersonality(form) => {
                session.submit_personality(form.validate()?)?;
            }
            PageSubmission::StartBrainstorm => {
                session.start_brainstorm()?;
            }
            PageSubmission::FinishBrainstorm => {
                session.finish_brainstorm()?;
            }
            PageSubmission::SubmitSummary(form) => {
                session.submit_summary(form.validate()?)?;
            }
            PageSubmission::SubmitFeedback(form) => {
                let answers = form.validate()?;
                return self.complete(session, answers).await.map(Some);
            }
            PageSubmission::Logout => {
                session.logout()?;
            }
        }
        Ok(None)
    }

    /// Writes the finished record, then publishes the advanced session.
    ///
    /// Works on a copy so a failed write leaves the stored session on the
    /// feedback page with its answers unrecorded.
    async fn complete(
        &self,
        session: &mut StudySession,
        answers: Answers,
    ) -> Result<String, StudyError> {
        let mut finished = session.clone();
        finished.submit_feedback(answers)?;
        debug_assert_eq!(finished.page(), Page::ThankYou);

        let record = SubmissionRecord::from_session(&finished, Timestamp::now())?;
        let file_name = self.writer.write(&record).await?;
        self.repository.update(&finished).await?;

        tracing::info!(
            session_id = %finished.id(),
            file_name = %file_name,
            "Submission recorded"
        );
        *session = finished;
        Ok(file_name)
    }

    fn password_matches(&self, candidate: &str) -> bool {
        let expected = self.admin_password.expose_secret().as_bytes();
        candidate.as_bytes().ct_eq(expected).into()
    }
}
