//! StudySession aggregate - one participant's (or administrator's) visit.
//!
//! Every mutation goes through a page action, so the current page only changes
//! along the transition table.

use serde::Serialize;
use thiserror::Error;

use super::page::{Page, PageAction};
use crate::domain::conversation::{BrainstormChat, ChatError, TranscriptEntry};
use crate::domain::foundation::{
    ParticipantId, SessionId, StateMachine, Timestamp, TransitionError,
};
use crate::domain::survey::{merge_answers, Answers};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    #[error("Session is on page {actual}, expected {expected}")]
    WrongPage { expected: Page, actual: Page },

    #[error("{remaining} brainstorming turns remain before the session can continue")]
    BrainstormIncomplete { remaining: u32 },

    #[error("No participant id has been recorded for this session")]
    MissingParticipant,

    #[error(transparent)]
    Chat(#[from] ChatError),
}

/// Mutable state for one browsing session.
#[derive(Debug, Clone, Serialize)]
pub struct StudySession {
    id: SessionId,
    page: Page,
    participant_id: Option<ParticipantId>,
    survey_responses: Answers,
    chat: BrainstormChat,
    summary_text: String,
    feedback_responses: Answers,
    created_at: Timestamp,
}

impl StudySession {
    /// Creates a session on the welcome page.
    pub fn new(turn_limit: u32) -> Self {
        Self {
            id: SessionId::new(),
            page: Page::Welcome,
            participant_id: None,
            survey_responses: Answers::new(),
            chat: BrainstormChat::new(turn_limit),
            summary_text: String::new(),
            feedback_responses: Answers::new(),
            created_at: Timestamp::now(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn participant_id(&self) -> Option<&ParticipantId> {
        self.participant_id.as_ref()
    }

    pub fn survey_responses(&self) -> &Answers {
        &self.survey_responses
    }

    pub fn chat(&self) -> &BrainstormChat {
        &self.chat
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        self.chat.transcript()
    }

    pub fn user_turns(&self) -> u32 {
        self.chat.turns_used()
    }

    pub fn summary_text(&self) -> &str {
        &self.summary_text
    }

    pub fn feedback_responses(&self) -> &Answers {
        &self.feedback_responses
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    // ───────────────────────────────────────────────────────────────
    // Page actions
    // ───────────────────────────────────────────────────────────────

    pub fn start_participant(&mut self, participant_id: ParticipantId) -> Result<Page, SessionError> {
        let next = self.page.transition(PageAction::StartParticipant)?;
        self.participant_id = Some(participant_id);
        Ok(self.move_to(next))
    }

    pub fn admin_login(&mut self) -> Result<Page, SessionError> {
        let next = self.page.transition(PageAction::AdminLogin)?;
        Ok(self.move_to(next))
    }

    pub fn logout(&mut self) -> Result<Page, SessionError> {
        let next = self.page.transition(PageAction::Logout)?;
        Ok(self.move_to(next))
    }

    pub fn submit_demographics(&mut self, answers: Answers) -> Result<Page, SessionError> {
        let next = self.page.transition(PageAction::SubmitDemographics)?;
        merge_answers(&mut self.survey_responses, answers);
        Ok(self.move_to(next))
    }

    pub fn submit_personality(&mut self, answers: Answers) -> Result<Page, SessionError> {
        let next = self.page.transition(PageAction::SubmitPersonality)?;
        merge_answers(&mut self.survey_responses, answers);
        Ok(self.move_to(next))
    }

    pub fn start_brainstorm(&mut self) -> Result<Page, SessionError> {
        let next = self.page.transition(PageAction::StartBrainstorm)?;
        Ok(self.move_to(next))
    }

    /// Leaves the brainstorm page; only allowed once every turn is used.
    pub fn finish_brainstorm(&mut self) -> Result<Page, SessionError> {
        let next = self.page.transition(PageAction::FinishBrainstorm)?;
        if !self.chat.is_complete() {
            return Err(SessionError::BrainstormIncomplete {
                remaining: self.chat.remaining_turns(),
            });
        }
        Ok(self.move_to(next))
    }

    pub fn submit_summary(&mut self, summary: String) -> Result<Page, SessionError> {
        let next = self.page.transition(PageAction::SubmitSummary)?;
        self.summary_text = summary;
        Ok(self.move_to(next))
    }

    /// Records feedback and completes the task.
    ///
    /// Callers persist the session after this returns and discard the mutated
    /// copy if the write fails.
    pub fn submit_feedback(&mut self, answers: Answers) -> Result<Page, SessionError> {
        let next = self.page.transition(PageAction::SubmitFeedback)?;
        if self.participant_id.is_none() {
            return Err(SessionError::MissingParticipant);
        }
        merge_answers(&mut self.feedback_responses, answers);
        Ok(self.move_to(next))
    }

    // ───────────────────────────────────────────────────────────────
    // Chat
    // ───────────────────────────────────────────────────────────────

    /// Accepts a chat message and returns the outbound message list.
    pub fn accept_chat_message(&mut self, text: &str) -> Result<Vec<TranscriptEntry>, SessionError> {
        self.ensure_page(Page::Brainstorm)?;
        Ok(self.chat.accept_user_message(text)?)
    }

    pub fn record_chat_reply(&mut self, reply: impl Into<String>) {
        self.chat.record_reply(reply);
    }

    /// Returns an error unless the session is on `expected`.
    pub fn ensure_page(&self, expected: Page) -> Result<(), SessionError> {
        if self.page != expected {
            return Err(SessionError::WrongPage {
                expected,
                actual: self.page,
            });
        }
        Ok(())
    }

    fn move_to(&mut self, next: Page) -> Page {
        self.page = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn participant() -> ParticipantId {
        ParticipantId::new("P123").unwrap()
    }

    fn answers(key: &str, value: serde_json::Value) -> Answers {
        let mut a = Answers::new();
        a.insert(key.to_string(), value);
        a
    }

    fn session_on_brainstorm(limit: u32) -> StudySession {
        let mut s = StudySession::new(limit);
        s.start_participant(participant()).unwrap();
        s.submit_demographics(answers("age", json!(30))).unwrap();
        s.submit_personality(answers("is reserved", json!("Strongly Agree")))
            .unwrap();
        s.start_brainstorm().unwrap();
        s
    }

    #[test]
    fn new_session_starts_on_welcome() {
        let s = StudySession::new(10);
        assert_eq!(s.page(), Page::Welcome);
        assert!(s.participant_id().is_none());
        assert_eq!(s.user_turns(), 0);
    }

    #[test]
    fn questionnaire_answers_merge_into_survey_responses() {
        let s = session_on_brainstorm(10);
        assert_eq!(s.survey_responses()["age"], 30);
        assert_eq!(s.survey_responses()["is reserved"], "Strongly Agree");
    }

    #[test]
    fn out_of_order_submission_leaves_page_unchanged() {
        let mut s = StudySession::new(10);
        let err = s.submit_summary("text".into()).unwrap_err();
        assert!(matches!(err, SessionError::InvalidTransition(_)));
        assert_eq!(s.page(), Page::Welcome);
        assert!(s.summary_text().is_empty());
    }

    #[test]
    fn chat_is_rejected_off_the_brainstorm_page() {
        let mut s = StudySession::new(10);
        let err = s.accept_chat_message("hi").unwrap_err();
        assert_eq!(
            err,
            SessionError::WrongPage {
                expected: Page::Brainstorm,
                actual: Page::Welcome
            }
        );
    }

    #[test]
    fn finishing_brainstorm_requires_every_turn() {
        let mut s = session_on_brainstorm(2);
        s.accept_chat_message("one").unwrap();
        assert_eq!(
            s.finish_brainstorm(),
            Err(SessionError::BrainstormIncomplete { remaining: 1 })
        );
        s.accept_chat_message("two").unwrap();
        assert_eq!(s.finish_brainstorm(), Ok(Page::Summary));
    }

    #[test]
    fn full_participant_flow_reaches_thank_you() {
        let mut s = session_on_brainstorm(1);
        s.accept_chat_message("Sky lanes").unwrap();
        s.record_chat_reply("And wing-friendly buildings!");
        s.finish_brainstorm().unwrap();
        s.submit_summary("We imagined sky lanes.".into()).unwrap();
        let page = s.submit_feedback(answers("valence_post", json!(7))).unwrap();

        assert_eq!(page, Page::ThankYou);
        assert_eq!(s.feedback_responses()["valence_post"], 7);
        assert_eq!(s.transcript().len(), 3);
    }

    #[test]
    fn admin_login_and_logout() {
        let mut s = StudySession::new(10);
        assert_eq!(s.admin_login(), Ok(Page::AdminDashboard));
        assert_eq!(s.logout(), Ok(Page::Welcome));
    }
}
