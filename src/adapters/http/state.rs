//! Shared application state for the study API.

use std::sync::Arc;

use secrecy::Secret;

use crate::application::handlers::{
    CreateSessionHandler, ExportSubmissionsHandler, GetPageHandler, ListSubmissionsHandler,
    SendChatMessageHandler, SubmitPageHandler,
};
use crate::domain::study::RenderContext;
use crate::ports::{AIProvider, SessionRepository, SubmissionReader, SubmissionWriter};

/// Dependencies shared by every request.
///
/// Cloned per request; everything heavy sits behind an `Arc`.
#[derive(Clone)]
pub struct StudyAppState {
    pub sessions: Arc<dyn SessionRepository>,
    pub writer: Arc<dyn SubmissionWriter>,
    pub reader: Arc<dyn SubmissionReader>,
    /// `None` runs the study with chat disabled.
    pub ai_provider: Option<Arc<dyn AIProvider>>,
    pub admin_password: Secret<String>,
    pub turn_limit: u32,
    pub max_tokens: u32,
}

impl StudyAppState {
    pub fn render_context(&self) -> RenderContext {
        RenderContext {
            chat_available: self.ai_provider.is_some(),
        }
    }

    pub fn create_session_handler(&self) -> CreateSessionHandler {
        CreateSessionHandler::new(self.sessions.clone(), self.turn_limit)
    }

    pub fn get_page_handler(&self) -> GetPageHandler {
        GetPageHandler::new(self.sessions.clone())
    }

    pub fn submit_page_handler(&self) -> SubmitPageHandler {
        SubmitPageHandler::new(
            self.sessions.clone(),
            self.writer.clone(),
            self.admin_password.clone(),
        )
    }

    pub fn send_chat_message_handler(&self) -> SendChatMessageHandler {
        SendChatMessageHandler::new(
            self.sessions.clone(),
            self.ai_provider.clone(),
            self.max_tokens,
        )
    }

    pub fn list_submissions_handler(&self) -> ListSubmissionsHandler {
        ListSubmissionsHandler::new(self.sessions.clone(), self.reader.clone())
    }

    pub fn export_submissions_handler(&self) -> ExportSubmissionsHandler {
        ExportSubmissionsHandler::new(self.sessions.clone(), self.reader.clone())
    }
}
