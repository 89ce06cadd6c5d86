//! SendChatMessageHandler - One brainstorming turn.
//!
//! The turn is consumed once the message is accepted, whether or not a reply
//! arrives. Completion failures are reported alongside the updated session
//! instead of failing the request.

use std::sync::Arc;

use crate::application::handlers::{load_session, StudyError};
use crate::domain::foundation::{ErrorCode, SessionId};
use crate::domain::study::StudySession;
use crate::ports::{AIError, AIProvider, CompletionRequest, RequestMetadata, SessionRepository};

#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub session_id: SessionId,
    pub message: String,
}

/// Why a consumed turn has no reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatFailure {
    /// No completion service is configured.
    Unavailable,
    /// The completion call failed.
    Provider(AIError),
}

impl ChatFailure {
    pub fn code(&self) -> ErrorCode {
        match self {
            ChatFailure::Unavailable => ErrorCode::ChatUnavailable,
            ChatFailure::Provider(_) => ErrorCode::AIProviderError,
        }
    }

    /// Text shown to the participant.
    pub fn message(&self) -> String {
        match self {
            ChatFailure::Unavailable => {
                "Chat is unavailable because no completion service is configured.".to_string()
            }
            ChatFailure::Provider(err) => format!("Error getting AI response: {}", err),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SendChatMessageResult {
    pub session: StudySession,
    pub failure: Option<ChatFailure>,
}

/// Handler for brainstorming turns.
pub struct SendChatMessageHandler {
    repository: Arc<dyn SessionRepository>,
    ai_provider: Option<Arc<dyn AIProvider>>,
    max_tokens: u32,
}

impl SendChatMessageHandler {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        ai_provider: Option<Arc<dyn AIProvider>>,
        max_tokens: u32,
    ) -> Self {
        Self {
            repository,
            ai_provider,
            max_tokens,
        }
    }

    pub async fn handle(
        &self,
        cmd: SendChatMessageCommand,
    ) -> Result<SendChatMessageResult, StudyError> {
        let mut session = load_session(self.repository.as_ref(), cmd.session_id).await?;
        let outbound = session.accept_chat_message(&cmd.message)?;
        let turn = session.user_turns();
        // Persist the consumed turn before awaiting the provider.
        self.repository.update(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            turn,
            limit = session.chat().limit(),
            "Chat turn accepted"
        );

        let failure = match &self.ai_provider {
            None => Some(ChatFailure::Unavailable),
            Some(provider) => {
                let request = CompletionRequest::new(RequestMetadata::new(session.id(), turn))
                    .with_transcript(&outbound)
                    .with_max_tokens(self.max_tokens);

                match provider.complete(request).await {
                    Ok(response) => {
                        session.record_chat_reply(response.content);
                        None
                    }
                    Err(err) => {
                        tracing::warn!(
                            session_id = %session.id(),
                            turn,
                            error = %err,
                            "Completion failed"
                        );
                        Some(ChatFailure::Provider(err))
                    }
                }
            }
        };

        if failure.is_none() {
            self.repository.update(&session).await?;
        }
        Ok(SendChatMessageResult { session, failure })
    }
}
