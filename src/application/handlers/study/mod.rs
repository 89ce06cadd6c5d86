//! Participant-facing command and query handlers.

mod create_session;
mod get_page;
mod send_chat_message;
mod submit_page;

pub use create_session::CreateSessionHandler;
pub use get_page::{GetPageHandler, GetPageQuery};
pub use send_chat_message::{
    ChatFailure, SendChatMessageCommand, SendChatMessageHandler, SendChatMessageResult,
};
pub use submit_page::{PageSubmission, SubmitPageCommand, SubmitPageHandler, SubmitPageResult};
