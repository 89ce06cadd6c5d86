//! Conversation module - Turn-limited brainstorming chat.

mod controller;
mod message;
pub mod prompts;

pub use controller::{BrainstormChat, ChatError, COMPLETION_NOTICE, DEFAULT_TURN_LIMIT};
pub use message::{Role, TranscriptEntry};
