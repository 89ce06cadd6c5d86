//! Turn-gated brainstorming chat.
//!
//! The controller owns the transcript and the turn counter. It builds the
//! outbound message list for each accepted user turn; the caller forwards that
//! list to a completion provider and hands the reply back through
//! [`BrainstormChat::record_reply`].

use serde::Serialize;
use thiserror::Error;

use super::message::TranscriptEntry;
use super::prompts::{system_prompt, FINAL_INSTRUCTION, WRAP_UP_INSTRUCTION};

pub const DEFAULT_TURN_LIMIT: u32 = 10;

/// Notice shown once the turn budget is spent.
pub const COMPLETION_NOTICE: &str =
    "Brainstorming session complete! Please review the final story and click 'Next' to continue.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("All {limit} brainstorming turns have been used")]
    LimitReached { limit: u32 },

    #[error("Message cannot be empty")]
    EmptyMessage,
}

/// Transcript plus turn budget for one participant.
///
/// # Invariants
///
/// - The first transcript entry is the system prompt
/// - `turns_used <= limit`
/// - `turns_used` equals the number of user entries in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrainstormChat {
    transcript: Vec<TranscriptEntry>,
    turns_used: u32,
    limit: u32,
}

impl BrainstormChat {
    /// Starts a chat seeded with the system prompt.
    pub fn new(limit: u32) -> Self {
        Self {
            transcript: vec![TranscriptEntry::system(system_prompt(limit))],
            turns_used: 0,
            limit,
        }
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Returns the entries the participant can see.
    pub fn visible_entries(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.transcript.iter().filter(|e| e.role.is_user_visible())
    }

    pub fn turns_used(&self) -> u32 {
        self.turns_used
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn remaining_turns(&self) -> u32 {
        self.limit.saturating_sub(self.turns_used)
    }

    /// Returns true once no further user input is accepted.
    pub fn is_complete(&self) -> bool {
        self.turns_used >= self.limit
    }

    /// Accepts one user message and returns the messages to send.
    ///
    /// The user entry is appended and the turn is consumed before anything is
    /// sent, so a failed completion still counts against the budget. Injected
    /// wrap-up and final instructions are part of the outbound list only.
    pub fn accept_user_message(&mut self, text: &str) -> Result<Vec<TranscriptEntry>, ChatError> {
        if self.is_complete() {
            return Err(ChatError::LimitReached { limit: self.limit });
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.transcript.push(TranscriptEntry::user(text));
        self.turns_used += 1;

        let mut outbound = self.transcript.clone();
        if let Some(instruction) = self.injected_instruction() {
            outbound.push(TranscriptEntry::system(instruction));
        }
        Ok(outbound)
    }

    /// Appends the assistant reply for the latest user turn.
    pub fn record_reply(&mut self, reply: impl Into<String>) {
        self.transcript.push(TranscriptEntry::assistant(reply));
    }

    fn injected_instruction(&self) -> Option<&'static str> {
        if self.turns_used == self.limit {
            Some(FINAL_INSTRUCTION)
        } else if self.turns_used + 1 == self.limit {
            Some(WRAP_UP_INSTRUCTION)
        } else {
            None
        }
    }
}

impl Default for BrainstormChat {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::Role;
    use proptest::prelude::*;

    #[test]
    fn new_chat_starts_with_system_prompt() {
        let chat = BrainstormChat::new(10);
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.transcript()[0].role, Role::System);
        assert_eq!(chat.visible_entries().count(), 0);
        assert_eq!(chat.turns_used(), 0);
    }

    #[test]
    fn outbound_contains_system_prompt_history_and_new_message() {
        let mut chat = BrainstormChat::new(10);
        chat.accept_user_message("Rooftop doors everywhere").unwrap();
        chat.record_reply("Sky mailboxes!");

        let outbound = chat.accept_user_message("Traffic lights in the clouds").unwrap();
        assert_eq!(outbound.len(), 4);
        assert_eq!(outbound[0].role, Role::System);
        assert_eq!(outbound[1], TranscriptEntry::user("Rooftop doors everywhere"));
        assert_eq!(outbound[2], TranscriptEntry::assistant("Sky mailboxes!"));
        assert_eq!(outbound[3], TranscriptEntry::user("Traffic lights in the clouds"));
    }

    #[test]
    fn wrap_up_instruction_is_injected_on_second_to_last_turn() {
        let mut chat = BrainstormChat::new(3);
        let first = chat.accept_user_message("one").unwrap();
        assert!(first.iter().all(|e| e.content != WRAP_UP_INSTRUCTION));

        let second = chat.accept_user_message("two").unwrap();
        let last = second.last().unwrap();
        assert_eq!(last.role, Role::System);
        assert_eq!(last.content, WRAP_UP_INSTRUCTION);
    }

    #[test]
    fn final_instruction_is_injected_on_last_turn_and_not_stored() {
        let mut chat = BrainstormChat::new(2);
        chat.accept_user_message("one").unwrap();
        let outbound = chat.accept_user_message("two").unwrap();

        assert_eq!(outbound.last().unwrap().content, FINAL_INSTRUCTION);
        assert!(chat
            .transcript()
            .iter()
            .all(|e| e.content != FINAL_INSTRUCTION && e.content != WRAP_UP_INSTRUCTION));
    }

    #[test]
    fn limit_blocks_further_messages() {
        let mut chat = BrainstormChat::new(1);
        chat.accept_user_message("only").unwrap();
        assert!(chat.is_complete());
        assert_eq!(
            chat.accept_user_message("more"),
            Err(ChatError::LimitReached { limit: 1 })
        );
        assert_eq!(chat.turns_used(), 1);
    }

    #[test]
    fn empty_message_does_not_consume_a_turn() {
        let mut chat = BrainstormChat::new(10);
        assert_eq!(chat.accept_user_message("   "), Err(ChatError::EmptyMessage));
        assert_eq!(chat.turns_used(), 0);
    }

    #[test]
    fn missing_reply_keeps_turn_consumed() {
        let mut chat = BrainstormChat::new(10);
        chat.accept_user_message("hello").unwrap();
        assert_eq!(chat.turns_used(), 1);
        assert_eq!(chat.transcript().last().unwrap().role, Role::User);
    }

    proptest! {
        #[test]
        fn turns_used_equals_accepted_messages_capped_at_limit(
            limit in 1u32..15,
            attempts in 0usize..30,
        ) {
            let mut chat = BrainstormChat::new(limit);
            let mut accepted = 0u32;
            for i in 0..attempts {
                match chat.accept_user_message(&format!("idea {i}")) {
                    Ok(_) => {
                        accepted += 1;
                        chat.record_reply("reply");
                    }
                    Err(err) => prop_assert_eq!(err, ChatError::LimitReached { limit }),
                }
            }
            prop_assert_eq!(accepted, (attempts as u32).min(limit));
            prop_assert_eq!(chat.turns_used(), accepted);
            let user_entries = chat.transcript().iter().filter(|e| e.role == Role::User).count();
            prop_assert_eq!(user_entries, accepted as usize);
            prop_assert!(chat.turns_used() <= chat.limit());
        }
    }
}
