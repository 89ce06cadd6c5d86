//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Chat completion providers (OpenAI, mock)
//! - `storage` - Session state and submission files
//! - `http` - REST API

pub mod ai;
pub mod http;
pub mod storage;
