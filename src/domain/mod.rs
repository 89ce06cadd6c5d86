//! Domain layer containing the study flow and its data.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `study` - Page flow, session aggregate and page views
//! - `survey` - Questionnaire catalogs, typed forms and validation
//! - `conversation` - Turn-limited brainstorming chat
//! - `submission` - Persisted records and CSV export

pub mod conversation;
pub mod foundation;
pub mod study;
pub mod submission;
pub mod survey;
