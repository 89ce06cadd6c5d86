//! CoCreate Study - Guided research survey with a turn-limited AI brainstorm.
//!
//! Participants move through consent, questionnaires, a brainstorming chat
//! with a fixed turn budget, a written summary and feedback. Completed
//! sessions are stored as JSON records; administrators can list and export
//! them as CSV.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
