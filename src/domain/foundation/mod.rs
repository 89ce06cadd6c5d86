//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait and error
//! types that form the vocabulary of the study domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{ParticipantId, SessionId};
pub use state_machine::{StateMachine, TransitionError};
pub use timestamp::{Timestamp, STAMP_FORMAT};
