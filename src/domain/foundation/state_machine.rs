//! State machine trait for action-driven status enums.
//!
//! Provides a consistent interface for validating and performing transitions
//! where each edge is labelled by the action that triggers it.

use std::fmt::Debug;

/// Error returned when an action is not legal from the current state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot apply {action} from {from}")]
pub struct TransitionError {
    pub from: String,
    pub action: String,
}

/// Trait for enums that represent action-labelled state machines.
///
/// Implementors provide the transition table; validated transitions and
/// terminal-state checks come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for Page {
///     type Action = PageAction;
///
///     fn next(&self, action: PageAction) -> Option<Self> {
///         match (self, action) {
///             (Page::Welcome, PageAction::StartParticipant) => Some(Page::Demographics),
///             // ... etc
///             _ => None,
///         }
///     }
///     // ...
/// }
///
/// let page = page.transition(PageAction::StartParticipant)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + Debug {
    /// Action type labelling the edges.
    type Action: Copy + Debug;

    /// Returns the target of `action` from self, if the edge exists.
    fn next(&self, action: Self::Action) -> Option<Self>;

    /// Returns every action that is legal from self.
    fn valid_actions(&self) -> Vec<Self::Action>;

    /// Performs a transition, returning an error for an illegal action.
    fn transition(&self, action: Self::Action) -> Result<Self, TransitionError> {
        self.next(action).ok_or_else(|| TransitionError {
            from: format!("{:?}", self),
            action: format!("{:?}", action),
        })
    }

    /// Checks if the current state has no outgoing edges.
    fn is_terminal(&self) -> bool {
        self.valid_actions().is_empty()
    }
}
