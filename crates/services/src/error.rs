//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::SessionError;

/// Errors emitted by `QuizLoopService`.
///
/// Session errors reflect stale or out-of-range UI events; they guarantee no
/// state change, so callers may drop them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizLoopError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl QuizLoopError {
    /// Whether this error came from an event arriving after the state it
    /// targeted was already gone (late click, stale tick, double advance).
    #[must_use]
    pub fn is_stale_event(&self) -> bool {
        matches!(
            self,
            Self::Session(SessionError::NotInProgress | SessionError::NotResolved)
        )
    }
}
