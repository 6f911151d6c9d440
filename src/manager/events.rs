//! Notification payloads and failure reasons.

use crate::core::{State, Transition};
use thiserror::Error;

/// Raised before a transition is committed.
///
/// Listeners see the event mutably and may set `cancel`. Listeners run in
/// registration order and each one may overwrite the flag, so the value left
/// by the last listener decides.
#[derive(Clone, Debug, PartialEq)]
pub struct ChangingEvent<S: State> {
    /// The state the manager is in now
    pub current: S,
    /// The state it is about to enter
    pub prospective: S,
    /// Set to `true` to veto the transition
    pub cancel: bool,
}

impl<S: State> ChangingEvent<S> {
    pub(crate) fn new(current: S, prospective: S) -> Self {
        Self {
            current,
            prospective,
            cancel: false,
        }
    }

    /// Veto the transition.
    pub fn veto(&mut self) {
        self.cancel = true;
    }
}

/// Raised after a transition is committed. Informational only.
#[derive(Clone, Debug, PartialEq)]
pub struct ChangedEvent<S: State> {
    /// The state just entered
    pub current: S,
    /// The state that was left
    pub original: S,
}

/// Why a requested transition did not happen.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// The transition is not on the allow-list
    #[error("The transition was invalid")]
    InvalidTransition,

    /// A changing listener vetoed the transition
    #[error("The transition was cancelled")]
    CancelledTransition,
}

impl FailureReason {
    /// The fixed human-readable reason string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTransition => "The transition was invalid",
            Self::CancelledTransition => "The transition was cancelled",
        }
    }
}

/// What a transition request ended up doing.
#[derive(Clone, Debug, PartialEq)]
pub enum TransitionOutcome<S: State> {
    /// The requested state was already current; nothing happened
    Unchanged,

    /// The transition was committed
    Changed(Transition<S>),

    /// The transition was refused
    Failed(FailureReason),
}

impl<S: State> TransitionOutcome<S> {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    pub fn failure(&self) -> Option<FailureReason> {
        match self {
            Self::Failed(reason) => Some(*reason),
            _ => None,
        }
    }
}
