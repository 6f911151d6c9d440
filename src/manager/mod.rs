//! The transition manager and its notification surface.
//!
//! # Protocol
//!
//! 1. Requesting the current state is a silent no-op.
//! 2. The `(current, requested)` pair must match a rule, or the failure
//!    callback gets [`FailureReason::InvalidTransition`].
//! 3. Changing listeners may veto; a veto reports
//!    [`FailureReason::CancelledTransition`].
//! 4. Otherwise the state is committed and changed listeners are told.
//!
//! What a state change actually does (loading a level, saving, showing a
//! menu) belongs to changed listeners, not to the manager.

mod events;
mod listeners;
mod machine;

pub use events::{ChangedEvent, ChangingEvent, FailureReason, TransitionOutcome};
pub use listeners::{ChangedListener, ChangingListener, FailureCallback, ListenerId};
pub use machine::TransitionManager;
