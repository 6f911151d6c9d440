//! Core state types.
//!
//! - States via the `State` trait
//! - The `(from, to)` `Transition` pair
//! - Immutable history of committed transitions
//!
//! Nothing in this module has side effects.

mod history;
mod state;
mod transition;

pub use history::{StateHistory, TransitionRecord};
pub use state::State;
pub use transition::Transition;
