//! The `(from, to)` pair the manager validates.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A proposed or committed move from one state to another.
///
/// Equality is structural and order-sensitive: `A -> B` and `B -> A` are
/// different transitions. The same type serves as a rule's threshold and
/// as the candidate submitted at request time.
///
/// # Example
///
/// ```rust
/// use scenegate::core::Transition;
/// use scenegate::state_enum;
///
/// state_enum! {
///     enum Scene {
///         Null,
///         Intro,
///         Menu,
///     }
///     null: Null
/// }
///
/// let forward = Transition::new(Scene::Intro, Scene::Menu);
/// assert_eq!(forward, Transition::new(Scene::Intro, Scene::Menu));
/// assert_ne!(forward, forward.reversed());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
}

impl<S: State> Transition<S> {
    pub fn new(from: S, to: S) -> Self {
        Self { from, to }
    }

    /// The same pair in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }

    /// True when both ends are the same state.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl<S: State> fmt::Display for Transition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from.name(), self.to.name())
    }
}
