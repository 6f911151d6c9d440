//! Single predicates over a candidate value.
//!
//! A condition holds no mutable state. The candidate is handed in at
//! evaluation time, so the same condition can be checked from many places
//! at once.

use std::fmt;

/// A boolean test of a candidate value.
pub trait Condition<T>: Send + Sync {
    /// Check the candidate. Must be pure.
    fn is_satisfied(&self, candidate: &T) -> bool;
}

/// Satisfied when the candidate equals a fixed threshold.
///
/// # Example
///
/// ```rust
/// use scenegate::rules::{Condition, Equals};
///
/// let exactly_seven = Equals::new(7);
/// assert!(exactly_seven.is_satisfied(&7));
/// assert!(!exactly_seven.is_satisfied(&8));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Equals<T> {
    threshold: T,
}

impl<T> Equals<T> {
    pub fn new(threshold: T) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> &T {
        &self.threshold
    }
}

impl<T> Condition<T> for Equals<T>
where
    T: PartialEq + Send + Sync,
{
    fn is_satisfied(&self, candidate: &T) -> bool {
        *candidate == self.threshold
    }
}

/// Condition backed by a pure closure.
///
/// Use this for ranges, wildcards or anything else an exact threshold
/// cannot express.
///
/// # Example
///
/// ```rust
/// use scenegate::rules::{Condition, Predicate};
///
/// let small = Predicate::new(|n: &u32| *n < 10);
/// assert!(small.is_satisfied(&3));
/// assert!(!small.is_satisfied(&30));
/// ```
pub struct Predicate<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Predicate<T> {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl<T> Condition<T> for Predicate<T> {
    fn is_satisfied(&self, candidate: &T) -> bool {
        (self.predicate)(candidate)
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}
