//! Rules: ordered groups of conditions.

use super::condition::{Condition, Equals};
use std::fmt;

/// How a rule combines its conditions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Combinator {
    /// Every condition must hold
    #[default]
    All,

    /// At least one condition must hold
    Any,
}

/// A named predicate built from one or more conditions.
///
/// A rule with no conditions never matches, whatever its combinator.
///
/// # Example
///
/// ```rust
/// use scenegate::rules::{Combinator, Predicate, Rule};
///
/// let rule = Rule::new()
///     .with_combinator(Combinator::Any)
///     .with_condition(Predicate::new(|n: &i32| *n < 0))
///     .with_condition(Predicate::new(|n: &i32| *n > 100));
///
/// assert!(rule.matches(&-1));
/// assert!(rule.matches(&200));
/// assert!(!rule.matches(&50));
/// ```
pub struct Rule<T> {
    name: Option<String>,
    combinator: Combinator,
    conditions: Vec<Box<dyn Condition<T>>>,
}

impl<T: 'static> Rule<T> {
    /// Create an empty rule that combines with [`Combinator::All`].
    pub fn new() -> Self {
        Self {
            name: None,
            combinator: Combinator::All,
            conditions: Vec::new(),
        }
    }

    /// Rule holding a single exact-match condition.
    pub fn threshold(value: T) -> Self
    where
        T: PartialEq + Send + Sync,
    {
        Self::new().with_condition(Equals::new(value))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_combinator(mut self, combinator: Combinator) -> Self {
        self.combinator = combinator;
        self
    }

    pub fn with_condition<C>(mut self, condition: C) -> Self
    where
        C: Condition<T> + 'static,
    {
        self.add_condition(condition);
        self
    }

    /// Append a condition; evaluation follows insertion order.
    pub fn add_condition<C>(&mut self, condition: C)
    where
        C: Condition<T> + 'static,
    {
        self.conditions.push(Box::new(condition));
    }
}

impl<T> Rule<T> {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// True iff every condition holds for the candidate.
    ///
    /// A rule with no conditions returns `false`, so an unfinished rule
    /// never admits every candidate.
    pub fn match_all_conditions(&self, candidate: &T) -> bool {
        !self.conditions.is_empty() && self.conditions.iter().all(|c| c.is_satisfied(candidate))
    }

    /// True iff at least one condition holds for the candidate.
    pub fn match_any_conditions(&self, candidate: &T) -> bool {
        self.conditions.iter().any(|c| c.is_satisfied(candidate))
    }

    /// Check the candidate using this rule's combinator.
    pub fn matches(&self, candidate: &T) -> bool {
        match self.combinator {
            Combinator::All => self.match_all_conditions(candidate),
            Combinator::Any => self.match_any_conditions(candidate),
        }
    }
}

impl<T: 'static> Default for Rule<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("combinator", &self.combinator)
            .field("conditions", &self.conditions.len())
            .finish()
    }
}
