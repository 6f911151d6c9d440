//! Rule engine: an ordered allow-list of rules.

use super::rule::Rule;
use std::fmt;

/// Ordered collection of rules matched against a candidate.
///
/// The engine never stores a candidate. Every query takes one, so a shared
/// engine can be queried from several places without coordination.
///
/// # Example
///
/// ```rust
/// use scenegate::rules::{Rule, RuleEngine};
///
/// let mut engine = RuleEngine::new();
/// engine.add_rule(Rule::threshold(("a", "b")));
/// engine.add_rule(Rule::threshold(("b", "c")));
///
/// assert!(engine.match_any(&("a", "b")));
/// assert!(!engine.match_any(&("b", "a")));
///
/// let evaluation = engine.evaluate(&("b", "c"));
/// assert!(evaluation.match_any());
/// assert!(!evaluation.match_all());
/// ```
pub struct RuleEngine<T> {
    rules: Vec<Rule<T>>,
}

impl<T> RuleEngine<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. Duplicates are allowed and simply redundant.
    pub fn add_rule(&mut self, rule: Rule<T>) {
        self.rules.push(rule);
    }

    pub fn with_rule(mut self, rule: Rule<T>) -> Self {
        self.add_rule(rule);
        self
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Bind a candidate for one or more queries.
    pub fn evaluate<'a, 'c>(&'a self, candidate: &'c T) -> Evaluation<'a, 'c, T> {
        Evaluation {
            rules: &self.rules,
            candidate,
        }
    }

    /// True as soon as one rule matches, scanning in registration order.
    pub fn match_any(&self, candidate: &T) -> bool {
        self.evaluate(candidate).match_any()
    }

    /// True iff every registered rule matches.
    ///
    /// An empty engine returns `false`. The engine is an allow-list, and an
    /// empty allow-list must not read as "everything passes" through either
    /// query; `match_any` and `match_all` agree on an empty engine.
    pub fn match_all(&self, candidate: &T) -> bool {
        self.evaluate(candidate).match_all()
    }

    /// The first rule, in registration order, that matches.
    pub fn first_match(&self, candidate: &T) -> Option<&Rule<T>> {
        self.evaluate(candidate).first_match()
    }
}

impl<T> Default for RuleEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<Rule<T>> for RuleEngine<T> {
    fn extend<I: IntoIterator<Item = Rule<T>>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl<T> IntoIterator for RuleEngine<T> {
    type Item = Rule<T>;
    type IntoIter = std::vec::IntoIter<Rule<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<T> FromIterator<Rule<T>> for RuleEngine<T> {
    fn from_iter<I: IntoIterator<Item = Rule<T>>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<T> fmt::Debug for RuleEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rules)
            .finish()
    }
}

/// A candidate bound to an engine's rules.
///
/// Binding and querying happen under one shared borrow, so nothing can
/// swap the candidate between the two.
pub struct Evaluation<'a, 'c, T> {
    rules: &'a [Rule<T>],
    candidate: &'c T,
}

impl<'a, 'c, T> Evaluation<'a, 'c, T> {
    pub fn candidate(&self) -> &'c T {
        self.candidate
    }

    pub fn match_any(&self) -> bool {
        let matched = self.rules.iter().any(|rule| rule.matches(self.candidate));
        tracing::trace!(rules = self.rules.len(), matched, "evaluated match_any");
        matched
    }

    /// False when there are no rules; see [`RuleEngine::match_all`].
    pub fn match_all(&self) -> bool {
        let matched =
            !self.rules.is_empty() && self.rules.iter().all(|rule| rule.matches(self.candidate));
        tracing::trace!(rules = self.rules.len(), matched, "evaluated match_all");
        matched
    }

    pub fn first_match(&self) -> Option<&'a Rule<T>> {
        let rules = self.rules;
        let found = rules.iter().find(|rule| rule.matches(self.candidate));
        tracing::trace!(
            rules = rules.len(),
            matched = found.is_some(),
            rule = found.and_then(|rule| rule.name()).unwrap_or("<unnamed>"),
            "evaluated first_match"
        );
        found
    }
}
