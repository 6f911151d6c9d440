//! Serialized allow-lists.

use crate::builder::transition_rule;
use crate::config::error::{AllowListViolation, ConfigError};
use crate::core::{State, Transition};
use crate::rules::RuleEngine;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// The set of allowed transitions as a document.
///
/// ```json
/// { "allow": [ { "from": "Null", "to": "Intro" } ] }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct AllowList<S: State> {
    #[serde(default)]
    pub allow: Vec<Transition<S>>,
}

impl<S: State + 'static> AllowList<S> {
    pub fn new() -> Self {
        Self { allow: Vec::new() }
    }

    pub fn allow(mut self, from: S, to: S) -> Self {
        self.allow.push(Transition::new(from, to));
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Check every entry, collecting all violations rather than the first.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<AllowListViolation>> {
        let checks: Vec<_> = self
            .allow
            .iter()
            .enumerate()
            .flat_map(|(index, transition)| {
                [
                    check_self_loop(index, transition),
                    check_into_null(index, transition),
                ]
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and turn the entries into transition rules, in order.
    pub fn into_rules(self) -> Result<RuleEngine<Transition<S>>, ConfigError> {
        if let Validation::Failure(errors) = self.validate() {
            let violations: Vec<AllowListViolation> = errors.iter().cloned().collect();
            tracing::warn!(count = violations.len(), "rejected allow-list");
            return Err(ConfigError::Invalid { violations });
        }

        tracing::debug!(entries = self.allow.len(), "loaded allow-list");
        Ok(self
            .allow
            .into_iter()
            .map(|t| transition_rule(t.from, t.to))
            .collect())
    }
}

fn check_self_loop<S: State>(
    index: usize,
    transition: &Transition<S>,
) -> Validation<(), NonEmptyVec<AllowListViolation>> {
    if transition.is_self_loop() {
        Validation::fail(AllowListViolation::SelfTransition {
            index,
            state: transition.from.name().to_string(),
        })
    } else {
        Validation::success(())
    }
}

// A null -> null entry is already reported as a self loop.
fn check_into_null<S: State>(
    index: usize,
    transition: &Transition<S>,
) -> Validation<(), NonEmptyVec<AllowListViolation>> {
    if transition.to.is_null() && !transition.is_self_loop() {
        Validation::fail(AllowListViolation::IntoNullState {
            index,
            from: transition.from.name().to_string(),
        })
    } else {
        Validation::success(())
    }
}

impl<S: State + 'static> Default for AllowList<S> {
    fn default() -> Self {
        Self::new()
    }
}
