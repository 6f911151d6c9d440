//! History of committed transitions.
//!
//! Only transitions that passed the allow-list and were not cancelled end
//! up here. `record` returns a new history and leaves the old one alone;
//! `push` appends in place. A history may carry a retention limit, in which
//! case the oldest records are dropped once it is exceeded.

use super::state::State;
use super::transition::Transition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A committed transition and when it happened.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State> {
    /// The move that was committed
    pub transition: Transition<S>,
    /// When the commit happened
    pub timestamp: DateTime<Utc>,
}

impl<S: State> TransitionRecord<S> {
    /// Record a transition stamped with the current time.
    pub fn now(transition: Transition<S>) -> Self {
        Self {
            transition,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of committed transitions.
///
/// # Example
///
/// ```rust
/// use scenegate::core::{StateHistory, Transition, TransitionRecord};
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
/// let history = StateHistory::new()
///     .record(TransitionRecord::now(Transition::new(Scene::Null, Scene::Intro)))
///     .record(TransitionRecord::now(Transition::new(Scene::Intro, Scene::Menu)));
///
/// assert_eq!(history.get_path(), vec![&Scene::Null, &Scene::Intro, &Scene::Menu]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    records: Vec<TransitionRecord<S>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            limit: None,
        }
    }

    /// An empty history that keeps at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Change the retention limit, trimming existing records to fit.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
        self.trim();
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, record: TransitionRecord<S>) -> Self {
        let mut next = self.clone();
        next.push(record);
        next
    }

    /// Append a transition in place, dropping the oldest records if the
    /// limit is exceeded.
    pub fn push(&mut self, record: TransitionRecord<S>) {
        self.records.push(record);
        self.trim();
    }

    fn trim(&mut self) {
        if let Some(limit) = self.limit {
            if self.records.len() > limit {
                let excess = self.records.len() - limit;
                self.records.drain(..excess);
            }
        }
    }

    /// States traversed: the first `from`, then every `to` in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.transition.from);
        }
        for record in &self.records {
            path.push(&record.transition.to);
        }
        path
    }

    /// Time between the first and last commit, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    pub fn last(&self) -> Option<&TransitionRecord<S>> {
        self.records.last()
    }

    pub fn records(&self) -> &[TransitionRecord<S>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
