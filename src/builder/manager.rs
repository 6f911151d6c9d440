//! Builder for constructing transition managers.

use crate::builder::error::BuildError;
use crate::builder::transition_rule;
use crate::core::{State, Transition};
use crate::manager::{
    ChangedEvent, ChangedListener, ChangingEvent, ChangingListener, FailureCallback,
    FailureReason, TransitionManager,
};
use crate::rules::{Rule, RuleEngine};

/// Fluent builder for a [`TransitionManager`].
///
/// The allow-list is required: supply a whole engine with `.rules()` or
/// register transitions one by one with `.allow()`.
pub struct TransitionManagerBuilder<S: State + 'static> {
    rules: Option<RuleEngine<Transition<S>>>,
    changing: Vec<ChangingListener<S>>,
    changed: Vec<ChangedListener<S>>,
    on_failed: Option<FailureCallback>,
    history_limit: Option<usize>,
}

impl<S: State + 'static> TransitionManagerBuilder<S> {
    pub fn new() -> Self {
        Self {
            rules: None,
            changing: Vec::new(),
            changed: Vec::new(),
            on_failed: None,
            history_limit: None,
        }
    }

    /// Use a prebuilt rule engine. Rules added later with `.allow()` or
    /// `.rule()` are appended to it.
    pub fn rules(mut self, engine: RuleEngine<Transition<S>>) -> Self {
        match self.rules.as_mut() {
            Some(existing) => existing.extend(engine),
            None => self.rules = Some(engine),
        }
        self
    }

    /// Register one allowed transition.
    pub fn allow(self, from: S, to: S) -> Self {
        self.rule(transition_rule(from, to))
    }

    /// Register an arbitrary rule over transitions.
    pub fn rule(mut self, rule: Rule<Transition<S>>) -> Self {
        self.rules.get_or_insert_with(RuleEngine::new).add_rule(rule);
        self
    }

    pub fn on_changing<F>(mut self, listener: F) -> Self
    where
        F: Fn(&mut ChangingEvent<S>) + Send + Sync + 'static,
    {
        self.changing.push(Box::new(listener));
        self
    }

    pub fn on_changed<F>(mut self, listener: F) -> Self
    where
        F: Fn(&ChangedEvent<S>) + Send + Sync + 'static,
    {
        self.changed.push(Box::new(listener));
        self
    }

    pub fn on_failed<F>(mut self, callback: F) -> Self
    where
        F: Fn(FailureReason) + Send + Sync + 'static,
    {
        self.on_failed = Some(Box::new(callback));
        self
    }

    /// Keep at most `limit` committed transitions in the manager's history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Build the manager.
    /// Returns an error if no rule engine was supplied.
    pub fn build(self) -> Result<TransitionManager<S>, BuildError> {
        let rules = self.rules.ok_or(BuildError::MissingRuleEngine)?;

        let mut manager = TransitionManager::new(rules);
        manager.set_history_limit(self.history_limit);
        for listener in self.changing {
            manager.on_changing(listener);
        }
        for listener in self.changed {
            manager.on_changed(listener);
        }
        if let Some(callback) = self.on_failed {
            manager.set_failure_callback(callback);
        }

        Ok(manager)
    }
}

impl<S: State + 'static> Default for TransitionManagerBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::TransitionOutcome;
    use crate::state_enum;
    use std::sync::{Arc, Mutex};

    state_enum! {
        enum TestState {
            Null,
            Intro,
            Menu,
            Play,
        }
        null: Null
    }

    #[test]
    fn builder_requires_rule_engine() {
        let result = TransitionManagerBuilder::<TestState>::new().build();

        assert!(matches!(result, Err(BuildError::MissingRuleEngine)));
    }

    #[test]
    fn empty_engine_is_accepted() {
        let mut manager = TransitionManagerBuilder::<TestState>::new()
            .rules(RuleEngine::new())
            .build()
            .unwrap();

        assert_eq!(
            manager.request_transition(TestState::Intro),
            TransitionOutcome::Failed(FailureReason::InvalidTransition)
        );
    }

    #[test]
    fn history_limit_is_applied() {
        let mut manager = TransitionManagerBuilder::new()
            .allow(TestState::Null, TestState::Intro)
            .allow(TestState::Intro, TestState::Menu)
            .allow(TestState::Menu, TestState::Play)
            .history_limit(2)
            .build()
            .unwrap();

        for next in [TestState::Intro, TestState::Menu, TestState::Play] {
            assert!(manager.request_transition(next).is_changed());
        }

        assert_eq!(manager.history().limit(), Some(2));
        assert_eq!(
            manager.history().get_path(),
            vec![&TestState::Intro, &TestState::Menu, &TestState::Play]
        );
    }

    #[test]
    fn allow_registers_transitions() {
        let manager = TransitionManagerBuilder::new()
            .allow(TestState::Null, TestState::Intro)
            .allow(TestState::Intro, TestState::Menu)
            .build()
            .unwrap();

        assert_eq!(manager.rules().len(), 2);
        assert!(manager.can_transition(&TestState::Intro));
    }

    #[test]
    fn rules_and_allow_combine() {
        let engine = RuleEngine::new().with_rule(transition_rule(TestState::Null, TestState::Intro));
        let manager = TransitionManagerBuilder::new()
            .allow(TestState::Intro, TestState::Menu)
            .rules(engine)
            .allow(TestState::Menu, TestState::Play)
            .build()
            .unwrap();

        assert_eq!(manager.rules().len(), 3);
    }

    #[test]
    fn builder_wires_listeners_and_callback() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let changing_log = Arc::clone(&log);
        let changed_log = Arc::clone(&log);
        let failed_log = Arc::clone(&log);

        let mut manager = TransitionManagerBuilder::new()
            .allow(TestState::Null, TestState::Intro)
            .on_changing(move |event: &mut ChangingEvent<TestState>| {
                changing_log
                    .lock()
                    .unwrap()
                    .push(format!("changing to {:?}", event.prospective));
            })
            .on_changed(move |event: &ChangedEvent<TestState>| {
                changed_log
                    .lock()
                    .unwrap()
                    .push(format!("changed to {:?}", event.current));
            })
            .on_failed(move |reason| failed_log.lock().unwrap().push(reason.to_string()))
            .build()
            .unwrap();

        manager.request_transition(TestState::Intro);
        manager.request_transition(TestState::Play);

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "changing to Intro".to_string(),
                "changed to Intro".to_string(),
                "The transition was invalid".to_string(),
            ]
        );
    }
}
