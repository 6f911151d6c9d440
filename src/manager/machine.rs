//! Transition manager: validated, cancellable state changes.

use super::events::{ChangedEvent, ChangingEvent, FailureReason, TransitionOutcome};
use super::listeners::{
    ChangedListener, ChangingListener, FailureCallback, IdSource, ListenerId, Listeners,
};
use crate::core::{State, StateHistory, Transition, TransitionRecord};
use crate::rules::RuleEngine;
use std::fmt;

/// Owns the current state and runs the changing -> changed protocol.
///
/// A request is checked against the allow-list first. Allowed requests are
/// offered to changing listeners, any of which may veto. Only then is the
/// state committed and changed listeners told about it. Refusals go to the
/// failure callback; they are never returned as `Err`.
///
/// Everything runs synchronously on the caller's stack.
///
/// # Example
///
/// ```rust
/// use scenegate::builder::transition_rule;
/// use scenegate::manager::{FailureReason, TransitionManager, TransitionOutcome};
/// use scenegate::rules::RuleEngine;
/// use scenegate::state_enum;
///
/// state_enum! {
///     enum Scene {
///         Null,
///         Intro,
///         MainMenu,
///         QuitGame,
///     }
///     null: Null
/// }
///
/// let rules = RuleEngine::new()
///     .with_rule(transition_rule(Scene::Null, Scene::Intro))
///     .with_rule(transition_rule(Scene::Intro, Scene::MainMenu));
///
/// let mut manager = TransitionManager::new(rules);
/// assert_eq!(manager.current_state(), &Scene::Null);
///
/// assert!(manager.request_transition(Scene::Intro).is_changed());
/// assert_eq!(
///     manager.request_transition(Scene::QuitGame),
///     TransitionOutcome::Failed(FailureReason::InvalidTransition)
/// );
/// assert_eq!(manager.current_state(), &Scene::Intro);
/// ```
pub struct TransitionManager<S: State + 'static> {
    current: S,
    rules: RuleEngine<Transition<S>>,
    changing: Listeners<ChangingListener<S>>,
    changed: Listeners<ChangedListener<S>>,
    on_failed: Option<FailureCallback>,
    ids: IdSource,
    history: StateHistory<S>,
}

impl<S: State + 'static> TransitionManager<S> {
    /// Create a manager in the null state, validating against `rules`.
    pub fn new(rules: RuleEngine<Transition<S>>) -> Self {
        Self {
            current: S::null(),
            rules,
            changing: Listeners::new(),
            changed: Listeners::new(),
            on_failed: None,
            ids: IdSource::default(),
            history: StateHistory::new(),
        }
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if the current state is marked final.
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    pub fn rules(&self) -> &RuleEngine<Transition<S>> {
        &self.rules
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Keep at most `limit` committed transitions, oldest dropped first.
    /// `None` keeps everything.
    pub fn set_history_limit(&mut self, limit: Option<usize>) {
        self.history.set_limit(limit);
    }

    /// Check the allow-list for a move from the current state.
    ///
    /// Runs no listeners and reports nothing. Asking for the current state
    /// returns `false`, since that request would be a no-op.
    pub fn can_transition(&self, to: &S) -> bool {
        if *to == self.current {
            return false;
        }
        self.rules
            .match_any(&Transition::new(self.current.clone(), to.clone()))
    }

    /// Subscribe to the pre-change notification.
    pub fn on_changing<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&mut ChangingEvent<S>) + Send + Sync + 'static,
    {
        let id = self.ids.next();
        self.changing.push(id, Box::new(listener));
        id
    }

    /// Subscribe to the post-change notification.
    pub fn on_changed<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&ChangedEvent<S>) + Send + Sync + 'static,
    {
        let id = self.ids.next();
        self.changed.push(id, Box::new(listener));
        id
    }

    /// Unsubscribe a changing or changed listener.
    ///
    /// Returns `false` if the id was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.changing.remove(id) || self.changed.remove(id)
    }

    /// Replace the failure callback.
    pub fn set_failure_callback<F>(&mut self, callback: F)
    where
        F: Fn(FailureReason) + Send + Sync + 'static,
    {
        self.on_failed = Some(Box::new(callback));
    }

    pub fn clear_failure_callback(&mut self) {
        self.on_failed = None;
    }

    /// Attempt to move to `requested`.
    pub fn request_transition(&mut self, requested: S) -> TransitionOutcome<S> {
        if requested == self.current {
            tracing::debug!(state = requested.name(), "already in requested state");
            return TransitionOutcome::Unchanged;
        }

        let original = self.current.clone();
        let candidate = Transition::new(original.clone(), requested.clone());

        let evaluation = self.rules.evaluate(&candidate);
        let Some(rule) = evaluation.first_match() else {
            tracing::warn!(
                from = original.name(),
                to = requested.name(),
                "transition not on allow-list"
            );
            return self.fail(FailureReason::InvalidTransition);
        };
        tracing::debug!(
            from = original.name(),
            to = requested.name(),
            rule = rule.name().unwrap_or("<unnamed>"),
            "transition allowed"
        );

        if self.raise_changing(&original, &requested) {
            tracing::info!(
                from = original.name(),
                to = requested.name(),
                "transition cancelled by listener"
            );
            return self.fail(FailureReason::CancelledTransition);
        }

        self.current = requested.clone();
        self.history.push(TransitionRecord::now(candidate.clone()));
        tracing::info!(
            from = original.name(),
            to = requested.name(),
            "transition committed"
        );

        self.raise_changed(requested, original);
        TransitionOutcome::Changed(candidate)
    }

    /// Run changing listeners; returns the final cancel flag.
    fn raise_changing(&self, current: &S, prospective: &S) -> bool {
        let mut event = ChangingEvent::new(current.clone(), prospective.clone());
        for listener in self.changing.iter() {
            listener(&mut event);
        }
        event.cancel
    }

    fn raise_changed(&self, current: S, original: S) {
        let event = ChangedEvent { current, original };
        for listener in self.changed.iter() {
            listener(&event);
        }
    }

    fn fail(&self, reason: FailureReason) -> TransitionOutcome<S> {
        if let Some(callback) = &self.on_failed {
            callback(reason);
        }
        TransitionOutcome::Failed(reason)
    }
}

impl<S: State + 'static> fmt::Debug for TransitionManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionManager")
            .field("current", &self.current)
            .field("rules", &self.rules.len())
            .field("changing_listeners", &self.changing.len())
            .field("changed_listeners", &self.changed.len())
            .field("has_failure_callback", &self.on_failed.is_some())
            .finish()
    }
}
