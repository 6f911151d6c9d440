//! Property-based tests for rule matching and the transition manager.
//!
//! These tests use proptest to check that the protocol's guarantees hold
//! for arbitrary allow-lists, start states and requests.

use proptest::prelude::*;
use scenegate::builder::transition_rule;
use scenegate::core::{State, Transition};
use scenegate::manager::{FailureReason, TransitionManager, TransitionOutcome};
use scenegate::rules::RuleEngine;
use scenegate::state_enum;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

state_enum! {
    enum TestState {
        Null,
        Intro,
        Menu,
        Play,
        Save,
        Quit,
    }
    null: Null
}

const ALL: [TestState; 6] = [
    TestState::Null,
    TestState::Intro,
    TestState::Menu,
    TestState::Play,
    TestState::Save,
    TestState::Quit,
];

prop_compose! {
    fn arbitrary_state()(variant in 0..ALL.len()) -> TestState {
        ALL[variant]
    }
}

prop_compose! {
    fn arbitrary_transition()(from in arbitrary_state(), to in arbitrary_state()) -> Transition<TestState> {
        Transition::new(from, to)
    }
}

fn engine_of(allowed: &[Transition<TestState>]) -> RuleEngine<Transition<TestState>> {
    allowed
        .iter()
        .map(|t| transition_rule(t.from, t.to))
        .collect()
}

/// A manager that has already moved from null into `start`.
///
/// The extra `Null -> start` rule never equals a transition leaving `start`
/// unless `start` is null, in which case it is a self loop.
fn manager_at(
    start: TestState,
    allowed: &[Transition<TestState>],
) -> TransitionManager<TestState> {
    let engine = engine_of(allowed).with_rule(transition_rule(TestState::Null, start));
    let mut manager = TransitionManager::new(engine);
    manager.request_transition(start);
    assert_eq!(manager.current_state(), &start);
    manager
}

#[derive(Default)]
struct Calls {
    changing: usize,
    changed: Vec<(TestState, TestState)>,
    failures: Vec<FailureReason>,
}

fn observe(manager: &mut TransitionManager<TestState>, veto: bool) -> Arc<Mutex<Calls>> {
    let calls = Arc::new(Mutex::new(Calls::default()));

    let sink = Arc::clone(&calls);
    manager.on_changing(move |event| {
        sink.lock().unwrap().changing += 1;
        if veto {
            event.veto();
        }
    });

    let sink = Arc::clone(&calls);
    manager.on_changed(move |event| {
        sink.lock()
            .unwrap()
            .changed
            .push((event.current, event.original));
    });

    let sink = Arc::clone(&calls);
    manager.set_failure_callback(move |reason| sink.lock().unwrap().failures.push(reason));

    calls
}

proptest! {
    #[test]
    fn registered_transition_matches_but_reverse_does_not(
        from in arbitrary_state(),
        to in arbitrary_state(),
    ) {
        prop_assume!(from != to);
        let engine = RuleEngine::new().with_rule(transition_rule(from, to));

        prop_assert!(engine.match_any(&Transition::new(from, to)));
        prop_assert!(!engine.match_any(&Transition::new(to, from)));
    }

    #[test]
    fn registration_order_does_not_change_outcome(
        allowed in prop::collection::vec(arbitrary_transition(), 0..12),
        candidate in arbitrary_transition(),
    ) {
        let forward = engine_of(&allowed);
        let mut reversed_list = allowed.clone();
        reversed_list.reverse();
        let reversed = engine_of(&reversed_list);

        prop_assert_eq!(forward.match_any(&candidate), reversed.match_any(&candidate));
        prop_assert_eq!(forward.match_any(&candidate), allowed.contains(&candidate));
    }

    #[test]
    fn same_state_request_is_silent(
        start in arbitrary_state(),
        allowed in prop::collection::vec(arbitrary_transition(), 0..12),
    ) {
        let mut manager = manager_at(start, &allowed);
        let calls = observe(&mut manager, false);

        let outcome = manager.request_transition(start);

        prop_assert_eq!(outcome, TransitionOutcome::Unchanged);
        prop_assert_eq!(manager.current_state(), &start);
        let calls = calls.lock().unwrap();
        prop_assert_eq!(calls.changing, 0);
        prop_assert!(calls.changed.is_empty());
        prop_assert!(calls.failures.is_empty());
    }

    #[test]
    fn disallowed_request_fails_as_invalid(
        start in arbitrary_state(),
        target in arbitrary_state(),
        allowed in prop::collection::vec(arbitrary_transition(), 0..12),
    ) {
        prop_assume!(start != target);
        let mut allowed = allowed;
        allowed.retain(|t| *t != Transition::new(start, target));

        let mut manager = manager_at(start, &allowed);
        let calls = observe(&mut manager, false);

        let outcome = manager.request_transition(target);

        prop_assert_eq!(outcome, TransitionOutcome::Failed(FailureReason::InvalidTransition));
        prop_assert_eq!(manager.current_state(), &start);
        let calls = calls.lock().unwrap();
        prop_assert_eq!(calls.changing, 0);
        prop_assert_eq!(&calls.failures, &vec![FailureReason::InvalidTransition]);
    }

    #[test]
    fn allowed_request_commits_with_one_notification(
        start in arbitrary_state(),
        target in arbitrary_state(),
        allowed in prop::collection::vec(arbitrary_transition(), 0..12),
    ) {
        prop_assume!(start != target);
        let mut allowed = allowed;
        allowed.push(Transition::new(start, target));

        let mut manager = manager_at(start, &allowed);
        let calls = observe(&mut manager, false);

        let outcome = manager.request_transition(target);

        prop_assert_eq!(outcome, TransitionOutcome::Changed(Transition::new(start, target)));
        prop_assert_eq!(manager.current_state(), &target);
        let calls = calls.lock().unwrap();
        prop_assert_eq!(calls.changing, 1);
        prop_assert_eq!(&calls.changed, &vec![(target, start)]);
        prop_assert!(calls.failures.is_empty());
    }

    #[test]
    fn vetoed_request_keeps_state(
        start in arbitrary_state(),
        target in arbitrary_state(),
        allowed in prop::collection::vec(arbitrary_transition(), 0..12),
    ) {
        prop_assume!(start != target);
        let mut allowed = allowed;
        allowed.push(Transition::new(start, target));

        let mut manager = manager_at(start, &allowed);
        let calls = observe(&mut manager, true);

        let outcome = manager.request_transition(target);

        prop_assert_eq!(outcome, TransitionOutcome::Failed(FailureReason::CancelledTransition));
        prop_assert_eq!(manager.current_state(), &start);
        let calls = calls.lock().unwrap();
        prop_assert!(calls.changed.is_empty());
        prop_assert_eq!(&calls.failures, &vec![FailureReason::CancelledTransition]);
    }

    #[test]
    fn current_state_only_follows_allowed_edges(
        allowed in prop::collection::vec(arbitrary_transition(), 0..12),
        requests in prop::collection::vec(arbitrary_state(), 0..20),
    ) {
        let allowed_set: HashSet<_> = allowed.iter().cloned().collect();
        let mut manager = TransitionManager::new(engine_of(&allowed));

        for requested in requests {
            let before = *manager.current_state();
            manager.request_transition(requested);
            let after = *manager.current_state();

            if before != after {
                prop_assert!(allowed_set.contains(&Transition::new(before, after)));
                prop_assert_eq!(after, requested);
            }
        }

        for record in manager.history().records() {
            prop_assert!(allowed_set.contains(&record.transition));
        }
    }

    #[test]
    fn fresh_manager_starts_null_with_empty_history(
        allowed in prop::collection::vec(arbitrary_transition(), 0..12),
    ) {
        let manager = TransitionManager::new(engine_of(&allowed));

        prop_assert_eq!(manager.current_state(), &TestState::null());
        prop_assert!(manager.current_state().is_null());
        prop_assert!(manager.history().is_empty());
        prop_assert_eq!(manager.rules().len(), allowed.len());
    }

    #[test]
    fn history_never_exceeds_its_limit(
        allowed in prop::collection::vec(arbitrary_transition(), 0..12),
        requests in prop::collection::vec(arbitrary_state(), 0..40),
        limit in 0usize..6,
    ) {
        let mut manager = TransitionManager::new(engine_of(&allowed));
        manager.set_history_limit(Some(limit));
        let mut committed = 0;

        for requested in requests {
            if manager.request_transition(requested).is_changed() {
                committed += 1;
            }
            prop_assert!(manager.history().len() <= limit);
        }

        prop_assert_eq!(manager.history().len(), committed.min(limit));
    }
}
