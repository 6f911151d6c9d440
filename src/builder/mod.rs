//! Builder API for assembling allow-lists and managers.
//!
//! This module provides the fluent manager builder, the `state_enum!`
//! macro and helpers for creating transition rules.

pub mod error;
pub mod macros;
pub mod manager;

pub use error::BuildError;
pub use manager::TransitionManagerBuilder;

use crate::core::{State, Transition};
use crate::rules::Rule;

/// Create the rule that allows exactly one transition.
///
/// The rule holds a single exact-match condition and is named after the
/// transition, e.g. `"Intro -> MainMenu"`.
///
/// # Example
///
/// ```
/// use scenegate::builder::transition_rule;
/// use scenegate::core::Transition;
/// use scenegate::state_enum;
///
/// state_enum! {
///     enum Scene {
///         Null,
///         Intro,
///     }
///     null: Null
/// }
///
/// let rule = transition_rule(Scene::Null, Scene::Intro);
/// assert_eq!(rule.name(), Some("Null -> Intro"));
/// assert!(rule.matches(&Transition::new(Scene::Null, Scene::Intro)));
/// assert!(!rule.matches(&Transition::new(Scene::Intro, Scene::Null)));
/// ```
pub fn transition_rule<S>(from: S, to: S) -> Rule<Transition<S>>
where
    S: State + 'static,
{
    let transition = Transition::new(from, to);
    let name = transition.to_string();
    Rule::threshold(transition).with_name(name)
}

/// Create rules for every transition leaving `from` towards one of `targets`.
///
/// # Example
///
/// ```
/// use scenegate::builder::fan_out;
/// use scenegate::rules::RuleEngine;
/// use scenegate::core::Transition;
/// use scenegate::state_enum;
///
/// state_enum! {
///     enum Scene {
///         Null,
///         MainMenu,
///         NewGame,
///         LoadGame,
///     }
///     null: Null
/// }
///
/// let engine: RuleEngine<_> = fan_out(Scene::MainMenu, [Scene::NewGame, Scene::LoadGame])
///     .into_iter()
///     .collect();
/// assert_eq!(engine.len(), 2);
/// assert!(engine.match_any(&Transition::new(Scene::MainMenu, Scene::LoadGame)));
/// ```
pub fn fan_out<S, I>(from: S, targets: I) -> Vec<Rule<Transition<S>>>
where
    S: State + 'static,
    I: IntoIterator<Item = S>,
{
    targets
        .into_iter()
        .map(|to| transition_rule(from.clone(), to))
        .collect()
}
