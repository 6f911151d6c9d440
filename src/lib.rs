//! Scenegate: rule-validated, cancellable transitions between application states
//!
//! An application moves between named states ("scenes"). Each proposed move
//! is checked against a declarative allow-list of rules, then offered to
//! listeners that may veto it, and only then committed.
//!
//! # Core Concepts
//!
//! - **Rules**: a generic engine of conditions and rules matched against any
//!   candidate value (`rules`)
//! - **State**: application states via the `State` trait (`core`)
//! - **Transition**: the `(from, to)` pair validated by the rules
//! - **Manager**: the changing -> changed protocol with veto and failure
//!   reporting (`manager`)
//! - **Config**: allow-lists loaded from JSON (`config`)
//!
//! # Example
//!
//! ```rust
//! use scenegate::builder::TransitionManagerBuilder;
//! use scenegate::manager::FailureReason;
//! use scenegate::state_enum;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! state_enum! {
//!     enum GameScene {
//!         Null,
//!         Intro,
//!         MainMenu,
//!         PlayGame,
//!         QuitGame,
//!     }
//!     null: Null
//!     final: [QuitGame]
//! }
//!
//! let unsaved = Arc::new(AtomicBool::new(true));
//! let guard = Arc::clone(&unsaved);
//!
//! let mut scenes = TransitionManagerBuilder::new()
//!     .allow(GameScene::Null, GameScene::Intro)
//!     .allow(GameScene::Intro, GameScene::MainMenu)
//!     .allow(GameScene::MainMenu, GameScene::PlayGame)
//!     .allow(GameScene::MainMenu, GameScene::QuitGame)
//!     .on_changing(move |event| {
//!         event.cancel =
//!             guard.load(Ordering::SeqCst) && event.prospective == GameScene::QuitGame;
//!     })
//!     .build()?;
//!
//! scenes.request_transition(GameScene::Intro);
//! scenes.request_transition(GameScene::MainMenu);
//!
//! let refused = scenes.request_transition(GameScene::QuitGame);
//! assert_eq!(refused.failure(), Some(FailureReason::CancelledTransition));
//!
//! unsaved.store(false, Ordering::SeqCst);
//! assert!(scenes.request_transition(GameScene::QuitGame).is_changed());
//! assert!(scenes.is_final());
//! # Ok::<(), scenegate::builder::BuildError>(())
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod manager;
pub mod rules;

// Re-export commonly used types
pub use core::{State, StateHistory, Transition, TransitionRecord};
pub use manager::{
    ChangedEvent, ChangingEvent, FailureReason, ListenerId, TransitionManager, TransitionOutcome,
};
pub use rules::{Condition, Equals, Predicate, Rule, RuleEngine};
