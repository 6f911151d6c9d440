//! Loading allow-lists from configuration.
//!
//! An allow-list can be kept as a JSON document instead of being built in
//! code. Validation uses Stillwater's `Validation` so that every bad entry
//! is reported in one pass.
//!
//! # Example
//!
//! ```rust
//! use scenegate::config::AllowList;
//! use scenegate::manager::TransitionManager;
//! use scenegate::state_enum;
//!
//! state_enum! {
//!     enum Scene {
//!         Null,
//!         Intro,
//!         MainMenu,
//!     }
//!     null: Null
//! }
//!
//! let rules = AllowList::<Scene>::from_json(
//!     r#"{ "allow": [ { "from": "Null", "to": "Intro" } ] }"#,
//! )?
//! .into_rules()?;
//!
//! let mut manager = TransitionManager::new(rules);
//! assert!(manager.request_transition(Scene::Intro).is_changed());
//! # Ok::<(), scenegate::config::ConfigError>(())
//! ```

pub mod allow_list;
pub mod error;

pub use allow_list::AllowList;
pub use error::{AllowListViolation, ConfigError};
