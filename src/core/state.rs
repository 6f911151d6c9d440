//! Core State trait for application states.
//!
//! Every state the manager moves between implements this trait. It gives
//! the manager a reserved "null" value to start from and a name for
//! diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for application states (scenes, screens, modes).
///
/// All methods are pure. States are immutable values; the manager compares
/// them structurally to decide whether a request is a no-op and to build the
/// candidate transition it validates.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transitions and history records
/// - `PartialEq`: transitions compare structurally
/// - `Debug`: states show up in logs and assertions
/// - `Serialize` + `Deserialize`: allow-lists can be loaded from config
///
/// # Example
///
/// ```rust
/// use scenegate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Screen {
///     Blank,
///     Splash,
///     Menu,
///     Exit,
/// }
///
/// impl State for Screen {
///     fn name(&self) -> &str {
///         match self {
///             Self::Blank => "Blank",
///             Self::Splash => "Splash",
///             Self::Menu => "Menu",
///             Self::Exit => "Exit",
///         }
///     }
///
///     fn null() -> Self {
///         Self::Blank
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Exit)
///     }
/// }
///
/// assert!(Screen::Blank.is_null());
/// assert!(!Screen::Menu.is_null());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// The reserved uninitialized state.
    ///
    /// A manager starts here before any transition has happened. It is a
    /// regular value: it compares structurally and can appear as the `from`
    /// side of an allowed transition.
    fn null() -> Self;

    /// Check if this is the reserved null state.
    fn is_null(&self) -> bool {
        *self == Self::null()
    }

    /// Check if this state conventionally ends the application (e.g. quitting).
    ///
    /// The manager never refuses to leave a final state on its own; this is
    /// only a marker for embedding code.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Null,
        Intro,
        Menu,
        Quit,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Null => "Null",
                Self::Intro => "Intro",
                Self::Menu => "Menu",
                Self::Quit => "Quit",
            }
        }

        fn null() -> Self {
            Self::Null
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Quit)
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Null.name(), "Null");
        assert_eq!(TestState::Intro.name(), "Intro");
        assert_eq!(TestState::Menu.name(), "Menu");
        assert_eq!(TestState::Quit.name(), "Quit");
    }

    #[test]
    fn null_is_recognized() {
        assert!(TestState::null().is_null());
        assert!(TestState::Null.is_null());
        assert!(!TestState::Intro.is_null());
    }

    #[test]
    fn is_final_identifies_quit() {
        assert!(!TestState::Null.is_final());
        assert!(!TestState::Menu.is_final());
        assert!(TestState::Quit.is_final());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Intro;
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"Intro\"");
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
