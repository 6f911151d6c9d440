//! Macros for ergonomic state declaration.

/// Generate a State trait implementation for simple enums.
///
/// `null:` names the reserved initial variant and is required. `final:`
/// optionally lists variants that conventionally end the application.
///
/// # Example
///
/// ```
/// use scenegate::core::State;
/// use scenegate::state_enum;
///
/// state_enum! {
///     pub enum GameScene {
///         Null,
///         Intro,
///         MainMenu,
///         QuitGame,
///     }
///     null: Null
///     final: [QuitGame]
/// }
///
/// assert_eq!(GameScene::null(), GameScene::Null);
/// assert_eq!(GameScene::MainMenu.name(), "MainMenu");
/// assert!(GameScene::QuitGame.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        null: $null:ident
        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn null() -> Self {
                Self::$null
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
