//! Macros for declaring action enums.

/// Declare a unit-variant action enum and implement [`Action`](crate::core::Action) for it.
///
/// Each variant's name defaults to its identifier; `Variant as "TAG"`
/// overrides it. Actions carrying payloads implement `Action` by hand.
///
/// # Example
///
/// ```
/// use unistore::action_enum;
/// use unistore::core::Action;
///
/// action_enum! {
///     pub enum PlayerAction {
///         Play as "PLAY",
///         Pause as "PAUSE",
///         Stop,
///     }
/// }
///
/// assert_eq!(PlayerAction::Play.name(), "PLAY");
/// assert_eq!(PlayerAction::Stop.name(), "Stop");
/// ```
#[macro_export]
macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(as $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Action for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::action_enum!(@tag $variant $($tag)?)),*
                }
            }
        }
    };

    (@tag $variant:ident $tag:literal) => {
        $tag
    };

    (@tag $variant:ident) => {
        stringify!($variant)
    };
}
