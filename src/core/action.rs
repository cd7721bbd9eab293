//! Actions and the envelope the reducer receives.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Name reported for the synthetic action every store dispatches on construction.
pub const INITIALISE_ACTION: &str = "InitialiseStateTree";

/// Trait for domain actions.
///
/// Actions are immutable values describing something that happened. Each
/// application defines its own closed enum; the reducer matches on it
/// exhaustively. `name` is the action's discriminant as it appears in logs
/// and in the transition log.
///
/// Unit-variant enums can use [`action_enum!`](crate::action_enum) instead
/// of implementing this by hand.
///
/// # Example
///
/// ```rust
/// use unistore::core::Action;
///
/// #[derive(Clone, Debug)]
/// enum TodoAction {
///     Add { title: String },
///     Toggle { index: usize },
///     ClearCompleted,
/// }
///
/// impl Action for TodoAction {
///     fn name(&self) -> &str {
///         match self {
///             Self::Add { .. } => "ADD_TODO",
///             Self::Toggle { .. } => "TOGGLE_TODO",
///             Self::ClearCompleted => "CLEAR_COMPLETED",
///         }
///     }
/// }
///
/// assert_eq!(TodoAction::Toggle { index: 2 }.name(), "TOGGLE_TODO");
/// ```
pub trait Action: Debug + 'static {
    /// The action's discriminant.
    fn name(&self) -> &str;
}

/// An action as delivered to a reducer.
///
/// The reserved initialise action has its own variant, so it can never be
/// confused with a domain action whatever names the domain picks.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Envelope<A> {
    /// Dispatched exactly once, while the store is being constructed.
    Initialise,
    /// A domain action dispatched by a consumer.
    Action(A),
}

impl<A: Action> Envelope<A> {
    /// Discriminant of the wrapped action, or [`INITIALISE_ACTION`].
    pub fn name(&self) -> &str {
        match self {
            Self::Initialise => INITIALISE_ACTION,
            Self::Action(action) => action.name(),
        }
    }
}

impl<A> Envelope<A> {
    /// The domain action, if this is not the initialise envelope.
    pub fn action(&self) -> Option<&A> {
        match self {
            Self::Initialise => None,
            Self::Action(action) => Some(action),
        }
    }

    pub fn is_initialise(&self) -> bool {
        matches!(self, Self::Initialise)
    }
}

impl<A> From<A> for Envelope<A> {
    fn from(action: A) -> Self {
        Self::Action(action)
    }
}
