//! Core store types and logic.
//!
//! This module contains the pure, domain-neutral pieces of the store:
//! - State values via the `State` trait
//! - Actions and the reserved initialise envelope
//! - Reducers, the only way a state is ever produced
//! - An immutable transition log for debugging
//!
//! Nothing in this module performs side effects; notification and
//! ownership of the current state live in [`crate::store`].

mod action;
mod history;
mod reducer;
mod state;

pub use action::{Action, Envelope, INITIALISE_ACTION};
pub use history::{TransitionLog, TransitionRecord};
pub use reducer::Reducer;
pub use state::State;
