//! Errors raised while assembling a store.

use thiserror::Error;

/// Errors that can occur when building a store.
///
/// Dispatch itself has no error type: a panicking reducer or observer is a
/// broken contract, not a recoverable condition, and the panic propagates
/// to the caller of `dispatch` unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Reducer not specified. Call .reducer(f) before .build()")]
    MissingReducer,

    #[error("Initial state not specified. Call .initial(state) or use .build_or_default()")]
    MissingInitialState,

    #[error("Store label must not be blank")]
    EmptyLabel,
}
