//! State values held by a store.

use std::fmt::Debug;

/// Marker trait for values a store can hold.
///
/// The store treats its state as opaque: it only clones it (to hand it to
/// the reducer and to readers) and formats it for trace logging. Every
/// `Clone + Debug + 'static` type is a state, so a plain integer works as
/// well as a nested record.
///
/// # Example
///
/// ```rust
/// use unistore::core::State;
///
/// fn assert_state<S: State>(_: &S) {}
///
/// assert_state(&0_i64);
/// assert_state(&vec!["todo".to_string()]);
/// ```
pub trait State: Clone + Debug + 'static {}

impl<T: Clone + Debug + 'static> State for T {}
