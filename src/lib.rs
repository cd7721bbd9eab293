//! Unistore: a unidirectional, reducer-driven state store
//!
//! A store owns a single state value. The only way to change it is to
//! dispatch an action; the store runs a pure reducer on the previous state
//! and the action, replaces the state with the result, and synchronously
//! calls every registered observer. Construction performs one extra
//! dispatch of a reserved initialise action, so a reducer can set itself
//! up before anyone observes it.
//!
//! # Core Concepts
//!
//! - **State**: any `Clone + Debug` value, owned by the store
//! - **Action**: a closed enum describing what happened, wrapped in an
//!   `Envelope` that also carries the reserved initialise action
//! - **Reducer**: a pure `(state, action) -> state` function
//! - **Store**: holds the state and notifies observers after each dispatch
//!
//! # Example
//!
//! ```rust
//! use unistore::counter::{click_counter_app, increase_count, render, reset_count};
//! use unistore::store::Store;
//!
//! let store = Store::new(click_counter_app);
//!
//! let weak = store.downgrade();
//! store.subscribe(move || {
//!     if let Some(store) = weak.upgrade() {
//!         println!("{}", render(store.get_state()));
//!     }
//! });
//!
//! store.dispatch(increase_count());
//! store.dispatch(increase_count());
//! assert_eq!(store.get_state(), 2);
//!
//! store.dispatch(reset_count());
//! assert_eq!(store.get_state(), 0);
//! ```

pub mod core;
pub mod counter;
mod macros;
pub mod store;

// Re-export commonly used types
pub use self::core::{Action, Envelope, Reducer, State};
pub use store::{BuildError, Store, StoreBuilder, StoreConfig};
