//! The store: owner of the current state.
//!
//! This module is the imperative shell around [`crate::core`]. A
//! [`Store`] holds exactly one state value, replaces it by running the
//! reducer on every dispatch, and synchronously notifies its observers.

mod builder;
mod config;
mod error;
#[allow(clippy::module_inception)]
mod store;

pub use builder::StoreBuilder;
pub use config::StoreConfig;
pub use error::BuildError;
pub use store::{Store, WeakStore};
