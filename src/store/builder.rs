//! Builder for constructing stores.

use crate::core::{Action, Reducer, State};
use crate::store::config::StoreConfig;
use crate::store::error::BuildError;
use crate::store::store::Store;

/// Builder for constructing stores with a fluent API.
///
/// # Example
///
/// ```rust
/// use unistore::core::{Action, Envelope};
/// use unistore::store::StoreBuilder;
///
/// #[derive(Clone, Debug)]
/// enum Visit {
///     Page(String),
/// }
///
/// impl Action for Visit {
///     fn name(&self) -> &str {
///         "VISIT"
///     }
/// }
///
/// fn pages(mut seen: Vec<String>, action: &Envelope<Visit>) -> Vec<String> {
///     if let Some(Visit::Page(page)) = action.action() {
///         seen.push(page.clone());
///     }
///     seen
/// }
///
/// let store = StoreBuilder::new()
///     .reducer(pages)
///     .label("navigation")
///     .record_history(true)
///     .history_limit(Some(10))
///     .build_or_default()
///     .unwrap();
///
/// store.dispatch(Visit::Page("/home".to_string()));
/// assert_eq!(store.get_state(), vec!["/home".to_string()]);
/// assert_eq!(store.history().unwrap().len(), 2);
/// ```
pub struct StoreBuilder<S: State, A: Action> {
    reducer: Option<Box<dyn Reducer<S, A>>>,
    initial: Option<S>,
    config: StoreConfig,
}

impl<S: State, A: Action> Default for StoreBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action> StoreBuilder<S, A> {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            reducer: None,
            initial: None,
            config: StoreConfig::default(),
        }
    }

    /// Set the reducer (required).
    pub fn reducer<R>(mut self, reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        self.reducer = Some(Box::new(reducer));
        self
    }

    /// Set the initial state.
    /// Required by `build`; `build_or_default` falls back to `S::default()`.
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = label.into();
        self
    }

    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    pub fn history_limit(mut self, limit: Option<usize>) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Build the store, dispatching the initialise action.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Store<S, A>, BuildError> {
        let (reducer, config) = Self::validate(self.reducer, self.config)?;
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(Store::from_parts(reducer, initial, config))
    }

    /// Build the store, seeding it with `S::default()` if no initial state
    /// was given.
    pub fn build_or_default(self) -> Result<Store<S, A>, BuildError>
    where
        S: Default,
    {
        let (reducer, config) = Self::validate(self.reducer, self.config)?;
        let initial = self.initial.unwrap_or_default();
        Ok(Store::from_parts(reducer, initial, config))
    }

    #[allow(clippy::type_complexity)]
    fn validate(
        reducer: Option<Box<dyn Reducer<S, A>>>,
        config: StoreConfig,
    ) -> Result<(Box<dyn Reducer<S, A>>, StoreConfig), BuildError> {
        let reducer = reducer.ok_or(BuildError::MissingReducer)?;
        if config.label.trim().is_empty() {
            return Err(BuildError::EmptyLabel);
        }
        Ok((reducer, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Envelope;

    #[derive(Clone, PartialEq, Debug)]
    enum TestAction {
        Append(char),
    }

    impl Action for TestAction {
        fn name(&self) -> &str {
            "APPEND"
        }
    }

    fn append(mut state: String, action: &Envelope<TestAction>) -> String {
        if let Some(TestAction::Append(c)) = action.action() {
            state.push(*c);
        }
        state
    }

    #[test]
    fn builder_creates_store() {
        let store = StoreBuilder::new()
            .reducer(append)
            .initial("ab".to_string())
            .label("text")
            .build()
            .unwrap();

        store.dispatch(TestAction::Append('c'));
        assert_eq!(store.get_state(), "abc");
        assert_eq!(store.label(), "text");
    }

    #[test]
    fn builder_requires_reducer() {
        let result = StoreBuilder::<String, TestAction>::new()
            .initial(String::new())
            .build();

        assert_eq!(result.unwrap_err(), BuildError::MissingReducer);
    }

    #[test]
    fn builder_requires_initial_state() {
        let result = StoreBuilder::new().reducer(append).build();
        assert_eq!(result.unwrap_err(), BuildError::MissingInitialState);
    }

    #[test]
    fn build_or_default_fills_initial_state() {
        let store = StoreBuilder::new().reducer(append).build_or_default().unwrap();
        assert_eq!(store.get_state(), "");
    }

    #[test]
    fn builder_rejects_blank_label() {
        let result = StoreBuilder::new()
            .reducer(append)
            .label("   ")
            .build_or_default();

        assert_eq!(result.unwrap_err(), BuildError::EmptyLabel);
    }

    #[test]
    fn builder_applies_history_settings() {
        let store = StoreBuilder::new()
            .reducer(append)
            .record_history(true)
            .history_limit(Some(2))
            .build_or_default()
            .unwrap();

        for c in ['x', 'y', 'z'] {
            store.dispatch(TestAction::Append(c));
        }

        let history = store.history().unwrap();
        assert_eq!(history.limit(), Some(2));
        assert_eq!(history.len(), 2);
        let path: Vec<&str> = history.get_path().into_iter().map(String::as_str).collect();
        assert_eq!(path, vec!["x", "xy", "xyz"]);
    }

    #[test]
    fn config_replaces_defaults() {
        let config = StoreConfig {
            label: "configured".to_string(),
            record_history: true,
            history_limit: None,
        };
        let store = StoreBuilder::new()
            .reducer(append)
            .config(config.clone())
            .build_or_default()
            .unwrap();

        assert_eq!(store.config(), &config);
        assert!(store.history().unwrap().limit().is_none());
    }
}
