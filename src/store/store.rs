use crate::core::{Action, Envelope, Reducer, State, TransitionLog, TransitionRecord};
use crate::store::builder::StoreBuilder;
use crate::store::config::StoreConfig;
use chrono::Utc;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Observer = Rc<dyn Fn()>;

struct StoreInner<S, A> {
    reducer: Box<dyn Reducer<S, A>>,
    state: RefCell<S>,
    observers: RefCell<Vec<Observer>>,
    history: RefCell<Option<TransitionLog<S>>>,
    dispatches: Cell<u64>,
    config: StoreConfig,
}

/// A single-threaded store holding one state value.
///
/// The state only ever changes by running the reducer on the previous
/// state and a dispatched action. Every dispatch, including the
/// initialise dispatch performed during construction, replaces the state
/// and then calls every registered observer in registration order.
///
/// `Store` is a handle: clones share the same state and observers, which
/// lets an observer capture the store and dispatch from inside a
/// notification. Such nested dispatches run to completion, notifications
/// included, before the outer notification pass moves on. Use
/// [`Store::downgrade`] when an observer should not keep the store alive.
///
/// The handle is neither `Send` nor `Sync`.
///
/// # Example
///
/// ```rust
/// use unistore::core::{Action, Envelope};
/// use unistore::store::Store;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// #[derive(Clone, Debug)]
/// enum Bump {
///     Up,
/// }
///
/// impl Action for Bump {
///     fn name(&self) -> &str {
///         "UP"
///     }
/// }
///
/// fn bumps(state: u32, action: &Envelope<Bump>) -> u32 {
///     match action {
///         Envelope::Action(Bump::Up) => state + 1,
///         Envelope::Initialise => state,
///     }
/// }
///
/// let store = Store::new(bumps);
/// assert_eq!(store.get_state(), 0);
///
/// let renders = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&renders);
/// store.subscribe(move || counter.set(counter.get() + 1));
///
/// store.dispatch(Bump::Up);
/// assert_eq!(store.get_state(), 1);
/// assert_eq!(renders.get(), 1);
/// ```
pub struct Store<S: State, A: Action> {
    inner: Rc<StoreInner<S, A>>,
}

/// Non-owning handle to a [`Store`].
pub struct WeakStore<S: State, A: Action> {
    inner: Weak<StoreInner<S, A>>,
}

impl<S: State, A: Action> Store<S, A> {
    /// Create a store seeded with `S::default()`.
    ///
    /// The reducer sees the default value together with the initialise
    /// action before this returns.
    pub fn new<R>(reducer: R) -> Self
    where
        S: Default,
        R: Reducer<S, A> + 'static,
    {
        Self::with_state(reducer, S::default())
    }

    /// Create a store seeded with `initial`.
    ///
    /// The initialise action is still dispatched, so the resulting state is
    /// `reducer(initial, Initialise)`.
    pub fn with_state<R>(reducer: R, initial: S) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self::from_parts(Box::new(reducer), initial, StoreConfig::default())
    }

    /// Start building a store with non-default configuration.
    pub fn builder() -> StoreBuilder<S, A> {
        StoreBuilder::new()
    }

    pub(crate) fn from_parts(
        reducer: Box<dyn Reducer<S, A>>,
        initial: S,
        config: StoreConfig,
    ) -> Self {
        let history = config.record_history.then(|| match config.history_limit {
            Some(limit) => TransitionLog::bounded(limit),
            None => TransitionLog::new(),
        });

        let store = Self {
            inner: Rc::new(StoreInner {
                reducer,
                state: RefCell::new(initial),
                observers: RefCell::new(Vec::new()),
                history: RefCell::new(history),
                dispatches: Cell::new(0),
                config,
            }),
        };

        log::debug!(
            "{}: created, dispatching {}",
            store.label(),
            crate::core::INITIALISE_ACTION
        );
        store.apply(Envelope::Initialise);
        store
    }

    /// Get a clone of the current state.
    pub fn get_state(&self) -> S {
        self.inner.state.borrow().clone()
    }

    /// Read the current state without cloning it.
    ///
    /// `f` must not dispatch; the state is borrowed for its duration.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        f(&self.inner.state.borrow())
    }

    /// Apply `action` and notify every observer.
    ///
    /// When this returns, [`get_state`](Self::get_state) reflects the
    /// reducer's result and each observer registered before the call has
    /// run once. The state is replaced even when the reducer hands back an
    /// equal value.
    ///
    /// A panic in the reducer propagates with the previous state left in
    /// place. A panic in an observer propagates after the state has been
    /// replaced, and the remaining observers of that pass are skipped.
    pub fn dispatch(&self, action: A) {
        self.apply(Envelope::Action(action));
    }

    /// Register an observer, called with no arguments after every
    /// subsequent dispatch.
    ///
    /// Observers are never de-duplicated and cannot be removed. An observer
    /// registered while a notification pass is running is first called on
    /// the next dispatch.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn() + 'static,
    {
        let mut observers = self.inner.observers.borrow_mut();
        observers.push(Rc::new(observer));
        log::debug!(
            "{}: observer registered ({} total)",
            self.label(),
            observers.len()
        );
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    /// Number of completed reducer runs, the initialise dispatch included.
    pub fn dispatch_count(&self) -> u64 {
        self.inner.dispatches.get()
    }

    pub fn label(&self) -> &str {
        &self.inner.config.label
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Snapshot of the transition log, if history recording is enabled.
    pub fn history(&self) -> Option<TransitionLog<S>> {
        self.inner.history.borrow().clone()
    }

    pub fn downgrade(&self) -> WeakStore<S, A> {
        WeakStore {
            inner: Rc::downgrade(&self.inner),
        }
    }

    fn apply(&self, action: Envelope<A>) {
        let previous = self.get_state();
        let recording = self.inner.history.borrow().is_some();
        let from = (recording || log::log_enabled!(log::Level::Trace)).then(|| previous.clone());

        // No borrow is held while the reducer runs.
        let next = self.inner.reducer.reduce(previous, &action);

        let sequence = self.inner.dispatches.get() + 1;
        self.inner.dispatches.set(sequence);

        if let Some(from) = from {
            log::trace!(
                "{}: {} (#{}) {:?} -> {:?}",
                self.label(),
                action.name(),
                sequence,
                from,
                next
            );
            if recording {
                self.record(TransitionRecord {
                    action: action.name().to_string(),
                    from,
                    to: next.clone(),
                    timestamp: Utc::now(),
                    sequence,
                });
            }
        }

        *self.inner.state.borrow_mut() = next;

        let observers: Vec<Observer> = self.inner.observers.borrow().clone();
        log::debug!(
            "{}: dispatched {} (#{}), notifying {} observer(s)",
            self.label(),
            action.name(),
            sequence,
            observers.len()
        );
        for observer in &observers {
            observer();
        }
    }

    fn record(&self, transition: TransitionRecord<S>) {
        let mut history = self.inner.history.borrow_mut();
        if let Some(current) = history.take() {
            *history = Some(current.record(transition));
        }
    }
}

impl<S: State, A: Action> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: State, A: Action> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("label", &self.label())
            .field("state", &*self.inner.state.borrow())
            .field("observers", &self.observer_count())
            .field("dispatches", &self.dispatch_count())
            .finish()
    }
}

impl<S: State, A: Action> WeakStore<S, A> {
    /// Get a strong handle, unless every `Store` handle has been dropped.
    pub fn upgrade(&self) -> Option<Store<S, A>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}

impl<S: State, A: Action> Clone for WeakStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}
