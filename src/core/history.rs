//! Transition log.
//!
//! Provides immutable tracking of the transitions a store has gone
//! through, for debugging and inspection. The log lives in memory only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single dispatch.
///
/// # Example
///
/// ```rust
/// use unistore::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     action: "INCREASE".to_string(),
///     from: 0,
///     to: 1,
///     timestamp: Utc::now(),
///     sequence: 2,
/// };
/// assert_eq!(record.to - record.from, 1);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TransitionRecord<S> {
    /// Name of the dispatched action
    pub action: String,
    /// The state before the reducer ran
    pub from: S,
    /// The state the reducer returned
    pub to: S,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
    /// 1-based dispatch number; the initialise dispatch is 1
    pub sequence: u64,
}

/// Ordered, optionally bounded log of transitions.
///
/// The log is immutable: `record` returns a new log with the transition
/// appended, dropping the oldest records once `limit` is exceeded.
///
/// # Example
///
/// ```rust
/// use unistore::core::{TransitionLog, TransitionRecord};
/// use chrono::Utc;
///
/// let step = |from: i32, to: i32, sequence: u64| TransitionRecord {
///     action: "STEP".to_string(),
///     from,
///     to,
///     timestamp: Utc::now(),
///     sequence,
/// };
///
/// let log = TransitionLog::new()
///     .record(step(0, 1, 1))
///     .record(step(1, 2, 2));
///
/// assert_eq!(log.get_path(), vec![&0, &1, &2]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionLog<S> {
    transitions: Vec<TransitionRecord<S>>,
    limit: Option<usize>,
}

impl<S> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TransitionLog<S> {
    /// Create an empty, unbounded log.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty log that keeps at most `limit` records.
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Get all retained transitions, oldest first.
    pub fn transitions(&self) -> &[TransitionRecord<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record followed by
    /// the `to` state of every record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and newest retained record.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

impl<S: Clone> TransitionLog<S> {
    /// Record a transition, returning a new log.
    ///
    /// This does not mutate the existing log.
    pub fn record(&self, transition: TransitionRecord<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        if let Some(limit) = self.limit {
            let excess = transitions.len().saturating_sub(limit);
            transitions.drain(..excess);
        }
        Self {
            transitions,
            limit: self.limit,
        }
    }
}

impl<S: Serialize> TransitionLog<S> {
    /// Render the retained records as a JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.transitions)
    }
}
