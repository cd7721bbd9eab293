//! Store configuration.

use serde::{Deserialize, Serialize};

/// Tunable behaviour of a store.
///
/// Every field has a default, so a partial document deserializes cleanly.
/// The host application decides where the configuration comes from.
///
/// # Example
///
/// ```rust
/// use unistore::store::StoreConfig;
///
/// let config: StoreConfig = serde_json::from_str(r#"{ "label": "counter" }"#).unwrap();
/// assert_eq!(config.label, "counter");
/// assert!(!config.record_history);
/// assert_eq!(config.history_limit, Some(100));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Name used to tell stores apart in log output
    pub label: String,
    /// Keep a transition log, readable through `Store::history`
    pub record_history: bool,
    /// Maximum number of retained transitions; `None` keeps everything
    pub history_limit: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            label: "store".to_string(),
            record_history: false,
            history_limit: Some(100),
        }
    }
}
