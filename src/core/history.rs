//! State change history.
//!
//! An ordered, in-memory log of the state changes a machine has applied,
//! kept for observability. Records carry state names rather than states
//! themselves (states hold closures and are not serializable; names are),
//! so a history can be exported as plain data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
///
/// `from` is `None` for the first state a machine ever enters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Name of the state transitioned from, if any.
    pub from: Option<String>,
    /// Name of the state transitioned to.
    pub to: String,
    /// When the change was applied.
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    /// Record a change into `to`, stamped now.
    pub fn now(from: Option<String>, to: impl Into<String>) -> Self {
        TransitionRecord {
            from,
            to: to.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of state changes.
///
/// The `record` method returns a new history with the record appended,
/// leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use reconset::{History, TransitionRecord};
///
/// let history = History::new()
///     .record(TransitionRecord::now(None, "pending"))
///     .record(TransitionRecord::now(Some("pending".to_string()), "ready"));
///
/// assert_eq!(history.path(), ["pending", "ready"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    records: Vec<TransitionRecord>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new history.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Names of the states traversed, in order.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            if let Some(from) = &first.from {
                path.push(from.as_str());
            }
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Elapsed time between the first and last record, or `None` when the
    /// history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
