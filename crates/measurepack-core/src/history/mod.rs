//! Append-only log of conversion requests and their results.
//!
//! Front ends receive a [`HistoryLog`] instead of sharing global state.
//! [`MemoryHistory`] keeps entries for the lifetime of the process;
//! [`JsonFileHistory`] loads and saves them as a JSON document.

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::DEFAULT_TIMESTAMP;

mod error;
mod file;

pub use error::HistoryError;
pub use file::JsonFileHistory;

/// One recorded conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// RFC3339 UTC time the conversion was recorded.
    pub timestamp: String,
    /// Input string as received.
    pub request: String,
    /// Package sums returned for `request`.
    pub response: Vec<u32>,
}

impl HistoryEntry {
    /// Builds an entry stamped with the current UTC time.
    ///
    /// # Examples
    /// ```
    /// use measurepack_core::HistoryEntry;
    ///
    /// let entry = HistoryEntry::now("aa", vec![1]);
    /// assert_eq!(entry.request, "aa");
    /// assert!(entry.timestamp.ends_with('Z'));
    /// ```
    pub fn now(request: impl Into<String>, response: Vec<u32>) -> Self {
        let timestamp = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| DEFAULT_TIMESTAMP.to_string());
        Self {
            timestamp,
            request: request.into(),
            response,
        }
    }
}

/// Serialized form of a history store: `{"history": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryDocument {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// Append-only record of conversions.
pub trait HistoryLog {
    fn record(&mut self, entry: HistoryEntry) -> Result<(), HistoryError>;
    /// All entries in the order they were recorded.
    fn entries(&self) -> &[HistoryEntry];
}

/// History kept in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryLog for MemoryHistory {
    fn record(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        self.entries.push(entry);
        Ok(())
    }

    fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
