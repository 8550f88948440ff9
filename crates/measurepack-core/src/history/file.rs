use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::{HistoryDocument, HistoryEntry, HistoryError, HistoryLog};

/// History backed by a JSON document on disk.
///
/// Entries are loaded on [`open`](Self::open) and only written back by
/// [`save`](Self::save).
#[derive(Debug)]
pub struct JsonFileHistory {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl JsonFileHistory {
    /// Loads the history stored at `path`; a missing file yields an empty log.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, HistoryError> {
        let path = path.into();
        if !path.exists() {
            warn!(
                "No history file found at {}, starting with empty history",
                path.display()
            );
            return Ok(Self {
                path,
                entries: Vec::new(),
            });
        }

        let raw = fs::read_to_string(&path)?;
        let entries = if raw.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str::<HistoryDocument>(&raw)?.history
        };
        info!(
            "Loaded {} history entries from {}",
            entries.len(),
            path.display()
        );
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every entry back to the history file.
    pub fn save(&self) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let document = HistoryDocument {
            history: self.entries.clone(),
        };
        let json = serde_json::to_string_pretty(&document)?;
        fs::write(&self.path, json)?;
        info!(
            "Saved {} history entries to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn into_document(self) -> HistoryDocument {
        HistoryDocument {
            history: self.entries,
        }
    }
}

impl HistoryLog for JsonFileHistory {
    fn record(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        self.entries.push(entry);
        Ok(())
    }

    fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_opens_empty() {
        let temp = TempDir::new().expect("tempdir");
        let history = JsonFileHistory::open(temp.path().join("history.json")).unwrap();
        assert!(history.entries().is_empty());
    }

    #[test]
    fn save_then_reopen_appends() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("nested").join("history.json");

        let mut history = JsonFileHistory::open(&path).unwrap();
        history.record(HistoryEntry::now("aa", vec![1])).unwrap();
        history.save().unwrap();

        let mut reopened = JsonFileHistory::open(&path).unwrap();
        assert_eq!(reopened.entries().len(), 1);
        reopened.record(HistoryEntry::now("ba", vec![2])).unwrap();
        reopened.save().unwrap();

        let document = JsonFileHistory::open(&path).unwrap().into_document();
        let responses: Vec<Vec<u32>> = document.history.into_iter().map(|e| e.response).collect();
        assert_eq!(responses, vec![vec![1], vec![2]]);
    }

    #[test]
    fn empty_file_opens_empty() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("history.json");
        fs::write(&path, "  \n").unwrap();
        assert!(JsonFileHistory::open(&path).unwrap().entries().is_empty());
    }

    #[test]
    fn corrupt_file_is_rejected() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("history.json");
        fs::write(&path, "{not json").unwrap();
        let err = JsonFileHistory::open(&path).unwrap_err();
        assert!(matches!(err, HistoryError::Json(_)));
    }
}
