use modquik::error::StorageResult;
use modquik::storage::{RosterRecord, RosterStorage};
use modquik::Roster;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock roster storage for testing.
///
/// Keeps the stored document as a JSON string in memory, so every save and
/// read goes through the same freeze/serialize and deserialize/thaw path as
/// the file store, and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockRosterStorage {
    path: PathBuf,
    document: Arc<Mutex<Option<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockRosterStorage {
    /// Create a new empty MockRosterStorage.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("memory://roster.json"),
            document: Arc::new(Mutex::new(None)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Replace the stored document with raw JSON, as if hand-edited.
    pub fn set_document(&self, json: impl Into<String>) {
        *self.document.lock().unwrap() = Some(json.into());
    }

    /// Get the stored document.
    pub fn document(&self) -> Option<String> {
        self.document.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn record_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl RosterStorage for MockRosterStorage {
    fn data_path(&self) -> &Path {
        &self.path
    }

    fn read_roster(&self) -> StorageResult<Option<Roster>> {
        self.record_call("read_roster");
        match self.document() {
            None => Ok(None),
            Some(json) => {
                let record: RosterRecord = serde_json::from_str(&json)?;
                Ok(Some(record.thaw()?))
            }
        }
    }

    fn save_roster(&self, roster: &Roster) -> StorageResult<()> {
        self.record_call("save_roster");
        let json = serde_json::to_string(&RosterRecord::from(roster))?;
        self.set_document(json);
        Ok(())
    }
}
