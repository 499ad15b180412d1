//! JSON file implementation of [`RosterStorage`].

use super::{RosterRecord, RosterStorage};
use crate::error::{StorageError, StorageResult};
use crate::roster::Roster;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores the roster as a single pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonRosterStorage {
    path: PathBuf,
}

impl JsonRosterStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl RosterStorage for JsonRosterStorage {
    fn data_path(&self) -> &Path {
        &self.path
    }

    fn read_roster(&self) -> StorageResult<Option<Roster>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("Data file {} not found", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let record: RosterRecord = serde_json::from_str(&contents)?;
        let roster = record.thaw().map_err(|e| {
            tracing::warn!("Data file {} could not be loaded: {}", self.path.display(), e);
            e
        })?;

        tracing::info!(
            students = roster.students().len(),
            tutorials = roster.tutorials().len(),
            teaching_assistants = roster.teaching_assistants().len(),
            "Loaded roster from {}",
            self.path.display()
        );
        Ok(Some(roster))
    }

    /// Write the roster to a temporary file beside the data file, then
    /// rename it over the data file. A failed save leaves the previous
    /// file untouched.
    fn save_roster(&self, roster: &Roster) -> StorageResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;

        let json = serde_json::to_string_pretty(&RosterRecord::from(roster))?;

        let mut file = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        file.write_all(json.as_bytes()).map_err(|e| self.io_error(e))?;
        file.as_file().sync_all().map_err(|e| self.io_error(e))?;
        file.persist(&self.path).map_err(|e| {
            tracing::warn!("Could not replace {}: {}", self.path.display(), e.error);
            self.io_error(e.error)
        })?;

        tracing::info!("Saved roster to {}", self.path.display());
        Ok(())
    }
}
