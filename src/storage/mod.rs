//! Persistence of the roster.
//!
//! The roster is stored as a tree of flat, string-keyed records (one per
//! entity) that serialize to JSON. Converting an entity into its record
//! ("freezing") never fails. Converting a record back ("thawing") re-checks
//! every field in a fixed order, reporting the first field that is either
//! missing or invalid, and only builds the entity once every field passed.

pub mod assistant_record;
pub mod json_file;
pub mod roster_record;
pub mod stored_text;
pub mod student_record;
pub mod tutorial_record;

pub use assistant_record::TeachingAssistantRecord;
pub use json_file::JsonRosterStorage;
pub use roster_record::RosterRecord;
pub use stored_text::StoredText;
pub use student_record::{StudentRecord, TagRecord};
pub use tutorial_record::TutorialRecord;

use crate::domain::FieldValue;
use crate::error::{StorageError, StorageResult};
use crate::roster::Roster;
use std::path::Path;

/// Storage backend for the whole roster.
pub trait RosterStorage {
    /// Location of the backing data.
    fn data_path(&self) -> &Path;

    /// Load the roster.
    ///
    /// Returns `Ok(None)` if no data has been saved yet. Any malformed or
    /// inconsistent record fails the whole load.
    fn read_roster(&self) -> StorageResult<Option<Roster>>;

    /// Replace the stored roster with `roster`.
    fn save_roster(&self, roster: &Roster) -> StorageResult<()>;

    /// Load the stored roster into `roster`, replacing its contents.
    ///
    /// `roster` is only touched once the whole load has succeeded: on any
    /// error, or when nothing has been saved yet, it keeps its records.
    /// Returns whether a stored roster was found.
    fn reload_into(&self, roster: &mut Roster) -> StorageResult<bool> {
        match self.read_roster()? {
            Some(loaded) => {
                *roster = loaded;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Thaw one required field: presence first, then format.
///
/// A structured value (array or object) is reported as invalid for the
/// field, with the field's constraint message.
pub(crate) fn thaw_field<T: FieldValue>(
    record: &'static str,
    field: &'static str,
    raw: Option<&StoredText>,
) -> StorageResult<T> {
    let raw = raw.ok_or(StorageError::MissingField { record, field })?;
    if raw.is_structured() {
        return Err(StorageError::InvalidField {
            record,
            field,
            message: T::MESSAGE_CONSTRAINTS,
        });
    }
    T::parse(raw.as_str()).map_err(|e| StorageError::InvalidField {
        record,
        field,
        message: e.message(),
    })
}
