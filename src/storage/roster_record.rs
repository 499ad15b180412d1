//! Root container of the stored roster.

use super::{StudentRecord, TeachingAssistantRecord, TutorialRecord};
use crate::error::StorageResult;
use crate::roster::Roster;
use serde::{Deserialize, Serialize};

/// The whole roster as stored on disk.
///
/// Absent lists read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterRecord {
    #[serde(default)]
    pub students: Vec<StudentRecord>,
    #[serde(default)]
    pub tutorials: Vec<TutorialRecord>,
    #[serde(default)]
    pub teaching_assistants: Vec<TeachingAssistantRecord>,
}

impl RosterRecord {
    /// Rebuild the roster.
    ///
    /// Students are thawed first, then tutorials, then teaching assistants,
    /// each in stored order and each inserted through the roster's checks.
    /// The first bad record aborts the whole load; no partial roster is
    /// returned.
    ///
    /// # Errors
    ///
    /// `MissingField` or `InvalidField` for a malformed record, `Conflict`
    /// for a duplicate or clashing record.
    pub fn thaw(&self) -> StorageResult<Roster> {
        let mut roster = Roster::new();
        for record in &self.students {
            roster.add_student(record.thaw()?)?;
        }
        for record in &self.tutorials {
            roster.add_tutorial(record.thaw()?)?;
        }
        for record in &self.teaching_assistants {
            roster.add_teaching_assistant(record.thaw()?)?;
        }
        Ok(roster)
    }
}

impl From<&Roster> for RosterRecord {
    fn from(roster: &Roster) -> Self {
        Self {
            students: roster.students().iter().map(StudentRecord::from).collect(),
            tutorials: roster.tutorials().iter().map(TutorialRecord::from).collect(),
            teaching_assistants: roster
                .teaching_assistants()
                .iter()
                .map(TeachingAssistantRecord::from)
                .collect(),
        }
    }
}
