//! Roster entities: students, tutorials and teaching assistants.
//!
//! Entities are immutable aggregates of validated value objects. Each one
//! offers three separate notions of sameness:
//!
//! - full structural equality (`==`), every field matches;
//! - [`Record::is_same_identity`], the identifying field (the name) matches,
//!   used to tell an edit of an existing record from a new record;
//! - [`Tutorial::is_clash`], tutorials only, venue and timeslot match.

pub mod student;
pub mod teaching_assistant;
pub mod tutorial;

pub use student::{Student, StudentBuilder, StudentEdit};
pub use teaching_assistant::TeachingAssistant;
pub use tutorial::Tutorial;

use crate::error::RosterResult;
use std::fmt;

/// An entity that can be held in a [`crate::roster::UniqueRecordList`].
pub trait Record: Clone + PartialEq + fmt::Display {
    /// Noun used in user-facing messages, e.g. `"student"`.
    const KIND: &'static str;

    /// Identifying value shown in error messages.
    fn identity(&self) -> String;

    /// Weak equality over the identifying fields only.
    fn is_same_identity(&self, other: &Self) -> bool;

    /// Extra cross-record rule checked against every other record on insert
    /// and edit. Nothing by default.
    fn check_compatible(&self, _existing: &Self) -> RosterResult<()> {
        Ok(())
    }
}
