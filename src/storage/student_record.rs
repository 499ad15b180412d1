//! Stored form of a [`Student`].

use super::{thaw_field, StoredText};
use crate::domain::{
    Attendance, Email, Grade, Name, Participation, Phone, StudentId, Tag, Telegram,
    TutorialModule, TutorialName,
};
use crate::error::{StorageError, StorageResult};
use crate::models::Student;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const RECORD: &str = "Student";

/// A stored tag, serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagRecord {
    pub tag_name: StoredText,
}

impl TagRecord {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: StoredText::from(tag_name.into()),
        }
    }

    /// Re-validate the tag.
    pub fn thaw(&self) -> StorageResult<Tag> {
        thaw_field(RECORD, "tagged", Some(&self.tag_name))
    }
}

impl From<&Tag> for TagRecord {
    fn from(tag: &Tag) -> Self {
        Self::new(tag.as_str())
    }
}

/// A student as stored on disk.
///
/// Every field is optional here so that a hand-edited file with a missing
/// key still deserializes; [`StudentRecord::thaw`] then reports exactly
/// which field is missing. Numbers are written as strings, and a bare
/// number or boolean in a hand-edited file is read back as its text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub name: Option<StoredText>,
    pub id: Option<StoredText>,
    pub phone: Option<StoredText>,
    pub email: Option<StoredText>,
    pub telegram: Option<StoredText>,
    pub tutorial_module: Option<StoredText>,
    pub tutorial_name: Option<StoredText>,
    pub attendance: Option<StoredText>,
    pub participation: Option<StoredText>,
    pub grade: Option<StoredText>,
    #[serde(default)]
    pub tagged: Vec<TagRecord>,
}

impl StudentRecord {
    /// Rebuild the student, validating every field.
    ///
    /// Tags are checked first, then `name, id, phone, email, telegram,
    /// tutorialModule, tutorialName, attendance, participation, grade`.
    /// The first failing field is reported; no default is applied to any
    /// missing field.
    ///
    /// # Errors
    ///
    /// `StorageError::MissingField` or `StorageError::InvalidField`.
    pub fn thaw(&self) -> StorageResult<Student> {
        let tags = self
            .tagged
            .iter()
            .map(TagRecord::thaw)
            .collect::<StorageResult<BTreeSet<Tag>>>()?;

        let name: Name = thaw_field(RECORD, "name", self.name.as_ref())?;
        let id: StudentId = thaw_field(RECORD, "id", self.id.as_ref())?;
        let phone: Phone = thaw_field(RECORD, "phone", self.phone.as_ref())?;
        let email: Email = thaw_field(RECORD, "email", self.email.as_ref())?;
        let telegram: Telegram = thaw_field(RECORD, "telegram", self.telegram.as_ref())?;
        let tutorial_module: TutorialModule =
            thaw_field(RECORD, "tutorialModule", self.tutorial_module.as_ref())?;
        let tutorial_name: TutorialName =
            thaw_field(RECORD, "tutorialName", self.tutorial_name.as_ref())?;
        let attendance: Attendance =
            thaw_field(RECORD, "attendance", self.attendance.as_ref())?;
        let participation: Participation =
            thaw_field(RECORD, "participation", self.participation.as_ref())?;
        let grade: Grade = thaw_field(RECORD, "grade", self.grade.as_ref())?;

        Ok(Student::new(
            name,
            id,
            phone,
            email,
            telegram,
            tutorial_module,
            tutorial_name,
            attendance,
            participation,
            grade,
            tags,
        ))
    }
}

impl From<&Student> for StudentRecord {
    fn from(student: &Student) -> Self {
        Self {
            name: Some(student.name().to_string().into()),
            id: Some(student.id().to_string().into()),
            phone: Some(student.phone().to_string().into()),
            email: Some(student.email().to_string().into()),
            telegram: Some(student.telegram().to_string().into()),
            tutorial_module: Some(student.tutorial_module().to_string().into()),
            tutorial_name: Some(student.tutorial_name().to_string().into()),
            attendance: Some(student.attendance().to_string().into()),
            participation: Some(student.participation().to_string().into()),
            grade: Some(student.grade().to_string().into()),
            tagged: student.tags().iter().map(TagRecord::from).collect(),
        }
    }
}

impl TryFrom<&StudentRecord> for Student {
    type Error = StorageError;

    fn try_from(record: &StudentRecord) -> StorageResult<Self> {
        record.thaw()
    }
}
