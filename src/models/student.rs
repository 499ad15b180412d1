//! Student model: a member of a tutorial group.

use super::Record;
use crate::domain::{
    Attendance, Email, Grade, Name, Participation, Phone, StudentId, Tag, Telegram,
    TutorialModule, TutorialName,
};
use std::collections::BTreeSet;
use std::fmt;

/// A student in the roster.
///
/// Every field is an already-validated value object, so a `Student` is
/// valid by construction. Tags are kept in a sorted set, which makes both
/// the display form and the stored form independent of insertion order.
///
/// The tutorial reference is a (module, tutorial name) pair and is not
/// checked against the roster's tutorials.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student {
    name: Name,
    id: StudentId,
    phone: Phone,
    email: Email,
    telegram: Telegram,
    tutorial_module: TutorialModule,
    tutorial_name: TutorialName,
    attendance: Attendance,
    participation: Participation,
    grade: Grade,
    tags: BTreeSet<Tag>,
}

impl Student {
    /// Create a student from every field.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        id: StudentId,
        phone: Phone,
        email: Email,
        telegram: Telegram,
        tutorial_module: TutorialModule,
        tutorial_name: TutorialName,
        attendance: Attendance,
        participation: Participation,
        grade: Grade,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
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
            tags: tags.into_iter().collect(),
        }
    }

    /// Start building a newly enrolled student.
    ///
    /// Attendance and participation default to zero and the grade to
    /// [`Grade::Pending`] unless set on the builder.
    pub fn builder(
        name: Name,
        id: StudentId,
        phone: Phone,
        email: Email,
        telegram: Telegram,
        tutorial_module: TutorialModule,
        tutorial_name: TutorialName,
    ) -> StudentBuilder {
        StudentBuilder {
            student: Self {
                name,
                id,
                phone,
                email,
                telegram,
                tutorial_module,
                tutorial_name,
                attendance: Attendance::zero(),
                participation: Participation::zero(),
                grade: Grade::Pending,
                tags: BTreeSet::new(),
            },
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn telegram(&self) -> &Telegram {
        &self.telegram
    }

    pub fn tutorial_module(&self) -> &TutorialModule {
        &self.tutorial_module
    }

    pub fn tutorial_name(&self) -> &TutorialName {
        &self.tutorial_name
    }

    pub fn attendance(&self) -> Attendance {
        self.attendance
    }

    pub fn participation(&self) -> Participation {
        self.participation
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Whether this student belongs to the given tutorial of the given module.
    pub fn is_in_tutorial(&self, module: &TutorialModule, tutorial: &TutorialName) -> bool {
        &self.tutorial_module == module && &self.tutorial_name == tutorial
    }
}

impl Record for Student {
    const KIND: &'static str = "student";

    fn identity(&self) -> String {
        self.name.to_string()
    }

    /// Students are the same record when their names match; every other
    /// field may differ.
    fn is_same_identity(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; ID: {}; Phone: {}; Email: {}; Telegram: {}; Module: {}; Tutorial: {}; \
             Attendance: {}; Participation: {}; Grade: {}",
            self.name,
            self.id,
            self.phone,
            self.email,
            self.telegram,
            self.tutorial_module,
            self.tutorial_name,
            self.attendance,
            self.participation,
            self.grade
        )?;
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "[{}]", tag)?;
            }
        }
        Ok(())
    }
}

/// Builder for a newly enrolled [`Student`], see [`Student::builder`].
#[derive(Debug, Clone)]
pub struct StudentBuilder {
    student: Student,
}

impl StudentBuilder {
    pub fn attendance(mut self, attendance: Attendance) -> Self {
        self.student.attendance = attendance;
        self
    }

    pub fn participation(mut self, participation: Participation) -> Self {
        self.student.participation = participation;
        self
    }

    pub fn grade(mut self, grade: Grade) -> Self {
        self.student.grade = grade;
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.student.tags.insert(tag);
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.student.tags.extend(tags);
        self
    }

    pub fn build(self) -> Student {
        self.student
    }
}

/// Replacement values for an edit; `None` keeps the current value.
///
/// Applying an edit never mutates the original student, it produces a new
/// one that the caller then swaps into the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentEdit {
    pub name: Option<Name>,
    pub id: Option<StudentId>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub telegram: Option<Telegram>,
    pub tutorial_module: Option<TutorialModule>,
    pub tutorial_name: Option<TutorialName>,
    pub attendance: Option<Attendance>,
    pub participation: Option<Participation>,
    pub grade: Option<Grade>,
    /// Replaces the whole tag set when present.
    pub tags: Option<BTreeSet<Tag>>,
}

impl StudentEdit {
    /// Whether at least one field would change.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.id.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.telegram.is_some()
            || self.tutorial_module.is_some()
            || self.tutorial_name.is_some()
            || self.attendance.is_some()
            || self.participation.is_some()
            || self.grade.is_some()
            || self.tags.is_some()
    }

    /// Build the edited copy of `student`.
    pub fn apply(&self, student: &Student) -> Student {
        Student {
            name: self.name.clone().unwrap_or_else(|| student.name.clone()),
            id: self.id.clone().unwrap_or_else(|| student.id.clone()),
            phone: self.phone.clone().unwrap_or_else(|| student.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| student.email.clone()),
            telegram: self
                .telegram
                .clone()
                .unwrap_or_else(|| student.telegram.clone()),
            tutorial_module: self
                .tutorial_module
                .clone()
                .unwrap_or_else(|| student.tutorial_module.clone()),
            tutorial_name: self
                .tutorial_name
                .clone()
                .unwrap_or_else(|| student.tutorial_name.clone()),
            attendance: self.attendance.unwrap_or(student.attendance),
            participation: self.participation.unwrap_or(student.participation),
            grade: self.grade.unwrap_or(student.grade),
            tags: self.tags.clone().unwrap_or_else(|| student.tags.clone()),
        }
    }
}
