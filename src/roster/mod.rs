//! The roster: the authoritative collection of students, tutorials and
//! teaching assistants.
//!
//! Every insert and edit goes through a [`UniqueRecordList`], which enforces
//! identity uniqueness per entity kind and, for tutorials, rejects schedule
//! clashes.

pub mod unique_list;

pub use unique_list::UniqueRecordList;

use crate::domain::{TutorialModule, TutorialName};
use crate::error::RosterResult;
use crate::models::{Student, TeachingAssistant, Tutorial};

/// All records managed by the application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: UniqueRecordList<Student>,
    tutorials: UniqueRecordList<Tutorial>,
    teaching_assistants: UniqueRecordList<TeachingAssistant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    // Students

    pub fn students(&self) -> &[Student] {
        self.students.as_slice()
    }

    pub fn has_student(&self, student: &Student) -> bool {
        self.students.contains(student)
    }

    /// Add a student; fails with `DuplicateRecord` on a name collision.
    pub fn add_student(&mut self, student: Student) -> RosterResult<()> {
        self.students.add(student)
    }

    /// Replace `target` with `edited`.
    pub fn set_student(&mut self, target: &Student, edited: Student) -> RosterResult<()> {
        self.students.set(target, edited)
    }

    pub fn remove_student(&mut self, target: &Student) -> RosterResult<Student> {
        self.students.remove(target)
    }

    /// Students whose tutorial reference names the given tutorial.
    ///
    /// The tutorial itself does not need to exist in the roster.
    pub fn students_in<'a>(
        &'a self,
        module: &'a TutorialModule,
        tutorial: &'a TutorialName,
    ) -> impl Iterator<Item = &'a Student> + 'a {
        self.students
            .iter()
            .filter(move |s| s.is_in_tutorial(module, tutorial))
    }

    // Tutorials

    pub fn tutorials(&self) -> &[Tutorial] {
        self.tutorials.as_slice()
    }

    pub fn has_tutorial(&self, tutorial: &Tutorial) -> bool {
        self.tutorials.contains(tutorial)
    }

    /// Add a tutorial; fails with `DuplicateRecord` on a name collision or
    /// `ScheduleClash` if another tutorial holds the same venue and timeslot.
    pub fn add_tutorial(&mut self, tutorial: Tutorial) -> RosterResult<()> {
        self.tutorials.add(tutorial)
    }

    pub fn set_tutorial(&mut self, target: &Tutorial, edited: Tutorial) -> RosterResult<()> {
        self.tutorials.set(target, edited)
    }

    pub fn remove_tutorial(&mut self, target: &Tutorial) -> RosterResult<Tutorial> {
        self.tutorials.remove(target)
    }

    // Teaching assistants

    pub fn teaching_assistants(&self) -> &[TeachingAssistant] {
        self.teaching_assistants.as_slice()
    }

    pub fn has_teaching_assistant(&self, ta: &TeachingAssistant) -> bool {
        self.teaching_assistants.contains(ta)
    }

    pub fn add_teaching_assistant(&mut self, ta: TeachingAssistant) -> RosterResult<()> {
        self.teaching_assistants.add(ta)
    }

    pub fn set_teaching_assistant(
        &mut self,
        target: &TeachingAssistant,
        edited: TeachingAssistant,
    ) -> RosterResult<()> {
        self.teaching_assistants.set(target, edited)
    }

    pub fn remove_teaching_assistant(
        &mut self,
        target: &TeachingAssistant,
    ) -> RosterResult<TeachingAssistant> {
        self.teaching_assistants.remove(target)
    }

    /// Whether the roster holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.tutorials.is_empty() && self.teaching_assistants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::*;
    use crate::error::RosterError;
    use crate::models::StudentEdit;

    fn student(name: &str, tutorial: &str) -> Student {
        Student::builder(
            Name::parse(name).unwrap(),
            StudentId::parse("A1234567X").unwrap(),
            Phone::parse("87438807").unwrap(),
            Email::parse("student@example.com").unwrap(),
            Telegram::parse("studenthandle").unwrap(),
            TutorialModule::parse("CS2103T").unwrap(),
            TutorialName::parse(tutorial).unwrap(),
        )
        .build()
    }

    fn tutorial(name: &str, venue: &str, timeslot: &str, day: &str) -> Tutorial {
        Tutorial::new(
            TutorialName::parse(name).unwrap(),
            TutorialModule::parse("CS2103T").unwrap(),
            TutorialVenue::parse(venue).unwrap(),
            TutorialTimeslot::parse(timeslot).unwrap(),
            TutorialDay::parse(day).unwrap(),
        )
    }

    #[test]
    fn test_add_duplicate_student_by_name() {
        let mut roster = Roster::new();
        let alex = student("Alex Yeoh", "T01");
        roster.add_student(alex.clone()).unwrap();

        let alex_again = StudentEdit {
            phone: Some(Phone::parse("12345678").unwrap()),
            ..Default::default()
        }
        .apply(&alex);
        let result = roster.add_student(alex_again);
        assert!(matches!(result, Err(RosterError::DuplicateRecord { .. })));
        assert_eq!(roster.students().len(), 1);
    }

    #[test]
    fn test_students_with_same_id_but_different_names_are_allowed() {
        let mut roster = Roster::new();
        roster.add_student(student("Alex Yeoh", "T01")).unwrap();
        roster.add_student(student("Bernice Yu", "T01")).unwrap();
        assert_eq!(roster.students().len(), 2);
    }

    #[test]
    fn test_add_clashing_tutorial_leaves_roster_unchanged() {
        let mut roster = Roster::new();
        roster
            .add_tutorial(tutorial("T01", "COM1-0203", "10:00-12:00", "MON"))
            .unwrap();
        let before = roster.clone();

        let result = roster.add_tutorial(tutorial("T02", "COM1-0203", "10:00-12:00", "THU"));
        assert!(matches!(result, Err(RosterError::ScheduleClash { .. })));
        assert_eq!(roster.tutorials().len(), 1);
        assert_eq!(roster, before);
    }

    #[test]
    fn test_edit_tutorial_to_itself() {
        let mut roster = Roster::new();
        let t1 = tutorial("T01", "COM1-0203", "10:00-12:00", "MON");
        roster.add_tutorial(t1.clone()).unwrap();
        roster.set_tutorial(&t1, t1.clone()).unwrap();
        assert_eq!(roster.tutorials(), &[t1]);
    }

    #[test]
    fn test_edit_student_changes_only_target() {
        let mut roster = Roster::new();
        let alex = student("Alex Yeoh", "T01");
        let bernice = student("Bernice Yu", "T01");
        roster.add_student(alex.clone()).unwrap();
        roster.add_student(bernice.clone()).unwrap();

        let promoted = StudentEdit {
            grade: Some(Grade::A),
            ..Default::default()
        }
        .apply(&alex);
        roster.set_student(&alex, promoted.clone()).unwrap();
        assert_eq!(roster.students(), &[promoted.clone(), bernice.clone()]);

        let collide = StudentEdit {
            name: Some(Name::parse("Bernice Yu").unwrap()),
            ..Default::default()
        }
        .apply(&promoted);
        assert!(roster.set_student(&promoted, collide).is_err());
    }

    #[test]
    fn test_students_in_tutorial_without_tutorial_record() {
        let mut roster = Roster::new();
        roster.add_student(student("Alex Yeoh", "T01")).unwrap();
        roster.add_student(student("Bernice Yu", "T02")).unwrap();

        let module = TutorialModule::parse("CS2103T").unwrap();
        let t01 = TutorialName::parse("T01").unwrap();
        let names: Vec<_> = roster
            .students_in(&module, &t01)
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["Alex Yeoh"]);
        assert!(roster.tutorials().is_empty());
    }

    #[test]
    fn test_teaching_assistants() {
        let mut roster = Roster::new();
        let ta = TeachingAssistant::new(
            TeachingAssistantName::parse("Charlotte Oliveiro").unwrap(),
            TutorialModule::parse("CS2103T").unwrap(),
            Phone::parse("93210283").unwrap(),
            Email::parse("charlotte@example.com").unwrap(),
            Telegram::parse("charlotte").unwrap(),
        );
        roster.add_teaching_assistant(ta.clone()).unwrap();
        assert!(roster.has_teaching_assistant(&ta));
        assert!(roster.add_teaching_assistant(ta.clone()).is_err());
        roster.remove_teaching_assistant(&ta).unwrap();
        assert!(roster.is_empty());
    }
}
