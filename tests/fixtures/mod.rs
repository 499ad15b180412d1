//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable students, tutorials and teaching assistants
//! and a typical roster built from them.

#![allow(dead_code)]

use modquik::domain::*;
use modquik::models::StudentBuilder;
use modquik::{Roster, Student, TeachingAssistant, Tutorial};

/// Start building a student in CS2103T with the given name and tutorial.
///
/// The email and Telegram handle are derived from the name; the ID and
/// phone number are the same for every student.
pub fn student_builder(name: &str, tutorial: &str) -> StudentBuilder {
    let handle: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    Student::builder(
        Name::parse(name).unwrap(),
        StudentId::parse("A0123456X").unwrap(),
        Phone::parse("87438807").unwrap(),
        Email::parse(&format!("{}@example.com", handle)).unwrap(),
        Telegram::parse(&format!("tg{}", handle)).unwrap(),
        TutorialModule::parse("CS2103T").unwrap(),
        TutorialName::parse(tutorial).unwrap(),
    )
}

/// A student with default attendance, participation and grade.
pub fn sample_student(name: &str, tutorial: &str) -> Student {
    student_builder(name, tutorial).build()
}

pub fn sample_tutorial(name: &str, venue: &str, timeslot: &str, day: &str) -> Tutorial {
    Tutorial::new(
        TutorialName::parse(name).unwrap(),
        TutorialModule::parse("CS2103T").unwrap(),
        TutorialVenue::parse(venue).unwrap(),
        TutorialTimeslot::parse(timeslot).unwrap(),
        TutorialDay::parse(day).unwrap(),
    )
}

pub fn sample_teaching_assistant(name: &str) -> TeachingAssistant {
    let handle: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    TeachingAssistant::new(
        TeachingAssistantName::parse(name).unwrap(),
        TutorialModule::parse("CS2103T").unwrap(),
        Phone::parse("99272758").unwrap(),
        Email::parse(&format!("{}@example.com", handle)).unwrap(),
        Telegram::parse(&format!("ta{}", handle)).unwrap(),
    )
}

/// Alex, fully populated with scores, a grade and tags.
pub fn alex() -> Student {
    student_builder("Alex Yeoh", "T23")
        .attendance(Attendance::parse("3").unwrap())
        .participation(Participation::parse("120").unwrap())
        .grade(Grade::B)
        .tag(Tag::parse("friends").unwrap())
        .tag(Tag::parse("classRep").unwrap())
        .build()
}

/// A roster with two tutorials, one teaching assistant and three students.
pub fn typical_roster() -> Roster {
    let mut roster = Roster::new();
    roster
        .add_tutorial(sample_tutorial("T23", "COM1-0203", "10:00-12:00", "MON"))
        .unwrap();
    roster
        .add_tutorial(sample_tutorial("T24", "COM1-0203", "14:00-16:00", "MON"))
        .unwrap();
    roster
        .add_teaching_assistant(sample_teaching_assistant("Bernice Yu"))
        .unwrap();
    roster.add_student(alex()).unwrap();
    roster
        .add_student(sample_student("Charlotte Oliveiro", "T23"))
        .unwrap();
    roster
        .add_student(
            student_builder("David Li", "T24")
                .grade(Grade::Pending)
                .tag(Tag::parse("weak2").unwrap())
                .build(),
        )
        .unwrap();
    roster
}
