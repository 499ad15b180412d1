//! Tutorial model: a weekly tutorial group of a module.

use super::Record;
use crate::domain::{TutorialDay, TutorialModule, TutorialName, TutorialTimeslot, TutorialVenue};
use crate::error::{RosterError, RosterResult};
use std::fmt;

/// A tutorial group held weekly at a fixed venue, timeslot and day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tutorial {
    name: TutorialName,
    module: TutorialModule,
    venue: TutorialVenue,
    timeslot: TutorialTimeslot,
    day: TutorialDay,
}

impl Tutorial {
    pub fn new(
        name: TutorialName,
        module: TutorialModule,
        venue: TutorialVenue,
        timeslot: TutorialTimeslot,
        day: TutorialDay,
    ) -> Self {
        Self {
            name,
            module,
            venue,
            timeslot,
            day,
        }
    }

    pub fn name(&self) -> &TutorialName {
        &self.name
    }

    pub fn module(&self) -> &TutorialModule {
        &self.module
    }

    pub fn venue(&self) -> &TutorialVenue {
        &self.venue
    }

    pub fn timeslot(&self) -> TutorialTimeslot {
        self.timeslot
    }

    pub fn day(&self) -> TutorialDay {
        self.day
    }

    /// Whether both tutorials occupy the same venue during the same timeslot.
    ///
    /// Name, module and day are not compared.
    pub fn is_clash(&self, other: &Tutorial) -> bool {
        self.venue == other.venue && self.timeslot == other.timeslot
    }
}

impl Record for Tutorial {
    const KIND: &'static str = "tutorial";

    fn identity(&self) -> String {
        self.name.to_string()
    }

    fn is_same_identity(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn check_compatible(&self, existing: &Self) -> RosterResult<()> {
        if self.is_clash(existing) {
            return Err(RosterError::ScheduleClash {
                tutorial: self.name.to_string(),
                existing: existing.name.to_string(),
                venue: self.venue.to_string(),
                timeslot: self.timeslot.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Tutorial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Module: {}; Venue: {}; Timeslot: {}; Day: {}",
            self.name, self.module, self.venue, self.timeslot, self.day
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutorial(name: &str, module: &str, venue: &str, timeslot: &str, day: &str) -> Tutorial {
        Tutorial::new(
            TutorialName::parse(name).unwrap(),
            TutorialModule::parse(module).unwrap(),
            TutorialVenue::parse(venue).unwrap(),
            TutorialTimeslot::parse(timeslot).unwrap(),
            TutorialDay::parse(day).unwrap(),
        )
    }

    #[test]
    fn test_clash_on_venue_and_timeslot() {
        let t1 = tutorial("T01", "CS2103T", "COM1-0203", "10:00-12:00", "MON");
        let t2 = tutorial("T02", "CS2101", "COM1-0203", "10:00-12:00", "WED");
        assert!(t1.is_clash(&t2));
        assert!(t2.is_clash(&t1));
        assert!(!t1.is_same_identity(&t2));
    }

    #[test]
    fn test_no_clash_when_venue_or_timeslot_differs() {
        let t1 = tutorial("T01", "CS2103T", "COM1-0203", "10:00-12:00", "MON");
        let other_venue = tutorial("T01", "CS2103T", "COM1-0204", "10:00-12:00", "MON");
        let other_slot = tutorial("T01", "CS2103T", "COM1-0203", "10:00-11:00", "MON");
        assert!(!t1.is_clash(&other_venue));
        assert!(!t1.is_clash(&other_slot));
    }

    #[test]
    fn test_clash_compares_canonical_timeslot() {
        let t1 = tutorial("T01", "CS2103T", "COM1-0203", "09:00-10:00", "MON");
        let t2 = tutorial("T02", "CS2103T", "COM1-0203", "9:00-10:00", "TUE");
        assert!(t1.is_clash(&t2));
    }

    #[test]
    fn test_same_identity_is_name_only() {
        let t1 = tutorial("T01", "CS2103T", "COM1-0203", "10:00-12:00", "MON");
        let t1_elsewhere = tutorial("T01", "CS2101", "LT27", "14:00-16:00", "FRI");
        assert!(t1.is_same_identity(&t1_elsewhere));
        assert_ne!(t1, t1_elsewhere);
        assert_eq!(t1, t1.clone());
    }

    #[test]
    fn test_check_compatible_reports_clash() {
        let t1 = tutorial("T01", "CS2103T", "COM1-0203", "10:00-12:00", "MON");
        let t2 = tutorial("T02", "CS2101", "COM1-0203", "10:00-12:00", "WED");
        match t2.check_compatible(&t1) {
            Err(RosterError::ScheduleClash {
                tutorial, existing, ..
            }) => {
                assert_eq!(tutorial, "T02");
                assert_eq!(existing, "T01");
            }
            other => panic!("Expected ScheduleClash, got: {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        let t1 = tutorial("T01", "cs2103t", "COM1-0203", "9:00-11:00", "monday");
        assert_eq!(
            t1.to_string(),
            "T01; Module: CS2103T; Venue: COM1-0203; Timeslot: 09:00-11:00; Day: MON"
        );
    }
}
