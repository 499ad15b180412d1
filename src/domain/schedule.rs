//! Tutorial fields: name, module code, venue, timeslot and day.

use super::constrained::{Constrained, Constraint, FieldValue};
use super::errors::ValidationError;
use chrono::{NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static TUTORIAL_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("Failed to compile tutorial name regex")
});

static MODULE_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}[0-9]{4}[A-Za-z]?$").expect("Failed to compile module code regex")
});

static TIMESLOT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([01]?[0-9]|2[0-3]):([0-5][0-9])-([01]?[0-9]|2[0-3]):([0-5][0-9])$")
        .expect("Failed to compile timeslot regex")
});

/// Name of a tutorial group, e.g. `T23`.
pub type TutorialName = Constrained<TutorialNameRule>;

pub enum TutorialNameRule {}

impl Constraint for TutorialNameRule {
    const LABEL: &'static str = "TutorialName";
    const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    fn is_valid(raw: &str) -> bool {
        TUTORIAL_NAME_REGEX.is_match(raw)
    }
}

/// Course code of the module a tutorial belongs to, e.g. `CS2103T`.
///
/// Accepted in any case and stored upper-cased.
pub type TutorialModule = Constrained<TutorialModuleRule>;

pub enum TutorialModuleRule {}

impl Constraint for TutorialModuleRule {
    const LABEL: &'static str = "TutorialModule";
    const MESSAGE_CONSTRAINTS: &'static str = "Module code should start with 2 or 3 letters, \
        followed by 4 digits and an optional letter suffix, e.g. CS2103T";

    fn is_valid(raw: &str) -> bool {
        MODULE_CODE_REGEX.is_match(raw)
    }

    fn normalize(raw: &str) -> String {
        raw.to_ascii_uppercase()
    }
}

/// Room a tutorial is held in.
pub type TutorialVenue = Constrained<TutorialVenueRule>;

pub enum TutorialVenueRule {}

impl Constraint for TutorialVenueRule {
    const LABEL: &'static str = "TutorialVenue";
    const MESSAGE_CONSTRAINTS: &'static str =
        "Venue can take any values, and it should not be blank";

    fn is_valid(raw: &str) -> bool {
        raw.chars().next().is_some_and(|c| !c.is_whitespace())
    }
}

/// Start and end time of a tutorial within a day, e.g. `10:00-12:00`.
///
/// The start is always strictly before the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TutorialTimeslot {
    start: NaiveTime,
    end: NaiveTime,
}

impl TutorialTimeslot {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Timeslot should be of the format HH:MM-HH:MM \
        in 24-hour time, and the start time should be earlier than the end time";

    /// Parse a `HH:MM-HH:MM` range; single-digit hours are accepted.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the text is malformed or the range is
    /// empty or reversed.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let captures = TIMESLOT_REGEX.captures(raw).ok_or_else(Self::error)?;
        let part = |i: usize| -> Result<u32, ValidationError> {
            captures[i].parse().map_err(|_| Self::error())
        };
        let start = NaiveTime::from_hms_opt(part(1)?, part(2)?, 0).ok_or_else(Self::error)?;
        let end = NaiveTime::from_hms_opt(part(3)?, part(4)?, 0).ok_or_else(Self::error)?;
        Self::new(start, end)
    }

    /// Build a timeslot from its endpoints.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] unless `start < end`, or if either
    /// endpoint carries seconds.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, ValidationError> {
        if start >= end || start.second() != 0 || end.second() != 0 || start.nanosecond() != 0
            || end.nanosecond() != 0
        {
            return Err(Self::error());
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    fn error() -> ValidationError {
        ValidationError::new(<Self as FieldValue>::LABEL, Self::MESSAGE_CONSTRAINTS)
    }
}

impl FieldValue for TutorialTimeslot {
    const LABEL: &'static str = "TutorialTimeslot";
    const MESSAGE_CONSTRAINTS: &'static str = TutorialTimeslot::MESSAGE_CONSTRAINTS;

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        TutorialTimeslot::parse(raw)
    }
}

impl fmt::Display for TutorialTimeslot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Weekday a tutorial is held on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TutorialDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl TutorialDay {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Day should be a weekday: MON, TUE, WED, THU or FRI (full day names are also accepted)";

    /// Parse a weekday by its three-letter or full English name, in any case.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for weekend days and anything else.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.to_ascii_uppercase().as_str() {
            "MON" | "MONDAY" => Ok(Self::Monday),
            "TUE" | "TUESDAY" => Ok(Self::Tuesday),
            "WED" | "WEDNESDAY" => Ok(Self::Wednesday),
            "THU" | "THURSDAY" => Ok(Self::Thursday),
            "FRI" | "FRIDAY" => Ok(Self::Friday),
            _ => Err(ValidationError::new(
                <Self as FieldValue>::LABEL,
                Self::MESSAGE_CONSTRAINTS,
            )),
        }
    }

    /// Canonical three-letter form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "MON",
            Self::Tuesday => "TUE",
            Self::Wednesday => "WED",
            Self::Thursday => "THU",
            Self::Friday => "FRI",
        }
    }

    pub fn to_weekday(self) -> chrono::Weekday {
        match self {
            Self::Monday => chrono::Weekday::Mon,
            Self::Tuesday => chrono::Weekday::Tue,
            Self::Wednesday => chrono::Weekday::Wed,
            Self::Thursday => chrono::Weekday::Thu,
            Self::Friday => chrono::Weekday::Fri,
        }
    }
}

impl FieldValue for TutorialDay {
    const LABEL: &'static str = "TutorialDay";
    const MESSAGE_CONSTRAINTS: &'static str = TutorialDay::MESSAGE_CONSTRAINTS;

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        TutorialDay::parse(raw)
    }
}

impl fmt::Display for TutorialDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
