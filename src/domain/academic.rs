//! Academic standing of a student: attendance, participation, grade and tags.

use super::constrained::{Bound, Bounded, Constrained, Constraint, FieldValue};
use super::errors::ValidationError;
use std::fmt;

/// Number of tutorial sessions a student attended.
pub type Attendance = Bounded<AttendanceBound>;

pub enum AttendanceBound {}

impl Bound for AttendanceBound {
    const LABEL: &'static str = "Attendance";
    const MESSAGE_CONSTRAINTS: &'static str =
        "Attendance should be a non-negative whole number no greater than 99";
    const MAX: u32 = 99;
}

/// Accumulated participation points of a student.
pub type Participation = Bounded<ParticipationBound>;

pub enum ParticipationBound {}

impl Bound for ParticipationBound {
    const LABEL: &'static str = "Participation";
    const MESSAGE_CONSTRAINTS: &'static str =
        "Participation should be a non-negative whole number no greater than 999";
    const MAX: u32 = 999;
}

/// Final letter grade, or [`Grade::Pending`] until one is awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
    #[default]
    Pending,
}

impl Grade {
    /// Stored and displayed form of [`Grade::Pending`].
    pub const PENDING: &'static str = "PENDING...";

    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Grade should be one of A, B, C, D, F, or PENDING... if no grade has been awarded yet";

    /// Parse a grade letter (any case) or the pending sentinel.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for anything else, including
    /// surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "F" => Ok(Self::F),
            Self::PENDING => Ok(Self::Pending),
            _ => Err(ValidationError::new(
                <Self as FieldValue>::LABEL,
                Self::MESSAGE_CONSTRAINTS,
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
            Self::Pending => Self::PENDING,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl FieldValue for Grade {
    const LABEL: &'static str = "Grade";
    const MESSAGE_CONSTRAINTS: &'static str = Grade::MESSAGE_CONSTRAINTS;

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Grade::parse(raw)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A short alphanumeric label attached to a student.
pub type Tag = Constrained<TagRule>;

pub enum TagRule {}

impl Constraint for TagRule {
    const LABEL: &'static str = "Tag";
    const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    fn is_valid(raw: &str) -> bool {
        !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric())
    }
}
