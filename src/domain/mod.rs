//! Domain value objects and types.
//!
//! Every field of a student, tutorial or teaching assistant is a value
//! object that is validated at construction time and immutable afterwards.
//! Invalid data cannot be represented: the only way to obtain a value is
//! its `parse` constructor, which returns a [`ValidationError`] carrying the
//! field's constraint message on bad input.

pub mod academic;
pub mod constrained;
pub mod errors;
pub mod person;
pub mod schedule;

pub use academic::{Attendance, Grade, Participation, Tag};
pub use constrained::{Bound, Bounded, Constrained, Constraint, FieldValue};
pub use errors::ValidationError;
pub use person::{Email, Name, Phone, StudentId, TeachingAssistantName, Telegram};
pub use schedule::{TutorialDay, TutorialModule, TutorialName, TutorialTimeslot, TutorialVenue};
