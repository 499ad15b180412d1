//! ModQuik - a validated student and tutorial roster for teaching assistants.
//!
//! This library holds the record-keeping core of ModQuik: self-validating
//! value objects, the student, tutorial and teaching assistant entities
//! built from them, the roster that enforces uniqueness and schedule-clash
//! rules, and the JSON persistence that round-trips the roster without loss.
//!
//! # Architecture
//!
//! - **domain**: Value objects validated at construction time
//! - **models**: Student, Tutorial and TeachingAssistant entities
//! - **roster**: Cross-record invariants (duplicates, schedule clashes)
//! - **storage**: Stored record forms and the JSON file store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod roster;
pub mod storage;

pub use config::Config;
pub use domain::ValidationError;
pub use error::{ConfigError, RosterError, StorageError};
pub use models::{Record, Student, StudentEdit, TeachingAssistant, Tutorial};
pub use roster::Roster;
pub use storage::{JsonRosterStorage, RosterStorage};
