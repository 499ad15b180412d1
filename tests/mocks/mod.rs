//! In-memory test doubles.

pub mod mock_roster_storage;

pub use mock_roster_storage::MockRosterStorage;
