//! A list of records that keeps identities unique.

use crate::error::{RosterError, RosterResult};
use crate::models::Record;

/// Ordered list of records in which no two records share an identity and
/// every pair passes [`Record::check_compatible`].
///
/// Every mutation checks first and mutates after, so a rejected insert,
/// edit or removal leaves the list unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueRecordList<T> {
    records: Vec<T>,
}

impl<T> Default for UniqueRecordList<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> UniqueRecordList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a record with the same identity is present.
    pub fn contains(&self, record: &T) -> bool {
        self.records.iter().any(|r| r.is_same_identity(record))
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// `DuplicateRecord` if a record with the same identity exists, or
    /// whatever [`Record::check_compatible`] reports against an existing
    /// record (e.g. `ScheduleClash` for tutorials).
    pub fn add(&mut self, record: T) -> RosterResult<()> {
        self.check_against_others(&record, None)?;
        tracing::debug!(kind = T::KIND, identity = %record.identity(), "Adding record");
        self.records.push(record);
        Ok(())
    }

    /// Replace `target` with `edited`, keeping its position.
    ///
    /// The checks of [`UniqueRecordList::add`] run against every record
    /// except `target`, so a record may be edited back to itself.
    ///
    /// # Errors
    ///
    /// `RecordNotFound` if `target` is absent; otherwise as for `add`.
    pub fn set(&mut self, target: &T, edited: T) -> RosterResult<()> {
        let index = self.position(target)?;
        self.check_against_others(&edited, Some(index))?;
        tracing::debug!(
            kind = T::KIND,
            from = %target.identity(),
            to = %edited.identity(),
            "Replacing record"
        );
        self.records[index] = edited;
        Ok(())
    }

    /// Remove the record equal to `target`.
    ///
    /// # Errors
    ///
    /// `RecordNotFound` if no record is fully equal to `target`.
    pub fn remove(&mut self, target: &T) -> RosterResult<T> {
        let index = self.position(target)?;
        tracing::debug!(kind = T::KIND, identity = %target.identity(), "Removing record");
        Ok(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    fn position(&self, target: &T) -> RosterResult<usize> {
        self.records
            .iter()
            .position(|r| r == target)
            .ok_or_else(|| RosterError::RecordNotFound {
                kind: T::KIND,
                identity: target.identity(),
            })
    }

    fn check_against_others(&self, candidate: &T, skip: Option<usize>) -> RosterResult<()> {
        let others = || {
            self.records
                .iter()
                .enumerate()
                .filter(move |(i, _)| Some(*i) != skip)
                .map(|(_, r)| r)
        };

        if others().any(|r| r.is_same_identity(candidate)) {
            tracing::warn!(kind = T::KIND, identity = %candidate.identity(), "Duplicate record rejected");
            return Err(RosterError::DuplicateRecord {
                kind: T::KIND,
                identity: candidate.identity(),
            });
        }

        for existing in others() {
            if let Err(e) = candidate.check_compatible(existing) {
                tracing::warn!(kind = T::KIND, identity = %candidate.identity(), "Record rejected: {}", e);
                return Err(e);
            }
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a UniqueRecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
