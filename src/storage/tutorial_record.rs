//! Stored form of a [`Tutorial`].

use super::{thaw_field, StoredText};
use crate::domain::{TutorialDay, TutorialModule, TutorialName, TutorialTimeslot, TutorialVenue};
use crate::error::StorageResult;
use crate::models::Tutorial;
use serde::{Deserialize, Serialize};

const RECORD: &str = "Tutorial";

/// A tutorial as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialRecord {
    pub name: Option<StoredText>,
    pub module: Option<StoredText>,
    pub venue: Option<StoredText>,
    pub timeslot: Option<StoredText>,
    pub day: Option<StoredText>,
}

impl TutorialRecord {
    /// Rebuild the tutorial, checking `name, module, venue, timeslot, day`
    /// in that order.
    pub fn thaw(&self) -> StorageResult<Tutorial> {
        let name: TutorialName = thaw_field(RECORD, "name", self.name.as_ref())?;
        let module: TutorialModule = thaw_field(RECORD, "module", self.module.as_ref())?;
        let venue: TutorialVenue = thaw_field(RECORD, "venue", self.venue.as_ref())?;
        let timeslot: TutorialTimeslot =
            thaw_field(RECORD, "timeslot", self.timeslot.as_ref())?;
        let day: TutorialDay = thaw_field(RECORD, "day", self.day.as_ref())?;

        Ok(Tutorial::new(name, module, venue, timeslot, day))
    }
}

impl From<&Tutorial> for TutorialRecord {
    fn from(tutorial: &Tutorial) -> Self {
        Self {
            name: Some(tutorial.name().to_string().into()),
            module: Some(tutorial.module().to_string().into()),
            venue: Some(tutorial.venue().to_string().into()),
            timeslot: Some(tutorial.timeslot().to_string().into()),
            day: Some(tutorial.day().to_string().into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    fn valid_record() -> TutorialRecord {
        TutorialRecord {
            name: Some("T23".into()),
            module: Some("cs2103t".into()),
            venue: Some("COM1-0203".into()),
            timeslot: Some("9:00-11:00".into()),
            day: Some("monday".into()),
        }
    }

    #[test]
    fn test_round_trip_is_canonical() {
        let tutorial = valid_record().thaw().unwrap();
        let frozen = TutorialRecord::from(&tutorial);
        assert_eq!(frozen.module.as_deref(), Some("CS2103T"));
        assert_eq!(frozen.timeslot.as_deref(), Some("09:00-11:00"));
        assert_eq!(frozen.day.as_deref(), Some("MON"));
        assert_eq!(frozen.thaw().unwrap(), tutorial);
    }

    #[test]
    fn test_field_order() {
        let record = TutorialRecord {
            venue: None,
            day: None,
            ..valid_record()
        };
        assert!(matches!(
            record.thaw(),
            Err(StorageError::MissingField { field: "venue", .. })
        ));

        let record = TutorialRecord {
            timeslot: Some("11:00-09:00".into()),
            day: Some("SAT".into()),
            ..valid_record()
        };
        assert!(matches!(
            record.thaw(),
            Err(StorageError::InvalidField { field: "timeslot", .. })
        ));
    }

    #[test]
    fn test_missing_day() {
        let record = TutorialRecord {
            day: None,
            ..valid_record()
        };
        let err = record.thaw().unwrap_err();
        assert_eq!(err.to_string(), "Tutorial's day field is missing!");
    }
}
