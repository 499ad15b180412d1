//! Stored form of a [`TeachingAssistant`].

use super::{thaw_field, StoredText};
use crate::domain::{Email, Phone, TeachingAssistantName, Telegram, TutorialModule};
use crate::error::StorageResult;
use crate::models::TeachingAssistant;
use serde::{Deserialize, Serialize};

const RECORD: &str = "TeachingAssistant";

/// A teaching assistant as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachingAssistantRecord {
    pub name: Option<StoredText>,
    pub module: Option<StoredText>,
    pub phone: Option<StoredText>,
    pub email: Option<StoredText>,
    pub telegram: Option<StoredText>,
}

impl TeachingAssistantRecord {
    /// Rebuild the teaching assistant, checking `name, module, phone, email,
    /// telegram` in that order.
    pub fn thaw(&self) -> StorageResult<TeachingAssistant> {
        let name: TeachingAssistantName = thaw_field(RECORD, "name", self.name.as_ref())?;
        let module: TutorialModule = thaw_field(RECORD, "module", self.module.as_ref())?;
        let phone: Phone = thaw_field(RECORD, "phone", self.phone.as_ref())?;
        let email: Email = thaw_field(RECORD, "email", self.email.as_ref())?;
        let telegram: Telegram = thaw_field(RECORD, "telegram", self.telegram.as_ref())?;

        Ok(TeachingAssistant::new(name, module, phone, email, telegram))
    }
}

impl From<&TeachingAssistant> for TeachingAssistantRecord {
    fn from(ta: &TeachingAssistant) -> Self {
        Self {
            name: Some(ta.name().to_string().into()),
            module: Some(ta.module().to_string().into()),
            phone: Some(ta.phone().to_string().into()),
            email: Some(ta.email().to_string().into()),
            telegram: Some(ta.telegram().to_string().into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    fn valid_record() -> TeachingAssistantRecord {
        TeachingAssistantRecord {
            name: Some("Bernice Yu".into()),
            module: Some("CS2103T".into()),
            phone: Some("99272758".into()),
            email: Some("berniceyu@example.com".into()),
            telegram: Some("berniceyu".into()),
        }
    }

    #[test]
    fn test_round_trip() {
        let ta = valid_record().thaw().unwrap();
        assert_eq!(TeachingAssistantRecord::from(&ta), valid_record());
        assert_eq!(TeachingAssistantRecord::from(&ta).thaw().unwrap(), ta);
    }

    #[test]
    fn test_invalid_name() {
        let record = TeachingAssistantRecord {
            name: Some("  ".into()),
            ..valid_record()
        };
        match record.thaw() {
            Err(StorageError::InvalidField { record, field, .. }) => {
                assert_eq!(record, "TeachingAssistant");
                assert_eq!(field, "name");
            }
            other => panic!("Expected InvalidField, got: {:?}", other),
        }
    }
}
