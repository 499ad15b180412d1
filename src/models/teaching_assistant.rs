//! Teaching assistant model.

use super::Record;
use crate::domain::{Email, Phone, TeachingAssistantName, Telegram, TutorialModule};
use std::fmt;

/// A teaching assistant of a module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeachingAssistant {
    name: TeachingAssistantName,
    module: TutorialModule,
    phone: Phone,
    email: Email,
    telegram: Telegram,
}

impl TeachingAssistant {
    pub fn new(
        name: TeachingAssistantName,
        module: TutorialModule,
        phone: Phone,
        email: Email,
        telegram: Telegram,
    ) -> Self {
        Self {
            name,
            module,
            phone,
            email,
            telegram,
        }
    }

    pub fn name(&self) -> &TeachingAssistantName {
        &self.name
    }

    pub fn module(&self) -> &TutorialModule {
        &self.module
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn telegram(&self) -> &Telegram {
        &self.telegram
    }
}

impl Record for TeachingAssistant {
    const KIND: &'static str = "teaching assistant";

    fn identity(&self) -> String {
        self.name.to_string()
    }

    fn is_same_identity(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for TeachingAssistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Module: {}; Phone: {}; Email: {}; Telegram: {}",
            self.name, self.module, self.phone, self.email, self.telegram
        )
    }
}
