//! Identity and contact fields of students and teaching assistants.

use super::constrained::{Constrained, Constraint};
use once_cell::sync::Lazy;
use regex::Regex;

static DISPLAY_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("Failed to compile display name regex")
});

static STUDENT_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][0-9]{7}[A-Za-z]$").expect("Failed to compile student ID regex")
});

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("Failed to compile phone regex"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[+_.-][A-Za-z0-9]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9]$",
    )
    .expect("Failed to compile email regex")
});

static TELEGRAM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@?[A-Za-z][A-Za-z0-9_]{4,31}$").expect("Failed to compile telegram regex")
});

/// Rule shared by every display name: alphanumerics and spaces, not blank.
const DISPLAY_NAME_MESSAGE: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";

/// A student's full name.
pub type Name = Constrained<NameRule>;

pub enum NameRule {}

impl Constraint for NameRule {
    const LABEL: &'static str = "Name";
    const MESSAGE_CONSTRAINTS: &'static str = DISPLAY_NAME_MESSAGE;

    fn is_valid(raw: &str) -> bool {
        DISPLAY_NAME_REGEX.is_match(raw)
    }
}

/// A teaching assistant's full name.
pub type TeachingAssistantName = Constrained<TeachingAssistantNameRule>;

pub enum TeachingAssistantNameRule {}

impl Constraint for TeachingAssistantNameRule {
    const LABEL: &'static str = "TeachingAssistantName";
    const MESSAGE_CONSTRAINTS: &'static str = DISPLAY_NAME_MESSAGE;

    fn is_valid(raw: &str) -> bool {
        DISPLAY_NAME_REGEX.is_match(raw)
    }
}

/// A student's matriculation number, e.g. `A1234567X`.
///
/// Accepted in any case and stored upper-cased.
///
/// # Example
///
/// ```
/// use modquik::domain::StudentId;
///
/// let id = StudentId::parse("a1234567b").unwrap();
/// assert_eq!(id.as_str(), "A1234567B");
/// ```
pub type StudentId = Constrained<StudentIdRule>;

pub enum StudentIdRule {}

impl Constraint for StudentIdRule {
    const LABEL: &'static str = "ID";
    const MESSAGE_CONSTRAINTS: &'static str =
        "ID should follow the format AXXXXXXXY, where the X is a number, and Y is an alphabet";

    fn is_valid(raw: &str) -> bool {
        STUDENT_ID_REGEX.is_match(raw)
    }

    fn normalize(raw: &str) -> String {
        raw.to_ascii_uppercase()
    }
}

/// A phone number made only of digits.
pub type Phone = Constrained<PhoneRule>;

pub enum PhoneRule {}

impl Constraint for PhoneRule {
    const LABEL: &'static str = "Phone";
    const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    fn is_valid(raw: &str) -> bool {
        PHONE_REGEX.is_match(raw)
    }
}

/// An email address of the form `local-part@domain`.
pub type Email = Constrained<EmailRule>;

pub enum EmailRule {}

impl Constraint for EmailRule {
    const LABEL: &'static str = "Email";
    const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
        and adhere to the following constraints:\n\
        1. The local-part should only contain alphanumeric characters and these special \
        characters, excluding the parentheses, (+_.-). The local-part may not start or end \
        with any special characters.\n\
        2. This is followed by a '@' and then a domain name. The domain name is made up of \
        domain labels separated by periods.\n\
        The domain name must:\n    \
        - end with a domain label at least 2 characters long\n    \
        - have each domain label start and end with alphanumeric characters\n    \
        - have each domain label consist of alphanumeric characters, separated only by \
        hyphens, if any.";

    fn is_valid(raw: &str) -> bool {
        EMAIL_REGEX.is_match(raw)
    }
}

/// A Telegram username.
///
/// A leading `@` is accepted and dropped, so `@alexyeoh` and `alexyeoh`
/// are the same handle.
pub type Telegram = Constrained<TelegramRule>;

pub enum TelegramRule {}

impl Constraint for TelegramRule {
    const LABEL: &'static str = "Telegram";
    const MESSAGE_CONSTRAINTS: &'static str = "Telegram handles should start with a letter, \
        contain only letters, digits and underscores, be 5 to 32 characters long, \
        and may be prefixed with '@'";

    fn is_valid(raw: &str) -> bool {
        TELEGRAM_REGEX.is_match(raw)
    }

    fn normalize(raw: &str) -> String {
        raw.strip_prefix('@').unwrap_or(raw).to_string()
    }
}
