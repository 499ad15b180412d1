//! Domain validation errors.

use std::fmt;

/// A raw field value that does not satisfy its format rule.
///
/// Carries the label of the field that rejected the input and the fixed,
/// user-displayable description of that field's constraints. The message is
/// the same whether the value came from a command or from a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    field: &'static str,
    message: &'static str,
}

impl ValidationError {
    /// Create a validation error for the given field label.
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }

    /// Label of the field that rejected the input (e.g. `"Phone"`).
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The field's constraint message.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_constraint_message() {
        let err = ValidationError::new("Phone", "Phone numbers should only contain numbers");
        assert_eq!(err.to_string(), "Phone numbers should only contain numbers");
        assert_eq!(err.field(), "Phone");
    }
}
