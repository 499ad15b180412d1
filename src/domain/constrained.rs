//! Generic self-validating wrappers shared by every roster field.
//!
//! Each string-backed field is a [`Constrained`] instantiated with a rule
//! type implementing [`Constraint`]; each numeric score is a [`Bounded`]
//! instantiated with a [`Bound`]. Both wrappers can only be obtained through
//! their validating `parse` constructor, so an invalid value never exists.

use super::errors::ValidationError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Common surface of every validated field, used by the storage layer to
/// thaw fields through a single code path.
pub trait FieldValue: Sized + fmt::Display {
    /// Human-readable field label (e.g. `"Phone"`).
    const LABEL: &'static str;

    /// Fixed description of the field's format rule.
    const MESSAGE_CONSTRAINTS: &'static str;

    /// Validate and normalize a raw input.
    fn parse(raw: &str) -> Result<Self, ValidationError>;
}

/// Format rule for a string-backed field.
pub trait Constraint {
    const LABEL: &'static str;
    const MESSAGE_CONSTRAINTS: &'static str;

    /// Whether `raw` satisfies the rule.
    fn is_valid(raw: &str) -> bool;

    /// Canonical form of an input already accepted by [`Constraint::is_valid`].
    fn normalize(raw: &str) -> String {
        raw.to_string()
    }
}

/// An immutable string that satisfies the rule `C`.
///
/// Equality, ordering and hashing are over the canonical string only.
pub struct Constrained<C> {
    value: String,
    rule: PhantomData<fn() -> C>,
}

impl<C: Constraint> Constrained<C> {
    /// Validate `raw` against the rule and wrap its canonical form.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] carrying the rule's constraint message
    /// if `raw` does not satisfy the rule.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !C::is_valid(raw) {
            return Err(ValidationError::new(C::LABEL, C::MESSAGE_CONSTRAINTS));
        }
        Ok(Self::from_canonical(C::normalize(raw)))
    }

    /// Whether `raw` would be accepted by [`Constrained::parse`].
    pub fn is_valid(raw: &str) -> bool {
        C::is_valid(raw)
    }

    /// Wrap a value known to be canonical and valid.
    pub(super) fn from_canonical(value: String) -> Self {
        Self {
            value,
            rule: PhantomData,
        }
    }

    /// Get the canonical value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl<C: Constraint> FieldValue for Constrained<C> {
    const LABEL: &'static str = C::LABEL;
    const MESSAGE_CONSTRAINTS: &'static str = C::MESSAGE_CONSTRAINTS;

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Constrained::parse(raw)
    }
}

impl<C> Clone for Constrained<C> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            rule: PhantomData,
        }
    }
}

impl<C> PartialEq for Constrained<C> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<C> Eq for Constrained<C> {}

impl<C> PartialOrd for Constrained<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C> Ord for Constrained<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<C> Hash for Constrained<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<C: Constraint> fmt::Debug for Constrained<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(C::LABEL).field(&self.value).finish()
    }
}

impl<C> fmt::Display for Constrained<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Upper bound and message for a non-negative score.
pub trait Bound {
    const LABEL: &'static str;
    const MESSAGE_CONSTRAINTS: &'static str;
    const MAX: u32;
}

/// A non-negative integer no greater than `B::MAX`.
///
/// Parsed from decimal text; the canonical form has no leading zeros.
pub struct Bounded<B> {
    value: u32,
    bound: PhantomData<fn() -> B>,
}

impl<B: Bound> Bounded<B> {
    /// Parse a decimal score.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `raw` is not made of ASCII digits only
    /// or exceeds the bound.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Self::error());
        }
        let value: u32 = raw.parse().map_err(|_| Self::error())?;
        Self::new(value)
    }

    /// Wrap an already-numeric score.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `value` exceeds the bound.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value > B::MAX {
            return Err(Self::error());
        }
        Ok(Self {
            value,
            bound: PhantomData,
        })
    }

    /// The zero score.
    pub fn zero() -> Self {
        Self {
            value: 0,
            bound: PhantomData,
        }
    }

    /// Get the score.
    pub fn value(&self) -> u32 {
        self.value
    }

    fn error() -> ValidationError {
        ValidationError::new(B::LABEL, B::MESSAGE_CONSTRAINTS)
    }
}

impl<B: Bound> FieldValue for Bounded<B> {
    const LABEL: &'static str = B::LABEL;
    const MESSAGE_CONSTRAINTS: &'static str = B::MESSAGE_CONSTRAINTS;

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Bounded::parse(raw)
    }
}

impl<B: Bound> Default for Bounded<B> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<B> Clone for Bounded<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for Bounded<B> {}

impl<B> PartialEq for Bounded<B> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<B> Eq for Bounded<B> {}

impl<B> Hash for Bounded<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<B: Bound> fmt::Debug for Bounded<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(B::LABEL).field(&self.value).finish()
    }
}

impl<B> fmt::Display for Bounded<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
