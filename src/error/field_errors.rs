//! Per-field failures collected across a record.
//!
//! This module provides [`FieldError`] for one failing field and
//! [`FieldErrors`] for the non-empty set of failures a record produced.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use super::rule_error::{RuleError, RuleKind};

/// A failing field together with the descriptor its rule returned.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// The name of the field that failed.
    pub field: String,
    /// The first failure reported by the field's rule.
    pub error: RuleError,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(field: impl Into<String>, error: RuleError) -> Self {
        Self {
            field: field.into(),
            error,
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl std::error::Error for FieldError {}

/// A non-empty collection of field failures.
///
/// `FieldErrors` wraps a `NonEmptyVec<FieldError>` so it can serve as the
/// failure side of `stillwater::Validation`. Failures from independent
/// records or validators can be merged with `Semigroup::combine`:
///
/// ```rust
/// use revalid::{FieldError, FieldErrors, RuleError};
/// use serde_json::json;
/// use stillwater::prelude::*;
///
/// let a = FieldErrors::single(FieldError::new(
///     "name",
///     RuleError::MinLength { min_length: 1, value: Some(json!("")) },
/// ));
/// let b = FieldErrors::single(FieldError::new(
///     "age",
///     RuleError::Min { min: 18.0, value: Some(json!(12)) },
/// ));
///
/// let combined = a.combine(b);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldErrors(NonEmptyVec<FieldError>);

impl FieldErrors {
    /// Creates a `FieldErrors` containing a single failure.
    pub fn single(error: FieldError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `FieldErrors` from a vec, or `None` if the vec is empty.
    pub fn from_vec(errors: Vec<FieldError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let head = NonEmptyVec::singleton(errors.next()?);
        Some(Self(errors.fold(head, |acc, error| {
            acc.combine(NonEmptyVec::singleton(error))
        })))
    }

    /// Returns the number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the failures.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Returns the first failure.
    pub fn first(&self) -> &FieldError {
        self.0.head()
    }

    /// Returns the descriptor recorded for a field, if it failed.
    pub fn for_field(&self, field: &str) -> Option<&RuleError> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.error)
    }

    /// Returns all failures produced by rules of the given kind.
    pub fn with_kind(&self, kind: RuleKind) -> Vec<&FieldError> {
        self.0.iter().filter(|e| e.error.kind() == kind).collect()
    }

    /// Converts this collection into a `Vec<FieldError>`.
    pub fn into_vec(self) -> Vec<FieldError> {
        self.0.into_vec()
    }
}

impl Semigroup for FieldErrors {
    fn combine(self, other: Self) -> Self {
        FieldErrors(self.0.combine(other.0))
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed for {} field(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = Box<dyn Iterator<Item = &'a FieldError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<FieldErrors>();
    assert_sync::<FieldErrors>();
};
