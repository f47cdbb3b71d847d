//! Record-level validation.
//!
//! This module provides [`RecordValidator`], which applies one rule per named
//! field across a record and aggregates every failure into a
//! [`ValidationResult`]. Unlike a rule chain, a record validator never
//! short-circuits: every field's rule runs regardless of the others.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace};

use crate::record::Fields;
use crate::rule::{Rule, SharedRule};
use crate::validation::ValidationResult;

/// Applies one rule per named field across a whole record.
///
/// Fields are validated in the order they were added. Fields present in the
/// record but unknown to the validator are ignored; fields known to the
/// validator but missing from the record are checked as absent values.
///
/// Record validators are immutable once built, cheap to clone, and safe to
/// share between threads.
///
/// # Example
///
/// ```rust
/// use revalid::{compose, matches_field, min_length, pattern_str, RecordValidator};
/// use serde_json::json;
///
/// let password = compose![
///     min_length(8),
///     pattern_str(r"[a-zA-Z]", "containsLetters").unwrap(),
///     pattern_str(r"[0-9]", "containsNumbers").unwrap(),
/// ];
///
/// let form = RecordValidator::new()
///     .field("password", password.clone())
///     .field("passwordConfirm", compose![password, matches_field("password")]);
///
/// let record = json!({
///     "password": "GoodPassword123",
///     "passwordConfirm": "GoodPassword123"
/// });
/// let result = form.validate(record.as_object().unwrap());
/// assert!(result.is_valid);
/// assert!(result.validation_errors.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct RecordValidator {
    rules: IndexMap<String, SharedRule>,
}

impl RecordValidator {
    /// Creates a validator with no fields.
    pub fn new() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Adds the rule for a field.
    ///
    /// Adding a field that already exists replaces its rule and keeps its
    /// original position.
    pub fn field<R>(mut self, name: impl Into<String>, rule: R) -> Self
    where
        R: Rule + 'static,
    {
        self.rules.insert(name.into(), std::sync::Arc::new(rule));
        self
    }

    /// Adds an already shared rule for a field.
    pub fn field_shared(mut self, name: impl Into<String>, rule: SharedRule) -> Self {
        self.rules.insert(name.into(), rule);
        self
    }

    /// Returns the rule registered for a field.
    pub fn rule(&self, name: &str) -> Option<&SharedRule> {
        self.rules.get(name)
    }

    /// Returns the validated field names in validation order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Returns the number of validated fields.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no fields are validated.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validates a record.
    ///
    /// Every field's rule is invoked with the field's value (or `None` if
    /// absent) and the whole record. Each failure is recorded under its field
    /// name.
    pub fn validate(&self, fields: &Fields) -> ValidationResult {
        let mut errors = IndexMap::new();

        for (name, rule) in &self.rules {
            if let Err(error) = rule.check(fields.get(name), fields) {
                trace!(field = %name, kind = %error.kind(), "field failed validation");
                errors.insert(name.clone(), error);
            }
        }

        let result = ValidationResult::from_errors(errors);
        debug!(
            fields = self.rules.len(),
            failed = result.validation_errors.len(),
            valid = result.is_valid,
            "validated record"
        );
        result
    }

    /// Validates an arbitrary JSON value as a record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::NotAnObject`] if `value` is not a JSON object.
    ///
    /// ```rust
    /// use revalid::{min_length, RecordError, RecordValidator};
    /// use serde_json::json;
    ///
    /// let validator = RecordValidator::new().field("name", min_length(1));
    ///
    /// assert!(validator.validate_json(&json!({"name": "Ada"})).unwrap().is_valid);
    /// assert!(matches!(
    ///     validator.validate_json(&json!(["Ada"])),
    ///     Err(RecordError::NotAnObject { found: "array" })
    /// ));
    /// ```
    pub fn validate_json(&self, value: &Value) -> Result<ValidationResult, RecordError> {
        let fields = value.as_object().ok_or(RecordError::NotAnObject {
            found: value_type_name(value),
        })?;
        Ok(self.validate(fields))
    }

    /// Validates many independent records in parallel.
    ///
    /// Results are returned in the same order as `records`.
    #[cfg(feature = "parallel")]
    pub fn validate_many(&self, records: &[Fields]) -> Vec<ValidationResult> {
        use rayon::prelude::*;

        debug!(records = records.len(), "validating records in parallel");
        records.par_iter().map(|fields| self.validate(fields)).collect()
    }
}

impl fmt::Debug for RecordValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordValidator")
            .field("fields", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<K> FromIterator<(K, SharedRule)> for RecordValidator
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, SharedRule)>>(iter: I) -> Self {
        Self {
            rules: iter
                .into_iter()
                .map(|(name, rule)| (name.into(), rule))
                .collect(),
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<RecordValidator>();
    assert_sync::<RecordValidator>();
};

/// Builds a record validator from `(field name, rule)` pairs.
///
/// Fields are validated in the order given.
///
/// # Example
///
/// ```rust
/// use revalid::{combine_validators, compose_validators, min_length, pattern_str, shared};
/// use serde_json::json;
///
/// let validate = combine_validators([(
///     "password",
///     shared(compose_validators(vec![
///         shared(min_length(8)),
///         shared(pattern_str(r"[0-9]", "num").unwrap()),
///     ])),
/// )]);
///
/// let record = json!({"password": "short"});
/// let result = validate.validate(record.as_object().unwrap());
///
/// assert_eq!(
///     result.to_json(),
///     json!({
///         "isValid": false,
///         "validationErrors": {
///             "password": {"type": "minLength", "minLength": 8, "value": "short"}
///         }
///     })
/// );
/// ```
pub fn combine_validators<I, K>(validators: I) -> RecordValidator
where
    I: IntoIterator<Item = (K, SharedRule)>,
    K: Into<String>,
{
    validators.into_iter().collect()
}

/// Errors raised when input cannot be treated as a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The value to validate was not a JSON object.
    #[error("expected a record object, got {found}")]
    NotAnObject { found: &'static str },
}

/// Returns the JSON type name for a value.
fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
