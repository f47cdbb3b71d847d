//! The verdict of validating a whole record.
//!
//! This module provides [`ValidationResult`]: overall validity plus the first
//! failure of every field whose rule failed, in validator order.

use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use stillwater::Validation;

use crate::error::{FieldError, FieldErrors, RuleError};

/// Overall validity of a record plus its per-field failures.
///
/// Only failing fields appear in `validation_errors`; `is_valid` is true iff
/// the map is empty. A fresh result is built on every validation call.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// True iff no field failed.
    pub is_valid: bool,
    /// Failing fields mapped to the descriptor their rule returned.
    pub validation_errors: IndexMap<String, RuleError>,
}

impl ValidationResult {
    /// Builds a result from the failures collected for a record.
    pub fn from_errors(validation_errors: IndexMap<String, RuleError>) -> Self {
        Self {
            is_valid: validation_errors.is_empty(),
            validation_errors,
        }
    }

    /// Returns true iff no field failed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the descriptor recorded for `field`, if it failed.
    pub fn error(&self, field: &str) -> Option<&RuleError> {
        self.validation_errors.get(field)
    }

    /// Returns the names of the failing fields in validator order.
    pub fn failed_fields(&self) -> impl Iterator<Item = &str> {
        self.validation_errors.keys().map(String::as_str)
    }

    /// Converts this result into a `stillwater::Validation`.
    ///
    /// Valid records become `Success(())`; otherwise every failing field is
    /// carried in a non-empty [`FieldErrors`].
    ///
    /// ```rust
    /// use revalid::{combine_validators, min_length, shared};
    /// use serde_json::json;
    ///
    /// let validator = combine_validators([("name", shared(min_length(1)))]);
    /// let record = json!({"name": ""});
    ///
    /// let validation = validator
    ///     .validate(record.as_object().unwrap())
    ///     .into_validation();
    /// assert!(validation.is_failure());
    /// ```
    pub fn into_validation(self) -> Validation<(), FieldErrors> {
        let errors = self
            .validation_errors
            .into_iter()
            .map(|(field, error)| FieldError::new(field, error))
            .collect();

        match FieldErrors::from_vec(errors) {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(()),
        }
    }

    /// Renders this result as `{"isValid": .., "validationErrors": {..}}`.
    pub fn to_json(&self) -> Value {
        let errors: Map<String, Value> = self
            .validation_errors
            .iter()
            .map(|(field, error)| (field.clone(), error.to_json()))
            .collect();

        json!({
            "isValid": self.is_valid,
            "validationErrors": errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failures() -> IndexMap<String, RuleError> {
        let mut errors = IndexMap::new();
        errors.insert(
            "password".to_string(),
            RuleError::MinLength {
                min_length: 8,
                value: Some(json!("short")),
            },
        );
        errors.insert(
            "role".to_string(),
            RuleError::OneOf {
                values: vec![json!("admin")],
                value: None,
            },
        );
        errors
    }

    #[test]
    fn test_empty_errors_are_valid() {
        let result = ValidationResult::from_errors(IndexMap::new());
        assert!(result.is_valid());
        assert_eq!(result.failed_fields().count(), 0);
        assert!(result.into_validation().is_success());
    }

    #[test]
    fn test_failures_are_invalid() {
        let result = ValidationResult::from_errors(failures());
        assert!(!result.is_valid());
        assert_eq!(result.failed_fields().collect::<Vec<_>>(), vec!["password", "role"]);
        assert_eq!(
            result.error("password").map(|e| e.code()),
            Some("minLength")
        );
        assert!(result.error("email").is_none());
    }

    #[test]
    fn test_into_validation_carries_every_field() {
        let validation = ValidationResult::from_errors(failures()).into_validation();
        let errors = validation.into_result().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first().field, "password");
        assert!(errors.for_field("role").is_some());
    }

    #[test]
    fn test_to_json() {
        let result = ValidationResult::from_errors(failures());
        assert_eq!(
            result.to_json(),
            json!({
                "isValid": false,
                "validationErrors": {
                    "password": {"type": "minLength", "minLength": 8, "value": "short"},
                    "role": {"type": "oneOf", "values": ["admin"]}
                }
            })
        );
    }
}
