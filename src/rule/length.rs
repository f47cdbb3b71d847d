//! Length rules.
//!
//! This module provides [`MinLength`] and [`MaxLength`]. Strings are measured
//! in characters (Unicode scalar values) and arrays in elements. This differs
//! from a UTF-16 code-unit count for text outside the Basic Multilingual
//! Plane: `"🎉🎊"` has length 2 here, not 4. Empty values fail both rules; wrap
//! them with [`optional`](crate::optional) to skip empty fields instead.

use serde_json::Value;

use crate::error::RuleError;
use crate::record::{is_empty_value, value_length, Fields};

use super::{Rule, RuleResult};

/// Requires a non-empty value of at least `min_length` characters or elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLength {
    min_length: usize,
}

impl MinLength {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Rule for MinLength {
    fn check(&self, value: Option<&Value>, _fields: &Fields) -> RuleResult {
        match measure(value) {
            Some(len) if len >= self.min_length => Ok(()),
            _ => Err(RuleError::MinLength {
                min_length: self.min_length,
                value: value.cloned(),
            }),
        }
    }
}

/// Requires a non-empty value of at most `max_length` characters or elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLength {
    max_length: usize,
}

impl MaxLength {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl Rule for MaxLength {
    fn check(&self, value: Option<&Value>, _fields: &Fields) -> RuleResult {
        match measure(value) {
            Some(len) if len <= self.max_length => Ok(()),
            _ => Err(RuleError::MaxLength {
                max_length: self.max_length,
                value: value.cloned(),
            }),
        }
    }
}

/// Length of a present, non-empty value that has one.
fn measure(value: Option<&Value>) -> Option<usize> {
    if is_empty_value(value) {
        return None;
    }
    value.and_then(value_length)
}

/// Creates a rule requiring at least `n` characters (or array elements).
///
/// Characters are Unicode scalar values, not UTF-16 code units, so each emoji
/// counts once.
///
/// # Example
///
/// ```rust
/// use revalid::{min_length, Rule, RuleError};
/// use serde_json::json;
///
/// assert!(min_length(8).check_value(&json!("12345678")).is_ok());
/// assert_eq!(
///     min_length(8).check_value(&json!("1234567")),
///     Err(RuleError::MinLength { min_length: 8, value: Some(json!("1234567")) })
/// );
/// ```
pub fn min_length(n: usize) -> MinLength {
    MinLength::new(n)
}

/// Creates a rule allowing at most `n` characters (or array elements).
///
/// Characters are counted as in [`min_length`]: one per Unicode scalar value.
pub fn max_length(n: usize) -> MaxLength {
    MaxLength::new(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn min_err(n: usize, value: Option<Value>) -> RuleResult {
        Err(RuleError::MinLength {
            min_length: n,
            value,
        })
    }

    #[test]
    fn test_min_length_boundaries() {
        assert!(min_length(5).check_value(&json!("123456")).is_ok());
        assert!(min_length(5).check_value(&json!("12345")).is_ok());
        assert_eq!(
            min_length(5).check_value(&json!("1234")),
            min_err(5, Some(json!("1234")))
        );
    }

    #[test]
    fn test_max_length_boundaries() {
        assert!(max_length(5).check_value(&json!("1234")).is_ok());
        assert!(max_length(5).check_value(&json!("12345")).is_ok());
        assert_eq!(
            max_length(5).check_value(&json!("123456")),
            Err(RuleError::MaxLength {
                max_length: 5,
                value: Some(json!("123456")),
            })
        );
    }

    #[test]
    fn test_empty_values_fail_even_with_zero_minimum() {
        let fields = Fields::new();
        assert_eq!(min_length(0).check(None, &fields), min_err(0, None));
        assert_eq!(
            min_length(0).check_value(&json!("")),
            min_err(0, Some(json!("")))
        );
        assert_eq!(
            min_length(0).check_value(&Value::Null),
            min_err(0, Some(Value::Null))
        );
        assert!(max_length(10).check(None, &fields).is_err());
        assert!(max_length(10).check_value(&json!("")).is_err());
    }

    #[test]
    fn test_values_without_length_fail() {
        assert!(min_length(1).check_value(&json!(12345)).is_err());
        assert!(min_length(1).check_value(&json!(true)).is_err());
        assert!(max_length(10).check_value(&json!({"a": 1})).is_err());
    }

    #[test]
    fn test_arrays_use_element_count() {
        assert!(min_length(2).check_value(&json!([1, 2])).is_ok());
        assert!(min_length(3).check_value(&json!([1, 2])).is_err());
        assert!(min_length(0).check_value(&json!([])).is_ok());
        assert!(max_length(1).check_value(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_unicode_counts_characters() {
        assert!(min_length(3).check_value(&json!("日本語")).is_ok());
        assert!(max_length(3).check_value(&json!("日本語")).is_ok());
        assert!(min_length(3).check_value(&json!("🎉🎊")).is_err());
    }

    #[test]
    fn test_astral_characters_count_once() {
        assert!(max_length(2).check_value(&json!("🎉🎊")).is_ok());
        assert!(min_length(2).check_value(&json!("🎉🎊")).is_ok());
        assert!(max_length(1).check_value(&json!("🎉🎊")).is_err());
    }

    #[test]
    fn test_ignores_other_fields() {
        let record = json!({"name": "a much longer value"});
        let fields = record.as_object().unwrap();
        assert!(min_length(3).check(Some(&json!("ab")), fields).is_err());
    }
}
