//! Numeric bound rules.
//!
//! [`Min`] and [`Max`] accept JSON numbers and strings holding a finite
//! number. Everything else, including empty and non-finite values, fails.

use serde_json::Value;

use crate::error::RuleError;
use crate::record::{as_finite_number, Fields};

use super::{Rule, RuleResult};

/// Requires a finite number greater than or equal to `min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Min {
    min: f64,
}

impl Min {
    pub fn new(min: f64) -> Self {
        Self { min }
    }
}

impl Rule for Min {
    fn check(&self, value: Option<&Value>, _fields: &Fields) -> RuleResult {
        match value.and_then(as_finite_number) {
            Some(n) if n >= self.min => Ok(()),
            _ => Err(RuleError::Min {
                min: self.min,
                value: value.cloned(),
            }),
        }
    }
}

/// Requires a finite number less than or equal to `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Max {
    max: f64,
}

impl Max {
    pub fn new(max: f64) -> Self {
        Self { max }
    }
}

impl Rule for Max {
    fn check(&self, value: Option<&Value>, _fields: &Fields) -> RuleResult {
        match value.and_then(as_finite_number) {
            Some(n) if n <= self.max => Ok(()),
            _ => Err(RuleError::Max {
                max: self.max,
                value: value.cloned(),
            }),
        }
    }
}

/// Creates a rule requiring a number `>= n`.
///
/// # Example
///
/// ```rust
/// use revalid::{min, Rule};
/// use serde_json::json;
///
/// let adult = min(18);
///
/// assert!(adult.check_value(&json!(18)).is_ok());
/// assert!(adult.check_value(&json!("21")).is_ok());
/// assert!(adult.check_value(&json!(17.5)).is_err());
/// assert!(adult.check_value(&json!("eighteen")).is_err());
/// ```
pub fn min(n: impl Into<f64>) -> Min {
    Min::new(n.into())
}

/// Creates a rule requiring a number `<= n`.
pub fn max(n: impl Into<f64>) -> Max {
    Max::new(n.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_min_boundaries() {
        assert!(min(5).check_value(&json!(6)).is_ok());
        assert!(min(5).check_value(&json!(5)).is_ok());
        assert_eq!(
            min(5).check_value(&json!(4)),
            Err(RuleError::Min {
                min: 5.0,
                value: Some(json!(4)),
            })
        );
    }

    #[test]
    fn test_max_boundaries() {
        assert!(max(5).check_value(&json!(4)).is_ok());
        assert!(max(5).check_value(&json!(5)).is_ok());
        assert_eq!(
            max(5).check_value(&json!(6)),
            Err(RuleError::Max {
                max: 5.0,
                value: Some(json!(6)),
            })
        );
    }

    #[test]
    fn test_numeric_strings_are_parsed() {
        assert!(min(5).check_value(&json!("10")).is_ok());
        assert!(max(5).check_value(&json!(" 4.5 ")).is_ok());
        assert!(min(5).check_value(&json!("4")).is_err());
    }

    #[test]
    fn test_non_numeric_values_fail() {
        let fields = Fields::new();
        assert!(min(0).check(None, &fields).is_err());
        assert!(min(0).check_value(&Value::Null).is_err());
        assert!(min(0).check_value(&json!("")).is_err());
        assert!(min(0).check_value(&json!("abc")).is_err());
        assert!(max(0).check_value(&json!(false)).is_err());
        assert!(max(100).check_value(&json!([1])).is_err());
        assert!(max(100).check_value(&json!("Infinity")).is_err());
    }

    #[test]
    fn test_fractional_bounds() {
        assert!(min(0.5).check_value(&json!(0.5)).is_ok());
        assert!(min(0.5).check_value(&json!(0.49)).is_err());
        assert!(max(-1.5).check_value(&json!(-2)).is_ok());
    }
}
