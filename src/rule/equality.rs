//! Equality rules: fixed values, allowed sets, and sibling fields.
//!
//! Comparisons use [`values_equal`]: numbers compare by value (`1` equals
//! `1.0`), everything else by JSON equality with no coercion (`1` and `"1"`
//! differ).

use serde_json::Value;

use crate::error::RuleError;
use crate::record::{values_equal, Fields};

use super::{Rule, RuleResult};

/// Requires the value to equal a fixed value.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualTo {
    other: Value,
}

impl EqualTo {
    pub fn new(other: Value) -> Self {
        Self { other }
    }
}

impl Rule for EqualTo {
    fn check(&self, value: Option<&Value>, _fields: &Fields) -> RuleResult {
        if value.is_some_and(|v| values_equal(v, &self.other)) {
            Ok(())
        } else {
            Err(RuleError::EqualTo {
                other: self.other.clone(),
                value: value.cloned(),
            })
        }
    }
}

/// Requires the value to be a member of an allowed set.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf {
    values: Vec<Value>,
}

impl OneOf {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl Rule for OneOf {
    fn check(&self, value: Option<&Value>, _fields: &Fields) -> RuleResult {
        match value {
            Some(v) if self.values.iter().any(|allowed| values_equal(v, allowed)) => Ok(()),
            _ => Err(RuleError::OneOf {
                values: self.values.clone(),
                value: value.cloned(),
            }),
        }
    }
}

/// Requires the value to equal another field of the same record.
///
/// Two absent fields are considered equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchesField {
    field_name: String,
}

impl MatchesField {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }

    /// Returns the name of the field compared against.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }
}

impl Rule for MatchesField {
    fn check(&self, value: Option<&Value>, fields: &Fields) -> RuleResult {
        let other = fields.get(&self.field_name);
        let matches = match (value, other) {
            (Some(v), Some(o)) => values_equal(v, o),
            (None, None) => true,
            _ => false,
        };
        if matches {
            Ok(())
        } else {
            Err(RuleError::MatchesField {
                field_name: self.field_name.clone(),
                value: value.cloned(),
                other: other.cloned(),
            })
        }
    }
}

/// Creates a rule requiring the value to equal `other`.
pub fn equal_to(other: impl Into<Value>) -> EqualTo {
    EqualTo::new(other.into())
}

/// Creates a rule requiring the value to be one of `values`.
///
/// # Example
///
/// ```rust
/// use revalid::{one_of, Rule, RuleError};
/// use serde_json::json;
///
/// let small = one_of([1, 2, 3]);
///
/// assert!(small.check_value(&json!(2)).is_ok());
/// assert_eq!(
///     small.check_value(&json!(5)),
///     Err(RuleError::OneOf {
///         values: vec![json!(1), json!(2), json!(3)],
///         value: Some(json!(5)),
///     })
/// );
/// ```
pub fn one_of<I, V>(values: I) -> OneOf
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    OneOf::new(values.into_iter().map(Into::into).collect())
}

/// Creates a rule requiring the value to equal the record's `field_name` field.
///
/// # Example
///
/// ```rust
/// use revalid::{matches_field, Rule, RuleError};
/// use serde_json::json;
///
/// let record = json!({"password": "X", "confirm": "Y"});
/// let fields = record.as_object().unwrap();
///
/// assert_eq!(
///     matches_field("password").check(fields.get("confirm"), fields),
///     Err(RuleError::MatchesField {
///         field_name: "password".to_string(),
///         value: Some(json!("Y")),
///         other: Some(json!("X")),
///     })
/// );
/// ```
pub fn matches_field(field_name: impl Into<String>) -> MatchesField {
    MatchesField::new(field_name)
}
