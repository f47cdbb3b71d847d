//! Error descriptors produced by failing rules.
//!
//! This module provides [`RuleError`], a tagged descriptor with one variant
//! per rule kind, and [`RuleKind`], the closed set of tags callers branch on
//! when rendering messages.

use std::fmt::{self, Display};

use serde_json::{json, Map, Value};

use crate::record::{describe, describe_list};

/// The kind of rule that produced a [`RuleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    MinLength,
    MaxLength,
    Min,
    Max,
    Pattern,
    EqualTo,
    OneOf,
    MatchesField,
    /// A caller-defined rule built with [`custom`](crate::custom).
    Custom,
}

impl RuleKind {
    /// Returns the descriptor tag for this kind (e.g. `minLength`).
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::MinLength => "minLength",
            RuleKind::MaxLength => "maxLength",
            RuleKind::Min => "min",
            RuleKind::Max => "max",
            RuleKind::Pattern => "pattern",
            RuleKind::EqualTo => "equalTo",
            RuleKind::OneOf => "oneOf",
            RuleKind::MatchesField => "matchesField",
            RuleKind::Custom => "custom",
        }
    }
}

impl Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured description of why a value failed a rule.
///
/// Every variant carries the offending `value` (`None` when the field was
/// absent from the record) plus the parameters of the rule that failed.
/// The engine never interprets descriptors; it only distinguishes failure
/// from success. The `Display` output is a plain English fallback, leaving
/// real presentation to the caller.
///
/// # Example
///
/// ```rust
/// use revalid::{min_length, Rule, RuleError, RuleKind};
/// use serde_json::json;
///
/// let error = min_length(8).check_value(&json!("1234567")).unwrap_err();
///
/// assert_eq!(error.kind(), RuleKind::MinLength);
/// assert_eq!(
///     error,
///     RuleError::MinLength { min_length: 8, value: Some(json!("1234567")) }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleError {
    #[error("length must be at least {min_length}, got {}", describe(.value))]
    MinLength {
        min_length: usize,
        value: Option<Value>,
    },

    #[error("length must be at most {max_length}, got {}", describe(.value))]
    MaxLength {
        max_length: usize,
        value: Option<Value>,
    },

    #[error("must be a number >= {min}, got {}", describe(.value))]
    Min { min: f64, value: Option<Value> },

    #[error("must be a number <= {max}, got {}", describe(.value))]
    Max { max: f64, value: Option<Value> },

    #[error("must match {label} ('{pattern}'), got {}", describe(.value))]
    Pattern {
        label: String,
        pattern: String,
        value: Option<Value>,
    },

    #[error("must equal {other}, got {}", describe(.value))]
    EqualTo { other: Value, value: Option<Value> },

    #[error("must be one of {}, got {}", describe_list(.values), describe(.value))]
    OneOf {
        values: Vec<Value>,
        value: Option<Value>,
    },

    #[error("must match field '{field_name}' ({}), got {}", describe(.other), describe(.value))]
    MatchesField {
        field_name: String,
        value: Option<Value>,
        other: Option<Value>,
    },

    #[error("{message}")]
    Custom {
        code: String,
        message: String,
        value: Option<Value>,
    },
}

impl RuleError {
    /// Creates a descriptor for a caller-defined rule.
    pub fn custom(
        code: impl Into<String>,
        message: impl Into<String>,
        value: Option<&Value>,
    ) -> Self {
        RuleError::Custom {
            code: code.into(),
            message: message.into(),
            value: value.cloned(),
        }
    }

    /// Returns the kind of rule that failed.
    pub fn kind(&self) -> RuleKind {
        match self {
            RuleError::MinLength { .. } => RuleKind::MinLength,
            RuleError::MaxLength { .. } => RuleKind::MaxLength,
            RuleError::Min { .. } => RuleKind::Min,
            RuleError::Max { .. } => RuleKind::Max,
            RuleError::Pattern { .. } => RuleKind::Pattern,
            RuleError::EqualTo { .. } => RuleKind::EqualTo,
            RuleError::OneOf { .. } => RuleKind::OneOf,
            RuleError::MatchesField { .. } => RuleKind::MatchesField,
            RuleError::Custom { .. } => RuleKind::Custom,
        }
    }

    /// Returns the descriptor `type` tag.
    ///
    /// For built-in rules this is [`RuleKind::as_str`]; custom rules report
    /// their own code.
    pub fn code(&self) -> &str {
        match self {
            RuleError::Custom { code, .. } => code.as_str(),
            other => other.kind().as_str(),
        }
    }

    /// Returns the value that failed, or `None` if the field was absent.
    pub fn value(&self) -> Option<&Value> {
        match self {
            RuleError::MinLength { value, .. }
            | RuleError::MaxLength { value, .. }
            | RuleError::Min { value, .. }
            | RuleError::Max { value, .. }
            | RuleError::Pattern { value, .. }
            | RuleError::EqualTo { value, .. }
            | RuleError::OneOf { value, .. }
            | RuleError::MatchesField { value, .. }
            | RuleError::Custom { value, .. } => value.as_ref(),
        }
    }

    /// Renders this descriptor as a JSON object.
    ///
    /// The object carries a `type` tag, the rule parameters in camelCase, and
    /// the offending `value`. Absent values are left out.
    ///
    /// ```rust
    /// use revalid::{matches_field, Rule};
    /// use serde_json::json;
    ///
    /// let fields = json!({"password": "X", "confirm": "Y"});
    /// let fields = fields.as_object().unwrap();
    ///
    /// let error = matches_field("password")
    ///     .check(fields.get("confirm"), fields)
    ///     .unwrap_err();
    ///
    /// assert_eq!(error.to_json(), json!({
    ///     "type": "matchesField",
    ///     "fieldName": "password",
    ///     "value": "Y",
    ///     "other": "X"
    /// }));
    /// ```
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        out.insert("type".to_string(), json!(self.code()));

        match self {
            RuleError::MinLength { min_length, .. } => {
                out.insert("minLength".to_string(), json!(min_length));
            }
            RuleError::MaxLength { max_length, .. } => {
                out.insert("maxLength".to_string(), json!(max_length));
            }
            RuleError::Min { min, .. } => {
                out.insert("min".to_string(), bound_json(*min));
            }
            RuleError::Max { max, .. } => {
                out.insert("max".to_string(), bound_json(*max));
            }
            RuleError::Pattern { label, pattern, .. } => {
                out.insert("label".to_string(), json!(label));
                out.insert("pattern".to_string(), json!(pattern));
            }
            RuleError::EqualTo { other, .. } => {
                out.insert("other".to_string(), other.clone());
            }
            RuleError::OneOf { values, .. } => {
                out.insert("values".to_string(), Value::Array(values.clone()));
            }
            RuleError::MatchesField {
                field_name, other, ..
            } => {
                out.insert("fieldName".to_string(), json!(field_name));
                if let Some(other) = other {
                    out.insert("other".to_string(), other.clone());
                }
            }
            RuleError::Custom { message, .. } => {
                out.insert("message".to_string(), json!(message));
            }
        }

        if let Some(value) = self.value() {
            out.insert("value".to_string(), value.clone());
        }

        Value::Object(out)
    }
}

/// Renders a numeric bound, keeping whole numbers integral (`18`, not `18.0`).
fn bound_json(bound: f64) -> Value {
    // 2^53: every whole f64 below this converts to i64 exactly.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if bound.fract() == 0.0 && bound.abs() <= MAX_EXACT {
        json!(bound as i64)
    } else {
        json!(bound)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<RuleError>();
    assert_sync::<RuleError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(RuleKind::MinLength.as_str(), "minLength");
        assert_eq!(RuleKind::MatchesField.to_string(), "matchesField");
        assert_eq!(RuleKind::OneOf.as_str(), "oneOf");
    }

    #[test]
    fn test_custom_code_overrides_tag() {
        let error = RuleError::custom("even", "must be even", Some(&json!(3)));
        assert_eq!(error.kind(), RuleKind::Custom);
        assert_eq!(error.code(), "even");
        assert_eq!(error.value(), Some(&json!(3)));
        assert_eq!(error.to_string(), "must be even");
    }

    #[test]
    fn test_min_length_json_shape() {
        let error = RuleError::MinLength {
            min_length: 8,
            value: Some(json!("short")),
        };
        assert_eq!(
            error.to_json(),
            json!({"type": "minLength", "minLength": 8, "value": "short"})
        );
    }

    #[test]
    fn test_numeric_bounds_json_shape() {
        let error = RuleError::Min {
            min: 18.0,
            value: Some(json!(12)),
        };
        assert_eq!(
            error.to_json(),
            json!({"type": "min", "min": 18, "value": 12})
        );

        let error = RuleError::Max {
            max: -3.0,
            value: Some(json!("7")),
        };
        assert_eq!(
            error.to_json(),
            json!({"type": "max", "max": -3, "value": "7"})
        );

        let error = RuleError::Max {
            max: 2.5,
            value: None,
        };
        assert_eq!(error.to_json(), json!({"type": "max", "max": 2.5}));
    }

    #[test]
    fn test_absent_value_is_omitted_from_json() {
        let error = RuleError::MaxLength {
            max_length: 3,
            value: None,
        };
        assert_eq!(error.to_json(), json!({"type": "maxLength", "maxLength": 3}));
    }

    #[test]
    fn test_pattern_json_carries_label_and_source() {
        let error = RuleError::Pattern {
            label: "containsNumbers".to_string(),
            pattern: "[0-9]".to_string(),
            value: Some(json!("abc")),
        };
        assert_eq!(
            error.to_json(),
            json!({
                "type": "pattern",
                "label": "containsNumbers",
                "pattern": "[0-9]",
                "value": "abc"
            })
        );
    }

    #[test]
    fn test_display_messages() {
        let error = RuleError::MinLength {
            min_length: 8,
            value: Some(json!("short")),
        };
        assert_eq!(error.to_string(), "length must be at least 8, got \"short\"");

        let error = RuleError::OneOf {
            values: vec![json!(1), json!(2)],
            value: None,
        };
        assert_eq!(error.to_string(), "must be one of [1,2], got nothing");

        let error = RuleError::MatchesField {
            field_name: "password".to_string(),
            value: Some(json!("b")),
            other: Some(json!("a")),
        };
        assert_eq!(
            error.to_string(),
            "must match field 'password' (\"a\"), got \"b\""
        );
    }
}
