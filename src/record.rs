//! Records and the value predicates shared by every rule.
//!
//! A record is the full set of named values validated together. Rules receive
//! the value under test as `Option<&Value>`: `None` means the field is absent
//! from the record, which is distinct from an explicit JSON `null`.

use serde_json::{Map, Value};

/// The full set of named values being validated together.
///
/// Records are borrowed into every rule call so cross-field rules such as
/// [`matches_field`](crate::matches_field) can read sibling values.
pub type Fields = Map<String, Value>;

/// Returns true if a value counts as empty.
///
/// A value is empty when it is absent, JSON `null`, or the empty string.
/// Nothing else is empty: `0`, `false`, `[]` and `{}` are all present values.
///
/// # Example
///
/// ```rust
/// use revalid::record::is_empty_value;
/// use serde_json::json;
///
/// assert!(is_empty_value(None));
/// assert!(is_empty_value(Some(&json!(null))));
/// assert!(is_empty_value(Some(&json!(""))));
/// assert!(!is_empty_value(Some(&json!(0))));
/// assert!(!is_empty_value(Some(&json!([]))));
/// ```
pub fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Returns the length of a value that has one.
///
/// Strings are measured in characters (Unicode scalar values), arrays in
/// elements. Every other value has no length.
pub fn value_length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// Reads a value as a finite number.
///
/// JSON numbers are read directly. Strings are trimmed and parsed as floats.
/// Non-finite results (`inf`, `NaN`) and every other value yield `None`.
pub fn as_finite_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };

    number.is_finite().then_some(number)
}

/// Returns the text a pattern is matched against, if the value has one.
///
/// Strings are used as-is; numbers and booleans use their JSON rendering.
pub fn pattern_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Compares two values the way the equality rules do.
///
/// Numbers compare by numeric value, so `1`, `1.0` and `-0.0 == 0` all hold.
/// Arrays and objects compare element by element with the same rule. Every
/// other pairing is plain JSON equality: no string/number coercion.
///
/// ```rust
/// use revalid::record::values_equal;
/// use serde_json::json;
///
/// assert!(values_equal(&json!(2), &json!(2.0)));
/// assert!(values_equal(&json!({"a": [1]}), &json!({"a": [1.0]})));
/// assert!(!values_equal(&json!(1), &json!("1")));
/// ```
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}

/// Renders an optional value for human-readable messages.
pub(crate) fn describe(value: &Option<Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "nothing".to_string(),
    }
}

/// Renders a list of values for human-readable messages.
pub(crate) fn describe_list(values: &[Value]) -> String {
    Value::Array(values.to_vec()).to_string()
}
