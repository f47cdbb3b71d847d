//! Macros for building rule chains with minimal boilerplate.

/// Chains rules left to right with first-failure-wins semantics.
///
/// `compose![a, b, c]` is shorthand for
/// `Compose::new().then(a).then(b).then(c)`. With no arguments it yields an
/// empty chain that passes every value.
///
/// ```rust
/// use revalid::{compose, max_length, min_length, Rule};
/// use serde_json::json;
///
/// let username = compose![min_length(3), max_length(16)];
///
/// assert!(username.check_value(&json!("alice")).is_ok());
/// assert!(username.check_value(&json!("al")).is_err());
/// assert!(compose![].check_value(&json!(null)).is_ok());
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::Compose::new()
    };
    ($($rule:expr),+ $(,)?) => {
        $crate::Compose::new()$(.then($rule))+
    };
}
