//! Rule combinators for building single-field validators.
//!
//! - [`Compose`]: runs rules in order and stops at the first failure
//! - [`Optional`]: skips its inner rule when the value is empty
//! - [`Custom`]: adapts a closure into a rule
//!
//! Combinators are rules themselves, so they nest freely.
//!
//! # Example
//!
//! ```rust
//! use revalid::{compose, matches_field, min_length, pattern_str, Rule};
//! use serde_json::json;
//!
//! let password = compose![
//!     min_length(8),
//!     pattern_str(r"[a-zA-Z]", "containsLetters").unwrap(),
//!     pattern_str(r"[0-9]", "containsNumbers").unwrap(),
//! ];
//! let confirm = compose![password.clone(), matches_field("password")];
//!
//! let record = json!({"password": "GoodPassword123", "confirm": "GoodPassword123"});
//! let fields = record.as_object().unwrap();
//!
//! assert!(password.check(fields.get("password"), fields).is_ok());
//! assert!(confirm.check(fields.get("confirm"), fields).is_ok());
//! ```

use std::fmt;

use serde_json::Value;

use crate::record::{is_empty_value, Fields};

use super::{Rule, RuleResult, SharedRule};

/// A chain of rules evaluated left to right.
///
/// The first failing rule's error is returned and the rules after it are
/// never invoked. An empty chain passes every value.
#[derive(Clone, Default)]
pub struct Compose {
    rules: Vec<SharedRule>,
}

impl Compose {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule to the end of the chain.
    pub fn then<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(std::sync::Arc::new(rule));
        self
    }

    /// Appends an already shared rule to the end of the chain.
    pub fn then_shared(mut self, rule: SharedRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the number of rules in the chain.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the chain has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Rule for Compose {
    fn check(&self, value: Option<&Value>, fields: &Fields) -> RuleResult {
        for rule in &self.rules {
            rule.check(value, fields)?;
        }
        Ok(())
    }
}

impl FromIterator<SharedRule> for Compose {
    fn from_iter<I: IntoIterator<Item = SharedRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Compose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose")
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Skips the inner rule when the value is absent, `null`, or `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<R> {
    inner: R,
}

impl<R> Optional<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Rule> Rule for Optional<R> {
    fn check(&self, value: Option<&Value>, fields: &Fields) -> RuleResult {
        if is_empty_value(value) {
            Ok(())
        } else {
            self.inner.check(value, fields)
        }
    }
}

/// A rule backed by a closure.
#[derive(Clone)]
pub struct Custom<F> {
    check: F,
}

impl<F> Rule for Custom<F>
where
    F: Fn(Option<&Value>, &Fields) -> RuleResult + Send + Sync,
{
    fn check(&self, value: Option<&Value>, fields: &Fields) -> RuleResult {
        (self.check)(value, fields)
    }
}

impl<F> fmt::Debug for Custom<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom").finish_non_exhaustive()
    }
}

/// Chains rules so that each runs only if every earlier rule passed.
///
/// Returns the first failure, or `Ok(())` if all rules pass (including when
/// there are no rules at all).
///
/// # Example
///
/// ```rust
/// use revalid::{compose_validators, min_length, pattern_str, shared, Rule, RuleKind};
/// use serde_json::json;
///
/// let password = compose_validators(vec![
///     shared(min_length(8)),
///     shared(pattern_str(r"[0-9]", "num").unwrap()),
/// ]);
///
/// // Both rules would fail; the length check runs first and wins.
/// let error = password.check_value(&json!("short")).unwrap_err();
/// assert_eq!(error.kind(), RuleKind::MinLength);
/// ```
pub fn compose_validators<I>(rules: I) -> Compose
where
    I: IntoIterator<Item = SharedRule>,
{
    rules.into_iter().collect()
}

/// Wraps a rule so that empty values pass without consulting it.
///
/// # Example
///
/// ```rust
/// use revalid::{min_length, optional, Fields, Rule};
/// use serde_json::json;
///
/// let middle_name = optional(min_length(2));
///
/// assert!(middle_name.check(None, &Fields::new()).is_ok());
/// assert!(middle_name.check_value(&json!(null)).is_ok());
/// assert!(middle_name.check_value(&json!("")).is_ok());
/// assert!(middle_name.check_value(&json!("J")).is_err());
/// ```
pub fn optional<R: Rule>(rule: R) -> Optional<R> {
    Optional::new(rule)
}

/// Adapts a closure into a rule.
///
/// # Example
///
/// ```rust
/// use revalid::{custom, Rule, RuleError};
/// use serde_json::json;
///
/// let even = custom(|value, _fields| match value.and_then(|v| v.as_i64()) {
///     Some(n) if n % 2 == 0 => Ok(()),
///     _ => Err(RuleError::custom("even", "must be an even integer", value)),
/// });
///
/// assert!(even.check_value(&json!(4)).is_ok());
/// assert_eq!(even.check_value(&json!(3)).unwrap_err().code(), "even");
/// ```
pub fn custom<F>(check: F) -> Custom<F>
where
    F: Fn(Option<&Value>, &Fields) -> RuleResult + Send + Sync,
{
    Custom { check }
}
