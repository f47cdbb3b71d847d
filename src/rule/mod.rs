//! Rules and the algebra for composing them.
//!
//! A [`Rule`] inspects one field's value, optionally consulting the rest of
//! the record, and either passes or returns a [`RuleError`] descriptor.
//! Leaf constructors ([`min_length`], [`pattern`], [`matches_field`], ...)
//! build single checks; [`optional`] and [`compose_validators`] build larger
//! single-field rules out of smaller ones.
//!
//! # Example
//!
//! ```rust
//! use revalid::{compose_validators, min_length, optional, pattern_str, shared, Rule};
//! use serde_json::json;
//!
//! let nickname = optional(compose_validators(vec![
//!     shared(min_length(3)),
//!     shared(pattern_str(r"^[a-z]+$", "lowercase").unwrap()),
//! ]));
//!
//! assert!(nickname.check(None, &Default::default()).is_ok());
//! assert!(nickname.check_value(&json!("bob")).is_ok());
//! assert!(nickname.check_value(&json!("Bo")).is_err());
//! ```

mod combinators;
mod equality;
mod length;
mod numeric;
mod pattern;

use std::sync::Arc;

use serde_json::Value;

use crate::error::RuleError;
use crate::record::Fields;

pub use combinators::{compose_validators, custom, optional, Compose, Custom, Optional};
pub use equality::{equal_to, matches_field, one_of, EqualTo, MatchesField, OneOf};
pub use length::{max_length, min_length, MaxLength, MinLength};
pub use numeric::{max, min, Max, Min};
pub use pattern::{pattern, pattern_str, Pattern};

/// The outcome of a single rule: `Ok(())` passes, `Err` describes the failure.
pub type RuleResult = Result<(), RuleError>;

/// A rule shared behind an `Arc`, as stored in chains and record validators.
pub type SharedRule = Arc<dyn Rule>;

/// A validation rule for a single field.
///
/// `value` is `None` when the field is absent from the record. `fields` is
/// the whole record, which cross-field rules read and every other rule
/// ignores. Rules must be pure: the same inputs always give the same result.
///
/// The `Send + Sync` bounds let rules be built once and shared by any number
/// of threads.
pub trait Rule: Send + Sync {
    /// Checks a value in the context of its record.
    fn check(&self, value: Option<&Value>, fields: &Fields) -> RuleResult;

    /// Checks a present value against an empty record.
    ///
    /// Convenient for rules that never look at other fields.
    fn check_value(&self, value: &Value) -> RuleResult {
        self.check(Some(value), &Fields::new())
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn check(&self, value: Option<&Value>, fields: &Fields) -> RuleResult {
        (**self).check(value, fields)
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn check(&self, value: Option<&Value>, fields: &Fields) -> RuleResult {
        (**self).check(value, fields)
    }
}

/// Wraps a rule for storage in a chain or record validator.
pub fn shared<R: Rule + 'static>(rule: R) -> SharedRule {
    Arc::new(rule)
}

/// Method-chaining sugar over the rule combinators.
///
/// ```rust
/// use revalid::{matches_field, min_length, Rule, RuleExt};
/// use serde_json::json;
///
/// let confirm = min_length(8).then(matches_field("password")).optional();
///
/// let fields = json!({"password": "hunter2hunter2"});
/// let fields = fields.as_object().unwrap();
///
/// assert!(confirm.check(None, fields).is_ok());
/// assert!(confirm.check(Some(&json!("hunter2hunter2")), fields).is_ok());
/// assert!(confirm.check(Some(&json!("hunter3hunter3")), fields).is_err());
/// ```
pub trait RuleExt: Rule + Sized + 'static {
    /// Chains `next` after this rule; `next` only runs if this rule passes.
    fn then<R: Rule + 'static>(self, next: R) -> Compose {
        Compose::new().then(self).then(next)
    }

    /// Skips this rule for empty values.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Moves this rule behind an `Arc`.
    fn shared(self) -> SharedRule {
        Arc::new(self)
    }
}

impl<R: Rule + 'static> RuleExt for R {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SharedRule>();
    assert_sync::<SharedRule>();
};
