//! # Revalid
//!
//! Declarative validation of structured field data, such as form input, built
//! from small reusable rules.
//!
//! ## Overview
//!
//! Validation is layered from leaf to record:
//!
//! - **Rules** ([`min_length`], [`max_length`], [`min`], [`max`], [`pattern`],
//!   [`equal_to`], [`one_of`], [`matches_field`], [`custom`]) check a single
//!   field's value and return either `Ok(())` or a [`RuleError`] descriptor.
//! - [`optional`] lets empty values (absent, `null`, `""`) pass untouched.
//! - [`compose_validators`] (or [`compose!`]) chains rules for one field and
//!   stops at the first failure.
//! - [`combine_validators`] (or [`RecordValidator`]) applies one rule per
//!   field across a record, never short-circuiting, and collects every
//!   failure into a [`ValidationResult`].
//!
//! Failures are values, not panics: descriptors name the rule kind, its
//! parameters, and the offending value, leaving message rendering to the
//! caller.
//!
//! ## Example
//!
//! ```rust
//! use revalid::{compose, matches_field, min_length, pattern_str, RecordValidator};
//! use serde_json::json;
//!
//! let password = compose![
//!     min_length(8),
//!     pattern_str(r"[a-zA-Z]", "containsLetters").unwrap(),
//!     pattern_str(r"[0-9]", "containsNumbers").unwrap(),
//! ];
//!
//! let form = RecordValidator::new()
//!     .field("password", password.clone())
//!     .field("passwordConfirm", compose![password, matches_field("password")]);
//!
//! let record = json!({
//!     "password": "ThisPasswordIsNotSecureEnough",
//!     "passwordConfirm": "ThisIsADifferentPassword1"
//! });
//! let result = form.validate(record.as_object().unwrap());
//!
//! assert_eq!(result.to_json(), json!({
//!     "isValid": false,
//!     "validationErrors": {
//!         "password": {
//!             "type": "pattern",
//!             "label": "containsNumbers",
//!             "pattern": "[0-9]",
//!             "value": "ThisPasswordIsNotSecureEnough"
//!         },
//!         "passwordConfirm": {
//!             "type": "matchesField",
//!             "fieldName": "password",
//!             "value": "ThisIsADifferentPassword1",
//!             "other": "ThisPasswordIsNotSecureEnough"
//!         }
//!     }
//! }));
//! ```

pub mod error;
mod macros;
pub mod record;
pub mod registry;
pub mod rule;
pub mod validation;
pub mod validator;

pub use error::{FieldError, FieldErrors, RuleError, RuleKind};
pub use record::Fields;
pub use registry::{RegistryError, ValidatorRegistry};
pub use rule::{
    compose_validators, custom, equal_to, matches_field, max, max_length, min, min_length,
    one_of, optional, pattern, pattern_str, shared, Compose, Custom, EqualTo, MatchesField, Max,
    MaxLength, Min, MinLength, OneOf, Optional, Pattern, Rule, RuleExt, RuleResult, SharedRule,
};
pub use validation::ValidationResult;
pub use validator::{combine_validators, RecordError, RecordValidator};
