//! Error types for validation failures.
//!
//! [`RuleError`] describes why one value failed one rule. [`FieldError`] and
//! [`FieldErrors`] attach those descriptors to the fields of a record.

mod field_errors;
mod rule_error;

pub use field_errors::{FieldError, FieldErrors};
pub use rule_error::{RuleError, RuleKind};
