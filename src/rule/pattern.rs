//! Regular-expression rule.

use regex::Regex;
use serde_json::Value;

use crate::error::RuleError;
use crate::record::{pattern_text, Fields};

use super::{Rule, RuleResult};

/// Requires the value's text to match a regular expression.
///
/// The `label` is a caller-chosen name for the pattern (e.g.
/// `containsNumbers`) carried into the error descriptor untouched.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    label: String,
}

impl Pattern {
    pub fn new(regex: Regex, label: impl Into<String>) -> Self {
        Self {
            regex,
            label: label.into(),
        }
    }

    /// Returns the compiled regular expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Returns the caller-supplied label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Rule for Pattern {
    fn check(&self, value: Option<&Value>, _fields: &Fields) -> RuleResult {
        let matched = value
            .and_then(pattern_text)
            .is_some_and(|text| self.regex.is_match(&text));

        if matched {
            Ok(())
        } else {
            Err(RuleError::Pattern {
                label: self.label.clone(),
                pattern: self.regex.as_str().to_string(),
                value: value.cloned(),
            })
        }
    }
}

/// Creates a rule from a compiled regular expression.
///
/// Unanchored patterns match anywhere in the text, so `[0-9]` reads as
/// "contains a digit".
///
/// Numbers and booleans are matched against their JSON text (`42`, `true`).
/// `null`, absent values, arrays and objects have no text and always fail,
/// even against a pattern such as `.*` that matches the empty string. Wrap
/// the rule in [`optional`](crate::optional) to let empty fields through.
///
/// # Example
///
/// ```rust
/// use regex::Regex;
/// use revalid::{pattern, Rule};
/// use serde_json::json;
///
/// let digits = pattern(Regex::new(r"[0-9]").unwrap(), "containsNumbers");
///
/// assert!(digits.check_value(&json!("abc1")).is_ok());
/// assert!(digits.check_value(&json!("abc")).is_err());
/// ```
pub fn pattern(regex: Regex, label: impl Into<String>) -> Pattern {
    Pattern::new(regex, label)
}

/// Compiles `source` and creates a pattern rule from it.
///
/// # Errors
///
/// Returns the regex compile error if `source` is not a valid pattern.
pub fn pattern_str(source: &str, label: impl Into<String>) -> Result<Pattern, regex::Error> {
    let regex = Regex::new(source)?;
    Ok(Pattern::new(regex, label))
}
