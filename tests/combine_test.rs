use revalid::{
    combine_validators, compose, compose_validators, custom, matches_field, max, min, min_length,
    one_of, optional, pattern_str, shared, Compose, Fields, RecordValidator, RuleError, RuleKind,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn fields(value: Value) -> Fields {
    value.as_object().cloned().unwrap()
}

fn password_form() -> RecordValidator {
    let password = compose![
        min_length(8),
        pattern_str(r"[a-zA-Z]", "containsLetters").unwrap(),
        pattern_str(r"[0-9]", "containsNumbers").unwrap(),
    ];
    let password_confirm: Compose = compose![password.clone(), matches_field("password")];

    RecordValidator::new()
        .field("password", password)
        .field("passwordConfirm", password_confirm)
}

#[test]
fn test_end_to_end_valid() {
    let result = password_form().validate(&fields(json!({
        "password": "GoodPassword123",
        "passwordConfirm": "GoodPassword123"
    })));

    assert!(result.is_valid);
    assert!(result.validation_errors.is_empty());
    assert_eq!(
        result.to_json(),
        json!({"isValid": true, "validationErrors": {}})
    );
}

#[test]
fn test_end_to_end_invalid() {
    let result = password_form().validate(&fields(json!({
        "password": "ThisPasswordIsNotSecureEnough",
        "passwordConfirm": "ThisIsADifferentPassword1"
    })));

    assert!(!result.is_valid);
    assert_eq!(
        result.error("password"),
        Some(&RuleError::Pattern {
            label: "containsNumbers".to_string(),
            pattern: "[0-9]".to_string(),
            value: Some(json!("ThisPasswordIsNotSecureEnough")),
        })
    );
    assert_eq!(
        result.error("passwordConfirm"),
        Some(&RuleError::MatchesField {
            field_name: "password".to_string(),
            value: Some(json!("ThisIsADifferentPassword1")),
            other: Some(json!("ThisPasswordIsNotSecureEnough")),
        })
    );
}

#[test]
fn test_length_check_wins_tie_break() {
    let validate = combine_validators([(
        "password",
        shared(compose_validators(vec![
            shared(min_length(8)),
            shared(pattern_str(r"[0-9]", "num").unwrap()),
        ])),
    )]);

    let result = validate.validate(&fields(json!({"password": "short"})));
    assert_eq!(
        result.to_json(),
        json!({
            "isValid": false,
            "validationErrors": {
                "password": {"type": "minLength", "minLength": 8, "value": "short"}
            }
        })
    );
}

#[test]
fn test_no_short_circuit_across_fields() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&calls);

    let validate = RecordValidator::new().field("a", min_length(10)).field(
        "b",
        custom(move |value, _| {
            counted.fetch_add(1, Ordering::SeqCst);
            Err(RuleError::custom("never", "always fails", value))
        }),
    );

    let result = validate.validate(&fields(json!({"a": "x", "b": "y"})));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(result.failed_fields().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_errors_contain_exactly_failing_keys() {
    let validate = RecordValidator::new()
        .field("age", compose![min(18), max(130)])
        .field("role", one_of(["admin", "user"]))
        .field("nickname", optional(min_length(3)));

    let result = validate.validate(&fields(json!({
        "age": 12,
        "role": "user",
        "nickname": ""
    })));

    assert!(!result.is_valid);
    assert_eq!(result.validation_errors.len(), 1);
    assert_eq!(result.error("age").map(|e| e.kind()), Some(RuleKind::Min));
}

#[test]
fn test_missing_fields_validate_as_absent() {
    let validate = RecordValidator::new()
        .field("email", pattern_str(r"@", "email").unwrap())
        .field("phone", optional(pattern_str(r"^\+?[0-9]+$", "phone").unwrap()));

    let result = validate.validate(&Fields::new());
    assert_eq!(result.failed_fields().collect::<Vec<_>>(), vec!["email"]);
    assert_eq!(result.error("email").and_then(|e| e.value()), None);
}

#[test]
fn test_extra_fields_are_not_examined() {
    let validate = RecordValidator::new().field("name", min_length(1));
    let result = validate.validate(&fields(json!({"name": "Ada", "age": "not a number"})));
    assert!(result.is_valid);
}

#[test]
fn test_record_is_not_mutated() {
    let record = fields(json!({"password": "abc", "passwordConfirm": "abd"}));
    let before = record.clone();
    let _ = password_form().validate(&record);
    assert_eq!(record, before);
}

#[test]
fn test_repeated_validation_is_structurally_identical() {
    let form = password_form();
    let record = fields(json!({"password": "abc", "passwordConfirm": "abd"}));
    assert_eq!(form.validate(&record), form.validate(&record));
}

#[test]
fn test_into_validation_accumulates() {
    let result = password_form().validate(&fields(json!({
        "password": "abc",
        "passwordConfirm": "abd"
    })));

    let errors = result.into_validation().into_result().unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.with_kind(RuleKind::MinLength).len(), 2);
    assert!(errors.for_field("passwordConfirm").is_some());
}

#[test]
fn test_validate_json_accepts_objects_only() {
    let form = password_form();
    assert!(form
        .validate_json(&json!({"password": "x", "passwordConfirm": "x"}))
        .is_ok());
    assert!(form.validate_json(&json!(42)).is_err());
}
