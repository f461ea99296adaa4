#![cfg(feature = "serde")]

//! Integration tests for serializing prelude errors.

use lazy_prelude::numeric::{chr, digit_to_int, gcd};
use lazy_prelude::sequence::head;
use lazy_prelude::split::take;
use lazy_prelude::{ErrorKind, PreludeError};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn test_empty_sequence_serializes_operation() {
    let error = head(Vec::<i32>::new()).unwrap_err();
    assert_eq!(
        serde_json::to_value(&error).unwrap(),
        json!({ "EmptySequence": { "operation": "head" } })
    );
}

#[rstest]
fn test_negative_argument_serializes_argument() {
    let error = take(0.., -4).unwrap_err();
    assert_eq!(
        serde_json::to_value(&error).unwrap(),
        json!({ "NegativeArgument": { "operation": "take", "argument": -4 } })
    );
}

#[rstest]
fn test_undefined_result_serializes() {
    let error = gcd(0, 0).unwrap_err();
    assert_eq!(
        serde_json::to_string(&error).unwrap(),
        r#"{"UndefinedResult":{"operation":"gcd"}}"#
    );
}

#[rstest]
fn test_character_errors_serialize_payload() {
    assert_eq!(
        serde_json::to_value(digit_to_int('x').unwrap_err()).unwrap(),
        json!({ "InvalidDigit": { "character": "x" } })
    );
    assert_eq!(
        serde_json::to_value(chr(0xD800).unwrap_err()).unwrap(),
        json!({ "InvalidCodePoint": { "code": 55296 } })
    );
}

#[rstest]
#[case(ErrorKind::EmptySequence, "\"EmptySequence\"")]
#[case(ErrorKind::NegativeArgument, "\"NegativeArgument\"")]
#[case(ErrorKind::InvalidCodePoint, "\"InvalidCodePoint\"")]
fn test_error_kind_serializes_as_name(#[case] kind: ErrorKind, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
}

#[rstest]
fn test_kind_matches_serialized_variant() {
    let error = PreludeError::EmptySequence {
        operation: "minimum",
    };
    let value = serde_json::to_value(&error).unwrap();
    assert!(value.get(format!("{:?}", error.kind())).is_some());
}
