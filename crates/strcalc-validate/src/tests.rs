// this_file: crates/strcalc-validate/src/tests.rs

use super::*;
use strcalc_core::{FailureKind, BIG_NUMBER};
use strcalc_input::{parse_numbers, resolve, tokenize};

/// Run `validator` over `raw` exactly as the calculator would
fn check(validator: &dyn Validator, raw: &str) -> Option<String> {
    run_with(raw, |input| validator.validate(input).map(|m| m.text))
}

fn run_with<T>(raw: &str, f: impl FnOnce(&ValidationInput<'_>) -> T) -> T {
    let (delimiters, payload) = resolve(raw);
    let tokens = tokenize(payload, &delimiters);
    let numbers = parse_numbers(payload, &tokens, BIG_NUMBER);
    let input = ValidationInput {
        payload,
        delimiters: &delimiters,
        tokens: &tokens,
        numbers: &numbers,
    };
    f(&input)
}

#[test]
fn test_negative_single() {
    assert_eq!(
        check(&NegativeNumberValidator, "1,-2").as_deref(),
        Some("Negative number(s) not allowed: -2")
    );
}

#[test]
fn test_negative_lists_all_in_order() {
    assert_eq!(
        check(&NegativeNumberValidator, "2,-4,-9").as_deref(),
        Some("Negative number(s) not allowed: -4, -9")
    );
}

#[test]
fn test_negative_behind_foreign_delimiter() {
    assert_eq!(
        check(&NegativeNumberValidator, "//|\n1|2,-3").as_deref(),
        Some("Negative number(s) not allowed: -3")
    );
}

#[test]
fn test_large_negative_still_reported() {
    assert_eq!(
        check(&NegativeNumberValidator, "1,-5000").as_deref(),
        Some("Negative number(s) not allowed: -5000")
    );
}

#[test]
fn test_negative_quiet_on_positive_input() {
    assert_eq!(check(&NegativeNumberValidator, "1,2\n3"), None);
}

#[test]
fn test_malformed_trailing_delimiter() {
    assert_eq!(
        check(&MalformedTokenValidator, "1,2,").as_deref(),
        Some("Number expected at position 5")
    );
}

#[test]
fn test_malformed_mixed_delimiters() {
    assert_eq!(
        check(&MalformedTokenValidator, "2,\n3").as_deref(),
        Some("Number expected at position 2")
    );
}

#[test]
fn test_malformed_custom_doubled() {
    assert_eq!(
        check(&MalformedTokenValidator, "//;\n1;;2").as_deref(),
        Some("Number expected at position 2")
    );
}

#[test]
fn test_malformed_multi_char_delimiter_counts_normalized_text() {
    assert_eq!(
        check(&MalformedTokenValidator, "//sep\n1sepsep2").as_deref(),
        Some("Number expected at position 2")
    );
}

#[test]
fn test_malformed_leading_delimiter_reports_end() {
    assert_eq!(
        check(&MalformedTokenValidator, ",1").as_deref(),
        Some("Number expected at position 3")
    );
}

#[test]
fn test_malformed_whitespace_token() {
    assert_eq!(
        check(&MalformedTokenValidator, "1, ,2").as_deref(),
        Some("Number expected at position 6")
    );
}

#[test]
fn test_malformed_empty_payload_after_header() {
    assert_eq!(
        check(&MalformedTokenValidator, "//;\n").as_deref(),
        Some("Number expected at position 1")
    );
}

#[test]
fn test_malformed_quiet_on_well_formed_input() {
    assert_eq!(check(&MalformedTokenValidator, "1,2\n3"), None);
    assert_eq!(check(&MalformedTokenValidator, "//sep\n2sep5"), None);
}

#[test]
fn test_unexpected_default_delimiter_in_custom_input() {
    assert_eq!(
        check(&UnexpectedCharacterValidator, "//|\n1|2,3").as_deref(),
        Some("'|' expected but ',' found at position 3")
    );
}

#[test]
fn test_unexpected_foreign_delimiter_without_header() {
    assert_eq!(
        check(&UnexpectedCharacterValidator, "1;2").as_deref(),
        Some("',' expected but ';' found at position 1")
    );
}

#[test]
fn test_unexpected_position_counts_characters() {
    assert_eq!(
        check(&UnexpectedCharacterValidator, "1,23,é").as_deref(),
        Some("',' expected but 'é' found at position 5")
    );
}

#[test]
fn test_unexpected_accepts_any_delimiter_character() {
    assert_eq!(check(&UnexpectedCharacterValidator, "//sep\n2ses5"), None);
    assert_eq!(check(&UnexpectedCharacterValidator, "1,-2\n3"), None);
}

#[test]
fn test_unsupported_misplaced_sign() {
    assert_eq!(
        check(&UnsupportedNumberValidator, "1,2-3").as_deref(),
        Some("Unsupported number '2-3' at position 2")
    );
}

#[test]
fn test_unsupported_quiet_on_plain_numbers() {
    assert_eq!(check(&UnsupportedNumberValidator, "1,-2,3"), None);
}

#[test]
fn test_standard_suite_order() {
    assert_eq!(
        ValidatorSuite::standard().names(),
        vec![
            "negative-number",
            "malformed-token",
            "unexpected-character",
            "unsupported-number"
        ]
    );
}

#[test]
fn test_suite_reports_in_registration_order() {
    let suite = ValidatorSuite::standard();
    let kinds: Vec<FailureKind> =
        run_with("//|\n1|2,-3|", |input| suite.run(input).iter().map(|m| m.kind).collect());
    assert_eq!(
        kinds,
        vec![
            FailureKind::NegativeNumber,
            FailureKind::MalformedToken,
            FailureKind::UnexpectedCharacter
        ]
    );
}

#[test]
fn test_empty_suite_reports_nothing() {
    let suite = ValidatorSuite::empty();
    assert!(suite.is_empty());
    assert!(run_with("-1,,x", |input| suite.run(input)).is_empty());
}

#[test]
fn test_pushed_validator_runs_last() {
    struct NoSevens;

    impl Validator for NoSevens {
        fn name(&self) -> &'static str {
            "no-sevens"
        }

        fn kind(&self) -> FailureKind {
            FailureKind::UnsupportedNumber
        }

        fn validate(&self, input: &ValidationInput<'_>) -> Option<FailureMessage> {
            input
                .numbers
                .values
                .contains(&7)
                .then(|| FailureMessage::new(self.kind(), "7 is not welcome"))
        }
    }

    let mut suite = ValidatorSuite::standard();
    suite.push(Box::new(NoSevens));
    assert_eq!(suite.len(), 5);

    let texts: Vec<String> =
        run_with("-1,7", |input| suite.run(input).into_iter().map(|m| m.text).collect());
    assert_eq!(
        texts,
        vec![
            "Negative number(s) not allowed: -1".to_string(),
            "7 is not welcome".to_string()
        ]
    );
}
