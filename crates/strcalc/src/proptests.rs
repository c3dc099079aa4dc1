use super::*;
use proptest::prelude::*;

fn join(numbers: &[i64], delimiter: &str) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Delimiters without digits, signs or commas
fn custom_delimiter() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![";", "|", "***", "sep", "#!", "é"])
}

// Property: well-formed non-negative input below the threshold sums arithmetically
proptest! {
    #[test]
    fn prop_small_numbers_sum(numbers in prop::collection::vec(0i64..1000, 1..20)) {
        let input = join(&numbers, ",");
        prop_assert_eq!(add(&input), Ok(numbers.iter().sum::<i64>()));
    }
}

// Property: line breaks and commas are interchangeable
proptest! {
    #[test]
    fn prop_line_breaks_are_delimiters(
        numbers in prop::collection::vec(0i64..1000, 1..20),
        breaks in prop::collection::vec(any::<bool>(), 20),
    ) {
        let mut input = String::new();
        for (i, n) in numbers.iter().enumerate() {
            if i > 0 {
                input.push_str(if breaks[i] { "\n" } else { "," });
            }
            input.push_str(&n.to_string());
        }
        prop_assert_eq!(add(&input), Ok(numbers.iter().sum::<i64>()));
    }
}

// Property: numbers of 1000 and up never contribute, wherever they appear
proptest! {
    #[test]
    fn prop_big_numbers_ignored(numbers in prop::collection::vec(0i64..5000, 1..20)) {
        let input = join(&numbers, "\n");
        let expected: i64 = numbers.iter().filter(|n| **n < 1000).sum();
        prop_assert_eq!(add(&input), Ok(expected));
    }
}

// Property: every negative number is listed, in order, comma-space separated
proptest! {
    #[test]
    fn prop_negatives_all_listed(
        numbers in prop::collection::vec(-2000i64..1000, 1..20)
            .prop_filter("needs a negative", |ns| ns.iter().any(|n| *n < 0)),
    ) {
        let failure = add(&join(&numbers, ",")).unwrap_err();
        let negatives: Vec<String> = numbers
            .iter()
            .filter(|n| **n < 0)
            .map(|n| n.to_string())
            .collect();

        prop_assert_eq!(failure.messages().len(), 1);
        prop_assert_eq!(
            failure.to_string(),
            format!("Negative number(s) not allowed: {}", negatives.join(", "))
        );
    }
}

// Property: a declared delimiter behaves exactly like the comma
proptest! {
    #[test]
    fn prop_custom_delimiter_transparent(
        numbers in prop::collection::vec(-999i64..5000, 1..20),
        delimiter in custom_delimiter(),
    ) {
        let plain = add(&join(&numbers, ","));
        let custom = add(&format!("//{delimiter}\n{}", join(&numbers, delimiter)));
        prop_assert_eq!(plain, custom);
    }
}

// Property: under a declared delimiter, a comma is reported against that delimiter
proptest! {
    #[test]
    fn prop_comma_reported_against_custom_delimiter(
        left in 0i64..1000,
        right in 0i64..1000,
        delimiter in custom_delimiter(),
    ) {
        let input = format!("//{delimiter}\n{left},{right}");
        let position = left.to_string().len();
        prop_assert_eq!(
            add(&input).unwrap_err().to_string(),
            format!("'{delimiter}' expected but ',' found at position {position}")
        );
    }
}

// Property: arbitrary text never panics and always gives the same answer
proptest! {
    #[test]
    fn prop_total_and_deterministic(s in "\\PC*") {
        prop_assert_eq!(add(&s), add(&s));
    }
}

// Property: at most one message per category, in report order
proptest! {
    #[test]
    fn prop_one_message_per_category(s in "[-0-9,;\n/ x]{0,30}") {
        if let Err(failure) = add(&s) {
            let kinds: Vec<FailureKind> = failure.kinds().collect();
            let mut sorted = kinds.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(kinds, sorted);
        }
    }
}
