// this_file: crates/strcalc-input/src/numbers.rs

//! Tokens → integers
//!
//! Only runs of digits and `-` are read. Anything else inside a token is
//! the unexpected-character check's business, and blank tokens belong to
//! the malformed-token check, so both are skipped here.

use strcalc_core::{ParsedNumbers, Payload, RejectReason, RejectedNumber, Token};

/// Parse every numeric run, splitting off numbers at or above `big_number`
pub fn parse_numbers<'a>(
    payload: Payload<'a>,
    tokens: &[Token<'a>],
    big_number: i64,
) -> ParsedNumbers<'a> {
    let mut numbers = ParsedNumbers::default();

    for token in tokens.iter().filter(|t| !t.is_blank()) {
        for (offset, run) in numeric_runs(token.text) {
            match parse_run(run) {
                Ok(n) if n >= big_number => numbers.big.push(n),
                Ok(n) => numbers.values.push(n),
                Err(reason) => numbers.rejected.push(RejectedNumber {
                    text: run,
                    position: payload.char_position(token.offset + offset),
                    reason,
                }),
            }
        }
    }

    log::debug!(
        "Parsed {} numbers ({} at or above {big_number}, {} rejected)",
        numbers.values.len() + numbers.big.len(),
        numbers.big.len(),
        numbers.rejected.len()
    );
    numbers
}

fn is_numeric(c: char) -> bool {
    c.is_ascii_digit() || c == '-'
}

/// Maximal `[-0-9]+` runs with their byte offsets
fn numeric_runs(text: &str) -> Vec<(usize, &str)> {
    let mut runs = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        match (is_numeric(c), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push((s, &text[s..i]));
                start = None;
            },
            _ => {},
        }
    }
    if let Some(s) = start {
        runs.push((s, &text[s..]));
    }
    runs
}

/// An optional leading `-` followed by at least one digit
fn parse_run(run: &str) -> Result<i64, RejectReason> {
    let digits = run.strip_prefix('-').unwrap_or(run);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RejectReason::Misplaced);
    }
    run.parse().map_err(|_| RejectReason::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use strcalc_core::{DelimiterSet, BIG_NUMBER};

    fn parse(text: &str, delimiters: &DelimiterSet<'_>) -> (Vec<i64>, Vec<i64>, usize) {
        let payload = Payload::new(text);
        let tokens = tokenize(payload, delimiters);
        let numbers = parse_numbers(payload, &tokens, BIG_NUMBER);
        (numbers.values, numbers.big, numbers.rejected.len())
    }

    #[test]
    fn test_plain_numbers() {
        let (values, big, rejected) = parse("1,2\n30", &DelimiterSet::standard());
        assert_eq!(values, vec![1, 2, 30]);
        assert!(big.is_empty());
        assert_eq!(rejected, 0);
    }

    #[test]
    fn test_big_numbers_split_off() {
        let (values, big, _) = parse("2,1000,999,1001", &DelimiterSet::standard());
        assert_eq!(values, vec![2, 999]);
        assert_eq!(big, vec![1000, 1001]);
    }

    #[test]
    fn test_negative_numbers_never_big() {
        let (values, big, _) = parse("-5000,-1", &DelimiterSet::standard());
        assert_eq!(values, vec![-5000, -1]);
        assert!(big.is_empty());
    }

    #[test]
    fn test_blank_tokens_skipped() {
        let (values, _, rejected) = parse("1,, ,2", &DelimiterSet::standard());
        assert_eq!(values, vec![1, 2]);
        assert_eq!(rejected, 0);
    }

    #[test]
    fn test_foreign_characters_split_runs() {
        let (values, _, _) = parse("1|2,-3", &DelimiterSet::custom("|"));
        assert_eq!(values, vec![1, 2, -3]);
    }

    #[test]
    fn test_misplaced_sign_rejected() {
        let payload = Payload::new("1,2-3");
        let tokens = tokenize(payload, &DelimiterSet::standard());
        let numbers = parse_numbers(payload, &tokens, BIG_NUMBER);
        assert_eq!(numbers.values, vec![1]);
        assert_eq!(
            numbers.rejected,
            vec![RejectedNumber {
                text: "2-3",
                position: 2,
                reason: RejectReason::Misplaced,
            }]
        );
    }

    #[test]
    fn test_lone_sign_rejected() {
        let (values, _, rejected) = parse("4,-", &DelimiterSet::standard());
        assert_eq!(values, vec![4]);
        assert_eq!(rejected, 1);
    }

    #[test]
    fn test_overflow_rejected() {
        let payload = Payload::new("99999999999999999999");
        let tokens = tokenize(payload, &DelimiterSet::standard());
        let numbers = parse_numbers(payload, &tokens, BIG_NUMBER);
        assert!(numbers.values.is_empty());
        assert_eq!(numbers.rejected[0].reason, RejectReason::Overflow);
    }

    #[test]
    fn test_numeric_runs_offsets() {
        assert_eq!(numeric_runs("a12b-3"), vec![(1, "12"), (4, "-3")]);
        assert!(numeric_runs("xyz").is_empty());
    }
}
