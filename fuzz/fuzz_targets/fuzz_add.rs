//! Throw arbitrary text at the calculator
//!
//! Every input must produce a sum or a failure report, never a panic. On
//! top of that, the report must respect its own shape:
//!
//! - at most one message per category, in category order
//! - the same input always gives the same answer
//! - a header-free input sums the same with headers switched off

#![no_main]

use libfuzzer_sys::fuzz_target;
use strcalc::{types::HEADER_PREFIX, Calculator};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // Reject inputs that would only slow the fuzzer down
    if text.len() > 10_000 {
        return;
    }

    let outcome = strcalc::add(&text);
    assert_eq!(outcome, strcalc::add(&text));

    if let Err(failure) = &outcome {
        let kinds: Vec<_> = failure.kinds().collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(kinds, sorted, "categories repeated or out of order");
    }

    if !text.starts_with(HEADER_PREFIX) {
        if let Ok(plain) = Calculator::builder().custom_delimiters(false).build() {
            assert_eq!(plain.add(&text), outcome);
        }
    }
});
