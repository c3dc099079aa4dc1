//! Negative numbers are reported, all of them, in input order

use strcalc_core::{FailureKind, FailureMessage, ValidationInput, Validator};

#[derive(Debug, Default, Clone, Copy)]
pub struct NegativeNumberValidator;

impl Validator for NegativeNumberValidator {
    fn name(&self) -> &'static str {
        "negative-number"
    }

    fn kind(&self) -> FailureKind {
        FailureKind::NegativeNumber
    }

    fn validate(&self, input: &ValidationInput<'_>) -> Option<FailureMessage> {
        let negatives: Vec<String> = input.numbers.negatives().map(|n| n.to_string()).collect();
        if negatives.is_empty() {
            return None;
        }

        log::trace!("{} negative numbers found", negatives.len());
        Some(FailureMessage::new(
            self.kind(),
            format!("Negative number(s) not allowed: {}", negatives.join(", ")),
        ))
    }
}
