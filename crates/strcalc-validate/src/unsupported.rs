//! Numeric runs that are not representable integers
//!
//! `1-2`, a lone `-` or a value beyond `i64` would otherwise be dropped
//! from the sum without a word. This check makes them a failure instead.

use strcalc_core::{FailureKind, FailureMessage, ValidationInput, Validator};

#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedNumberValidator;

impl Validator for UnsupportedNumberValidator {
    fn name(&self) -> &'static str {
        "unsupported-number"
    }

    fn kind(&self) -> FailureKind {
        FailureKind::UnsupportedNumber
    }

    fn validate(&self, input: &ValidationInput<'_>) -> Option<FailureMessage> {
        let first = input.numbers.rejected.first()?;

        log::trace!("Rejected number {:?} ({:?})", first.text, first.reason);
        Some(FailureMessage::new(
            self.kind(),
            format!(
                "Unsupported number '{}' at position {}",
                first.text, first.position
            ),
        ))
    }
}
