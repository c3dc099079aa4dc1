// this_file: crates/strcalc-validate/src/lib.rs

//! The validators that decide whether an input deserves a sum.
//!
//! Each one inspects the same [`ValidationInput`] and contributes at most
//! one line to the failure report. They never consult each other, so any
//! category can fire alone or alongside the rest.

mod malformed;
mod negative;
mod unexpected;
mod unsupported;

pub use malformed::MalformedTokenValidator;
pub use negative::NegativeNumberValidator;
pub use unexpected::UnexpectedCharacterValidator;
pub use unsupported::UnsupportedNumberValidator;

use strcalc_core::{FailureMessage, ValidationInput, Validator};

/// An ordered list of validators
///
/// Report order is registration order.
pub struct ValidatorSuite {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorSuite {
    /// Negative numbers, malformed tokens, unexpected characters, then
    /// unsupported numbers
    pub fn standard() -> Self {
        Self {
            validators: vec![
                Box::new(NegativeNumberValidator),
                Box::new(MalformedTokenValidator),
                Box::new(UnexpectedCharacterValidator),
                Box::new(UnsupportedNumberValidator),
            ],
        }
    }

    /// No validators at all; every input passes
    pub fn empty() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    pub fn push(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Run every validator, keeping the messages of those that fired
    pub fn run(&self, input: &ValidationInput<'_>) -> Vec<FailureMessage> {
        self.validators
            .iter()
            .filter_map(|validator| {
                let message = validator.validate(input);
                if message.is_some() {
                    log::debug!("Validator {} fired", validator.name());
                }
                message
            })
            .collect()
    }
}

impl Default for ValidatorSuite {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests;
