//! Missing numbers between, before or after delimiters

use strcalc_core::{
    FailureKind, FailureMessage, Token, ValidationInput, Validator, DEFAULT_DELIMITER,
};

/// Fires when any token is empty or whitespace only
///
/// The reported position comes from a normalized copy of the payload in
/// which every delimiter has become `,`: it is one past the first `,,`, or
/// one past the end when there is no doubled comma.
#[derive(Debug, Default, Clone, Copy)]
pub struct MalformedTokenValidator;

impl MalformedTokenValidator {
    fn gap_position(input: &ValidationInput<'_>) -> usize {
        let normalized = input
            .delimiters
            .iter()
            .filter(|d| !d.is_empty())
            .fold(input.payload.as_str().to_owned(), |text, delimiter| {
                text.replace(delimiter, DEFAULT_DELIMITER)
            });

        let doubled = DEFAULT_DELIMITER.repeat(2);
        match normalized.find(&doubled) {
            Some(byte) => normalized[..byte].chars().count(),
            None => normalized.chars().count(),
        }
    }
}

impl Validator for MalformedTokenValidator {
    fn name(&self) -> &'static str {
        "malformed-token"
    }

    fn kind(&self) -> FailureKind {
        FailureKind::MalformedToken
    }

    fn validate(&self, input: &ValidationInput<'_>) -> Option<FailureMessage> {
        if !input.tokens.iter().any(Token::is_blank) {
            return None;
        }

        let position = Self::gap_position(input) + 1;
        log::trace!("Blank token, reporting position {position}");
        Some(FailureMessage::new(
            self.kind(),
            format!("Number expected at position {position}"),
        ))
    }
}
