//! Characters that are neither digits, signs nor delimiter characters

use strcalc_core::{FailureKind, FailureMessage, ValidationInput, Validator};

/// Reports the first stray character and its 0-based character index
///
/// A character counts as a delimiter character when it occurs anywhere in
/// an active delimiter, so `s`, `e` and `p` are all accepted under `//sep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnexpectedCharacterValidator;

impl Validator for UnexpectedCharacterValidator {
    fn name(&self) -> &'static str {
        "unexpected-character"
    }

    fn kind(&self) -> FailureKind {
        FailureKind::UnexpectedCharacter
    }

    fn validate(&self, input: &ValidationInput<'_>) -> Option<FailureMessage> {
        let delimiters = input.delimiters;
        let (position, found) = input.payload.as_str().chars().enumerate().find(|&(_, c)| {
            !(c.is_ascii_digit() || c == '-' || delimiters.contains_char(c))
        })?;

        log::trace!("Unexpected {found:?} at {position}");
        Some(FailureMessage::new(
            self.kind(),
            format!(
                "'{}' expected but '{found}' found at position {position}",
                delimiters.primary()
            ),
        ))
    }
}
