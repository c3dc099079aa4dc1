//! Error types for strcalc
//!
//! Two families live here. [`Failure`] is the expected outcome of feeding
//! the calculator bad input: a list of human-readable messages, one per
//! violated category. [`CalcError`] covers everything else (configuration,
//! I/O in the CLI, batch protocol problems).

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

/// Tagged result of a calculation: the sum, or every reason there is none
pub type Outcome = std::result::Result<i64, Failure>;

/// Main error type for strcalc
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Batch error: {0}")]
    Batch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The category a failure message belongs to
///
/// Declaration order is the order messages appear in a [`Failure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FailureKind {
    NegativeNumber,
    MalformedToken,
    UnexpectedCharacter,
    UnsupportedNumber,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::NegativeNumber => "negative-number",
            FailureKind::MalformedToken => "malformed-token",
            FailureKind::UnexpectedCharacter => "unexpected-character",
            FailureKind::UnsupportedNumber => "unsupported-number",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a failure report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureMessage {
    pub kind: FailureKind,
    pub text: String,
}

impl FailureMessage {
    pub fn new(kind: FailureKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for FailureMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Everything wrong with an input, one message per category
///
/// Displays as the messages joined with a line break.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_lines(.messages))]
pub struct Failure {
    messages: Vec<FailureMessage>,
}

impl Failure {
    /// Wrap a non-empty message list; `None` when there is nothing to report
    pub fn from_messages(messages: Vec<FailureMessage>) -> Option<Self> {
        if messages.is_empty() {
            None
        } else {
            Some(Self { messages })
        }
    }

    pub fn single(message: FailureMessage) -> Self {
        Self {
            messages: vec![message],
        }
    }

    pub fn messages(&self) -> &[FailureMessage] {
        &self.messages
    }

    pub fn kinds(&self) -> impl Iterator<Item = FailureKind> + '_ {
        self.messages.iter().map(|m| m.kind)
    }

    pub fn has(&self, kind: FailureKind) -> bool {
        self.kinds().any(|k| k == kind)
    }
}

fn join_lines(messages: &[FailureMessage]) -> String {
    messages
        .iter()
        .map(|m| m.text.as_str())
        .collect::<Vec<_>>()
        .join(crate::types::LINE_BREAK)
}
