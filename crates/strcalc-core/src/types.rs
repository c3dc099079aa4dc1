//! The data that flows between pipeline stages
//!
//! Everything here borrows from the caller's input string. Nothing outlives
//! a single calculation.

// this_file: crates/strcalc-core/src/types.rs

/// Marks the start of a custom delimiter declaration
pub const HEADER_PREFIX: &str = "//";

/// Delimiter in effect when no header is present
pub const DEFAULT_DELIMITER: &str = ",";

/// Always active, alongside whichever delimiter is primary
pub const LINE_BREAK: &str = "\n";

/// Numbers at or above this value are left out of the sum
pub const BIG_NUMBER: i64 = 1000;

/// The delimiters active for one input, primary first
///
/// Always holds exactly one primary delimiter followed by the line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet<'a> {
    delimiters: Vec<&'a str>,
}

impl<'a> DelimiterSet<'a> {
    /// `,` and the line break
    pub fn standard() -> Self {
        Self::with_primary(DEFAULT_DELIMITER)
    }

    /// A declared delimiter and the line break
    pub fn custom(delimiter: &'a str) -> Self {
        Self::with_primary(delimiter)
    }

    fn with_primary(primary: &'a str) -> Self {
        Self {
            delimiters: vec![primary, LINE_BREAK],
        }
    }

    /// The delimiter quoted in "expected" messages
    pub fn primary(&self) -> &'a str {
        self.delimiters[0]
    }

    /// Whether the primary delimiter differs from `,`
    pub fn is_custom(&self) -> bool {
        self.primary() != DEFAULT_DELIMITER
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.delimiters.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.delimiters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delimiters.is_empty()
    }

    /// The first delimiter, in set order, that `text` begins with
    pub fn match_prefix(&self, text: &str) -> Option<&'a str> {
        self.iter().find(|d| !d.is_empty() && text.starts_with(d))
    }

    /// Whether `c` appears in any active delimiter
    pub fn contains_char(&self, c: char) -> bool {
        self.iter().any(|d| d.contains(c))
    }
}

/// Input text with any header removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payload<'a> {
    text: &'a str,
}

impl<'a> Payload<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Convert a byte offset into the character index users see in messages
    pub fn char_position(&self, byte_offset: usize) -> usize {
        self.text
            .get(..byte_offset)
            .map_or_else(|| self.text.chars().count(), |head| head.chars().count())
    }
}

/// A fragment between two delimiter occurrences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of the fragment within the payload
    pub offset: usize,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, offset: usize) -> Self {
        Self { text, offset }
    }

    /// Empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Why a numeric run could not become an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A `-` somewhere other than the front, or nothing but `-`
    Misplaced,
    /// Does not fit in an `i64`
    Overflow,
}

/// A run of digits and signs the parser refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectedNumber<'a> {
    pub text: &'a str,
    /// Character index within the payload
    pub position: usize,
    pub reason: RejectReason,
}

/// Integers recovered from the tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedNumbers<'a> {
    /// Numbers below the big-number threshold, in input order
    pub values: Vec<i64>,
    /// Numbers at or above the threshold, kept out of the sum
    pub big: Vec<i64>,
    pub rejected: Vec<RejectedNumber<'a>>,
}

impl ParsedNumbers<'_> {
    pub fn negatives(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied().filter(|n| *n < 0)
    }

    /// `None` when the total leaves the `i64` range
    pub fn sum(&self) -> Option<i64> {
        self.values.iter().try_fold(0i64, |total, n| total.checked_add(*n))
    }
}

/// What every validator gets to look at
///
/// All validators see the same payload, delimiters, tokens and numbers.
#[derive(Debug, Clone, Copy)]
pub struct ValidationInput<'a> {
    pub payload: Payload<'a>,
    pub delimiters: &'a DelimiterSet<'a>,
    pub tokens: &'a [Token<'a>],
    pub numbers: &'a ParsedNumbers<'a>,
}
