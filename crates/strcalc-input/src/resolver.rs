// this_file: crates/strcalc-input/src/resolver.rs

//! Custom delimiter headers
//!
//! An input may open with `//<delimiter>\n`. The declared delimiter then
//! replaces `,` as primary; the line break stays active either way.

use strcalc_core::{DelimiterSet, Payload, HEADER_PREFIX, LINE_BREAK};

/// Split `input` into its active delimiters and the text to tokenize
pub fn resolve(input: &str) -> (DelimiterSet<'_>, Payload<'_>) {
    resolve_with(input, true)
}

/// Like [`resolve`], with header recognition switchable
pub fn resolve_with(input: &str, custom_delimiters: bool) -> (DelimiterSet<'_>, Payload<'_>) {
    let header = if custom_delimiters {
        parse_header(input)
    } else {
        None
    };

    match header {
        Some((delimiter, rest)) => {
            let delimiters = DelimiterSet::custom(delimiter);
            if delimiters.is_custom() {
                log::debug!("Custom delimiter declared: {delimiter:?}");
            } else {
                log::debug!("Header redeclares the default delimiter");
            }
            (delimiters, Payload::new(rest))
        },
        None => (DelimiterSet::standard(), Payload::new(input)),
    }
}

/// `//`, a non-empty delimiter, the first line break, then the rest
fn parse_header(input: &str) -> Option<(&str, &str)> {
    let declaration = input.strip_prefix(HEADER_PREFIX)?;
    let (delimiter, rest) = declaration.split_once(LINE_BREAK)?;
    if delimiter.is_empty() {
        return None;
    }
    Some((delimiter, rest))
}
