// this_file: crates/strcalc-input/src/tokenizer.rs

//! Payload → tokens
//!
//! Splits on every active delimiter and keeps empty fragments: a doubled or
//! trailing delimiter must stay visible to the malformed-token check.

use strcalc_core::{DelimiterSet, Payload, Token};

/// Cut the payload at each delimiter occurrence
///
/// At every position the delimiters are tried in set order and the first
/// match is consumed. Tokens and delimiters together cover the payload
/// without gaps or overlap.
pub fn tokenize<'a>(payload: Payload<'a>, delimiters: &DelimiterSet<'_>) -> Vec<Token<'a>> {
    let text = payload.as_str();
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while let Some(rest) = text.get(pos..).filter(|rest| !rest.is_empty()) {
        match delimiters.match_prefix(rest) {
            Some(delimiter) => {
                tokens.push(Token::new(&text[start..pos], start));
                pos += delimiter.len();
                start = pos;
            },
            None => {
                pos += rest.chars().next().map_or(1, char::len_utf8);
            },
        }
    }
    tokens.push(Token::new(&text[start..], start));

    log::trace!("Tokenized {} bytes into {} tokens", text.len(), tokens.len());
    tokens
}
