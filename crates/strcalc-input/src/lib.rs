//! Input parsing for strcalc
//!
//! The first three stages of the pipeline. Takes raw text and turns it into
//! the structured view every validator works from: active delimiters, the
//! payload, its tokens and the integers found in them.

pub mod numbers;
pub mod resolver;
pub mod tokenizer;

pub use numbers::parse_numbers;
pub use resolver::{resolve, resolve_with};
pub use tokenizer::tokenize;
