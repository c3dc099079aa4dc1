//! strcalc core: the vocabulary of the pipeline
//!
//! A line of delimited integers goes in, a sum or a failure report comes
//! out. This crate holds the pieces every stage agrees on:
//!
//! 1. **Delimiter resolution** produces a [`DelimiterSet`] and a [`Payload`]
//! 2. **Tokenization** produces [`Token`]s
//! 3. **Number parsing** produces [`ParsedNumbers`]
//! 4. **Validation** runs [`Validator`]s over a [`ValidationInput`]
//! 5. **Aggregation** turns their [`FailureMessage`]s into an [`Outcome`]
//!
//! The stages themselves live in `strcalc-input` (1-3), `strcalc-validate`
//! (4) and `strcalc` (5).

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::CalcConfig;
pub use error::{CalcError, Failure, FailureKind, FailureMessage, Outcome, Result};
pub use traits::Validator;
pub use types::{
    DelimiterSet, ParsedNumbers, Payload, RejectReason, RejectedNumber, Token, ValidationInput,
    BIG_NUMBER, DEFAULT_DELIMITER, HEADER_PREFIX, LINE_BREAK,
};
