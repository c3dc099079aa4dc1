//! strcalc - sum delimiter-separated integers, or explain exactly why not
//!
//! Every input runs through five stages:
//! 1. Delimiter resolution (`//<delimiter>\n` headers)
//! 2. Tokenization on every active delimiter
//! 3. Number parsing
//! 4. Independent validation: negative numbers, malformed tokens,
//!    unexpected characters, unsupported numbers
//! 5. Aggregation into a sum or a newline-joined failure report
//!
//! # Example
//!
//! ```
//! assert_eq!(strcalc::add("1,2\n3"), Ok(6));
//! assert_eq!(strcalc::add("2,1000"), Ok(2));
//!
//! let failure = strcalc::add("//|\n1|2,-3").unwrap_err();
//! assert_eq!(
//!     failure.to_string(),
//!     "Negative number(s) not allowed: -3\n'|' expected but ',' found at position 3"
//! );
//! ```

use std::sync::OnceLock;

mod calculator;

pub use calculator::{Analysis, Calculator, CalculatorBuilder};
pub use strcalc_core::{
    config, error, traits, types, CalcConfig, CalcError, Failure, FailureKind, FailureMessage,
    Outcome, Validator,
};
pub use strcalc_input as input;
pub use strcalc_validate as validate;

/// Shared by every [`add`] call; holds no per-call state
static DEFAULT_CALCULATOR: OnceLock<Calculator> = OnceLock::new();

/// Sum `input` with the default configuration
pub fn add(input: &str) -> Outcome {
    DEFAULT_CALCULATOR.get_or_init(Calculator::new).add(input)
}

/// Common imports for typical usage
pub mod prelude {
    pub use crate::{add, Analysis, Calculator, CalculatorBuilder};
    pub use strcalc_core::{
        error::{CalcError, Failure, FailureKind, FailureMessage, Outcome, Result},
        traits::Validator,
        types::ValidationInput,
        CalcConfig,
    };
    pub use strcalc_validate::ValidatorSuite;
}

#[cfg(test)]
mod proptests;
