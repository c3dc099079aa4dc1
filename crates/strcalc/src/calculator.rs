//! The engine that drives a string through every stage to a sum

// this_file: crates/strcalc/src/calculator.rs

use strcalc_core::{
    error::Result, CalcConfig, DelimiterSet, Failure, FailureKind, FailureMessage, Outcome,
    ParsedNumbers, Payload, Token, ValidationInput, Validator,
};
use strcalc_input::{parse_numbers, resolve_with, tokenize};
use strcalc_validate::ValidatorSuite;

/// Resolve → Tokenize → Parse → Validate → Aggregate
///
/// A calculator holds no per-call state, so one instance can serve any
/// number of threads.
///
/// ```
/// use strcalc::Calculator;
///
/// let calculator = Calculator::builder().big_number(100).build()?;
/// assert_eq!(calculator.add("1,2,100"), Ok(3));
/// # Ok::<(), strcalc::CalcError>(())
/// ```
pub struct Calculator {
    config: CalcConfig,
    suite: ValidatorSuite,
}

impl Calculator {
    /// Default configuration and the standard validators
    pub fn new() -> Self {
        Self {
            config: CalcConfig::default(),
            suite: ValidatorSuite::standard(),
        }
    }

    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    pub fn validators(&self) -> &ValidatorSuite {
        &self.suite
    }

    /// The sum of `input`, or every reason it has none
    pub fn add(&self, input: &str) -> Outcome {
        self.analyze(input).into_outcome()
    }

    /// Run every stage and keep all intermediate results
    pub fn analyze<'a>(&self, input: &'a str) -> Analysis<'a> {
        if input.is_empty() {
            log::debug!("Empty input, nothing to analyze");
            return Analysis::empty();
        }

        let (delimiters, payload) = resolve_with(input, self.config.custom_delimiters);
        let tokens = tokenize(payload, &delimiters);
        let numbers = parse_numbers(payload, &tokens, self.config.big_number);
        let messages = self.suite.run(&ValidationInput {
            payload,
            delimiters: &delimiters,
            tokens: &tokens,
            numbers: &numbers,
        });

        log::debug!(
            "Analyzed {} tokens with delimiter {:?}: {} failure messages",
            tokens.len(),
            delimiters.primary(),
            messages.len()
        );

        Analysis {
            delimiters,
            payload,
            tokens,
            numbers,
            messages,
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything one calculation saw along the way
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    pub delimiters: DelimiterSet<'a>,
    pub payload: Payload<'a>,
    pub tokens: Vec<Token<'a>>,
    pub numbers: ParsedNumbers<'a>,
    pub messages: Vec<FailureMessage>,
}

impl<'a> Analysis<'a> {
    fn empty() -> Self {
        Self {
            delimiters: DelimiterSet::standard(),
            payload: Payload::new(""),
            tokens: Vec::new(),
            numbers: ParsedNumbers::default(),
            messages: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.messages.is_empty()
    }

    /// Aggregate: any message wins over the sum
    pub fn outcome(&self) -> Outcome {
        self.clone().into_outcome()
    }

    pub fn into_outcome(self) -> Outcome {
        match Failure::from_messages(self.messages) {
            Some(failure) => Err(failure),
            None => checked_sum(&self.numbers),
        }
    }
}

/// Sum without wrapping; only reachable with a raised big-number threshold
fn checked_sum(numbers: &ParsedNumbers<'_>) -> Outcome {
    numbers.sum().ok_or_else(|| {
        log::debug!("Sum of {} numbers overflows i64", numbers.values.len());
        Failure::single(FailureMessage::new(
            FailureKind::UnsupportedNumber,
            "Sum exceeds the supported integer range",
        ))
    })
}

/// Put a calculator together piece by piece
///
/// ```
/// use strcalc::{Calculator, CalcConfig};
///
/// let calculator = Calculator::builder()
///     .config(CalcConfig::default().with_custom_delimiters(false))
///     .build()?;
/// assert!(calculator.add("//;\n1;2").is_err());
/// # Ok::<(), strcalc::CalcError>(())
/// ```
pub struct CalculatorBuilder {
    config: CalcConfig,
    suite: ValidatorSuite,
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self {
            config: CalcConfig::default(),
            suite: ValidatorSuite::standard(),
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: CalcConfig) -> Self {
        self.config = config;
        self
    }

    /// Numbers at or above this value are left out of the sum
    pub fn big_number(mut self, big_number: i64) -> Self {
        self.config.big_number = big_number;
        self
    }

    /// Honour or ignore `//<delimiter>\n` headers
    pub fn custom_delimiters(mut self, enabled: bool) -> Self {
        self.config.custom_delimiters = enabled;
        self
    }

    /// Report an extra category after the standard ones
    pub fn validator(mut self, validator: Box<dyn Validator>) -> Self {
        self.suite.push(validator);
        self
    }

    /// Replace the standard validators entirely
    pub fn validators(mut self, suite: ValidatorSuite) -> Self {
        self.suite = suite;
        self
    }

    pub fn build(self) -> Result<Calculator> {
        self.config.validate()?;
        log::debug!(
            "Calculator built with validators {:?}, big number {}",
            self.suite.names(),
            self.config.big_number
        );
        Ok(Calculator {
            config: self.config,
            suite: self.suite,
        })
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
