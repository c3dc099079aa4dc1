//! Add command implementation
//!
//! Sums a single input given on the command line or piped through stdin.

use std::io::{self, Read};

use crate::cli::AddArgs;
use strcalc::Calculator;
use strcalc_cli::{
    escapes::{trim_final_line_break, unescape},
    report::Report,
};
use strcalc_core::error::{CalcError, Result};

pub fn run(args: &AddArgs) -> Result<bool> {
    let calculator = Calculator::builder().config(args.calc.config()?).build()?;

    let raw = match &args.input {
        Some(input) => input.clone(),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            trim_final_line_break(&buffer).to_string()
        },
    };
    let input = if args.escapes { unescape(&raw) } else { raw };
    log::debug!("Adding {input:?}");

    let outcome = calculator.add(&input);

    if args.json {
        let report = Report::from_outcome(None, &outcome);
        let line = serde_json::to_string(&report)
            .map_err(|e| CalcError::Batch(format!("Failed to encode result: {e}")))?;
        println!("{line}");
        return Ok(report.is_ok());
    }

    match outcome {
        Ok(sum) => {
            println!("{sum}");
            Ok(true)
        },
        Err(failure) => {
            println!("{failure}");
            Ok(false)
        },
    }
}
