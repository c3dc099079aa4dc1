//! Batch command implementation
//!
//! Reads one JSON job per line and writes one JSON result per line. A line
//! that cannot be decoded gets an `invalid` result and the batch moves on.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::cli::BatchArgs;
use strcalc::Calculator;
use strcalc_cli::report::{Job, Report};
use strcalc_core::error::{CalcError, Result};

pub fn run(args: &BatchArgs) -> Result<bool> {
    let calculator = Calculator::builder().config(args.calc.config()?).build()?;

    let reader: Box<dyn BufRead> = match args.input.as_deref() {
        Some(path) if path != Path::new("-") => Box::new(BufReader::new(File::open(path)?)),
        _ => {
            if !args.quiet {
                eprintln!("Reading jobs from stdin...");
            }
            Box::new(BufReader::new(io::stdin()))
        },
    };

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let mut job_count = 0;
    let mut ok_count = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        job_count += 1;

        let report = match serde_json::from_str::<Job>(&line) {
            Ok(job) => {
                let id = job.id.unwrap_or_else(|| (line_num + 1).to_string());
                Report::from_outcome(Some(id), &calculator.add(&job.input))
            },
            Err(e) => {
                log::warn!("Line {}: {e}", line_num + 1);
                Report::invalid(Some((line_num + 1).to_string()), e.to_string())
            },
        };
        if report.is_ok() {
            ok_count += 1;
        }

        let encoded = serde_json::to_string(&report)
            .map_err(|e| CalcError::Batch(format!("Failed to encode result: {e}")))?;
        writeln!(writer, "{encoded}")?;
    }
    writer.flush()?;

    if !args.quiet {
        eprintln!("Processed {job_count} jobs: {ok_count} summed, {} rejected", job_count - ok_count);
    }

    Ok(ok_count == job_count)
}
