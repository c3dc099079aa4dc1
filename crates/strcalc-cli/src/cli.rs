//! CLI argument definitions using Clap v4

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use strcalc_core::{error::Result, CalcConfig};

/// strcalc - sum delimiter-separated integers from the command line
#[derive(Parser, Debug)]
#[command(name = "strcalc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sum one input, or explain why it cannot be summed
    #[command(alias = "a")]
    Add(AddArgs),

    /// Sum every input of a JSONL file, one JSON result per line
    Batch(BatchArgs),
}

/// Options shared by every command that runs the calculator
#[derive(Args, Debug, Clone, Default)]
pub struct CalcArgs {
    /// Numbers at or above this value are left out of the sum
    /// (default: $STRCALC_BIG_NUMBER or 1000)
    #[arg(long = "big-number", value_name = "N")]
    pub big_number: Option<i64>,

    /// Treat `//<delimiter>\n` headers as ordinary input
    #[arg(long = "no-custom-delimiters")]
    pub no_custom_delimiters: bool,
}

impl CalcArgs {
    /// Environment first, then command-line overrides
    pub fn config(&self) -> Result<CalcConfig> {
        let mut config = CalcConfig::from_env()?;
        if let Some(big_number) = self.big_number {
            config = config.with_big_number(big_number);
        }
        if self.no_custom_delimiters {
            config = config.with_custom_delimiters(false);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Input to sum (reads stdin if omitted; one trailing line break is dropped)
    #[arg(allow_hyphen_values = true)]
    pub input: Option<String>,

    /// Interpret `\n`, `\r`, `\t` and `\\` escapes in the input
    #[arg(short = 'e', long = "escapes")]
    pub escapes: bool,

    /// Print the result as a JSON object
    #[arg(long = "json")]
    pub json: bool,

    #[command(flatten)]
    pub calc: CalcArgs,
}

/// Arguments for the batch command
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// JSONL file of `{"id": ..., "input": ...}` jobs (reads stdin if omitted or `-`)
    pub input: Option<PathBuf>,

    /// Write results here instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Suppress the summary on stderr
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    #[command(flatten)]
    pub calc: CalcArgs,
}
