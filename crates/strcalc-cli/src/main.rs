//! strcalc CLI - sum delimiter-separated integers from the command line
//!
//! Exit status: 0 when every input was summed, 1 when an input was
//! rejected, 2 when the command could not run (bad flags, I/O, config).

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Add(args) => commands::add::run(args),
        Commands::Batch(args) => commands::batch::run(args),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        },
    }
}
