#![doc = include_str!("../README.md")]

mod cli;
mod error;
mod logging;
mod structured;

pub(crate) use cli::*;
pub(crate) use error::*;
pub(crate) use logging::*;
pub(crate) use structured::*;

use clap::Parser;

fn main() {
    let args = Cli::parse();
    TraceController::initialize(&args.verbosity);

    let json_output = args.verbosity.json_output;
    let result = args.format();

    // Provide a structured output for third party tools that can consume the output of the CLI
    match result {
        Ok(output) if json_output => {
            tracing::info!(json = ?output);
        }
        Ok(output) => {
            tracing::debug!(json = ?output);
        }
        Err(err) => {
            tracing::error!(
                json = ?StructuredOutput::Error {
                    message: err.to_string(),
                },
            );

            eprintln!("{}: {err}", console::style("Failed").red().bold());

            std::process::exit(1);
        }
    };
}
