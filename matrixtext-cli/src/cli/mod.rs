//! Command-line interface orchestration for matrixtext.
//!
//! The CLI offers a single `parse` command that reads raw matrix text from an
//! argument, a file, or stdin and renders the parsed matrix or the reason it
//! was rejected.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, InputFormat, InputSource, OutputFormat,
    ParseCommand, render_summary, run_cli, run_cli_with_stdin,
};

#[cfg(test)]
mod test_helpers;
