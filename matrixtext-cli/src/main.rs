//! CLI entry point for matrixtext.
//!
//! Parses command-line arguments with clap, parses the raw matrix text,
//! renders the matrix or the rejection reason to stdout, and maps failures to
//! exit codes. Logging is initialised first so every later step can emit
//! structured diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use matrixtext_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Exit status for input that was read but rejected by the parser. Clap
/// already uses 2 for usage errors.
const REJECTED_INPUT: u8 = 3;

/// Parse CLI arguments, execute the command, render the summary, and flush the
/// output stream. Returns whether the input parsed successfully.
fn try_main() -> Result<bool> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render result")?;
    writer.flush().context("failed to flush output")?;
    Ok(summary.is_success())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match try_main() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(REJECTED_INPUT),
        Err(err) => {
            let code = err
                .downcast_ref::<CliError>()
                .and_then(CliError::code)
                .map(field::display);
            error!(error = %err, code = code, "command execution failed");
            ExitCode::FAILURE
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
