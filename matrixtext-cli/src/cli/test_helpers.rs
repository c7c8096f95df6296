//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests build temporary input files and drive the `parse`
//! command with an in-memory stdin. These helpers keep the cases concise.

use std::fs::File;
use std::io::{self, Cursor, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_parse;
use super::{CliError, ExecutionSummary, InputFormat, OutputFormat, ParseCommand};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_file(dir: &TempDir, name: &str, contents: &[u8]) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents)?;
    Ok(path)
}

/// `parse` command reading `text` from the argument with default options.
pub(super) fn parse_text(text: &str) -> ParseCommand {
    ParseCommand {
        text: Some(text.to_owned()),
        file: None,
        delimiter: ',',
        input_format: InputFormat::Text,
        output: OutputFormat::Human,
    }
}

/// `parse` command with no argument or file, so stdin is consulted.
pub(super) fn parse_stdin(input_format: InputFormat) -> ParseCommand {
    ParseCommand {
        text: None,
        file: None,
        delimiter: ',',
        input_format,
        output: OutputFormat::Human,
    }
}

pub(super) fn run_with_stdin(
    command: ParseCommand,
    stdin: &str,
) -> Result<ExecutionSummary, CliError> {
    run_parse(command, Cursor::new(stdin.as_bytes().to_vec()))
}

pub(super) fn run_expecting_error(command: ParseCommand, stdin: &str, panic_msg: &str) -> CliError {
    match run_with_stdin(command, stdin) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
