//! Command implementations and argument parsing for the matrixtext CLI.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use matrixtext_core::{
    BuilderError, CellDisplay, DEFAULT_ROW_DELIMITER, Matrix, MatrixParser, MatrixParserBuilder,
    ParseError, ParseOutcome,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "matrixtext",
    about = "Parse delimited, whitespace-separated text into a numeric matrix."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Parse raw text into a matrix and print it.
    Parse(ParseCommand),
}

/// Options accepted by the `parse` command.
#[derive(Debug, Args, Clone)]
pub struct ParseCommand {
    /// Raw matrix text such as "1 2, 3 4". Read from `--file` or stdin when omitted.
    pub text: Option<String>,

    /// Read the raw text from a file instead.
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Character separating rows.
    #[arg(long, default_value_t = DEFAULT_ROW_DELIMITER)]
    pub delimiter: char,

    /// How the raw input is encoded.
    #[arg(long = "input-format", value_enum, default_value_t = InputFormat::Text)]
    pub input_format: InputFormat,

    /// How the result is rendered on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output: OutputFormat,
}

/// Encodings accepted for the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// The input is the matrix text itself.
    Text,
    /// The input is a JSON value; only JSON strings count as text.
    Json,
}

/// Renderings supported for the parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Shape header followed by tab-separated rows.
    Human,
    /// `{"matrix": ...}` or `{"error": ...}`.
    Json,
}

/// Errors surfaced while executing CLI commands.
///
/// A parse failure is not a `CliError`: it is reported through
/// [`ExecutionSummary::result`] so it can be rendered like any other result.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading an input file failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading standard input failed.
    #[error("failed to read stdin: {source}")]
    Stdin {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input was not valid JSON while `--input-format json` was set.
    #[error("input is not valid JSON: {source}")]
    Json {
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },
    /// The parser configuration was rejected.
    #[error(transparent)]
    Builder(#[from] BuilderError),
}

impl CliError {
    /// Returns the stable error code when the failure came from the core library.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Builder(err) => Some(err.code().as_str()),
            Self::Io { .. } | Self::Stdin { .. } | Self::Json { .. } => None,
        }
    }
}

/// Where the raw input was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Positional command-line argument.
    Argument,
    /// File supplied through `--file`.
    File(PathBuf),
    /// Standard input.
    Stdin,
}

impl InputSource {
    fn label(&self) -> &'static str {
        match self {
            Self::Argument => "argument",
            Self::File(_) => "file",
            Self::Stdin => "stdin",
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Where the raw input came from.
    pub source: InputSource,
    /// Rendering requested for stdout.
    pub output: OutputFormat,
    /// Parsed matrix or the reason parsing failed.
    pub result: Result<Matrix, ParseError>,
}

impl ExecutionSummary {
    /// Reports whether the input parsed into a matrix.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Executes the CLI command represented by `cli`, reading stdin when no other
/// input is given.
///
/// # Errors
/// Returns [`CliError`] when input cannot be read or the configuration is
/// invalid. Parse failures are reported in [`ExecutionSummary::result`].
///
/// # Examples
/// ```
/// # use matrixtext_cli::cli::{Cli, Command, InputFormat, OutputFormat, ParseCommand, run_cli};
/// let cli = Cli {
///     command: Command::Parse(ParseCommand {
///         text: Some("1 2, 3 4".into()),
///         file: None,
///         delimiter: ',',
///         input_format: InputFormat::Text,
///         output: OutputFormat::Human,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.result.map(|m| m.shape()), Ok((2, 2)));
/// # Ok::<(), matrixtext_cli::cli::CliError>(())
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    run_cli_with_stdin(cli, io::stdin().lock())
}

/// Executes `cli`, reading from `stdin` when no other input is given.
///
/// # Errors
/// See [`run_cli`].
#[instrument(name = "cli.run", err, skip(cli, stdin), fields(command = field::Empty))]
pub fn run_cli_with_stdin<R: Read>(cli: Cli, stdin: R) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Parse(parse) => {
            Span::current().record("command", field::display("parse"));
            run_parse(parse, stdin)
        }
    }
}

#[instrument(
    name = "cli.parse",
    err,
    skip(command, stdin),
    fields(
        source = field::Empty,
        input_format = ?command.input_format,
        delimiter = %command.delimiter,
    ),
)]
pub(super) fn run_parse<R: Read>(
    command: ParseCommand,
    stdin: R,
) -> Result<ExecutionSummary, CliError> {
    let parser = MatrixParserBuilder::new()
        .with_row_delimiter(command.delimiter)
        .build()?;

    let (source, raw) = read_input(command.text, command.file, stdin)?;
    Span::current().record("source", field::display(source.label()));

    let result = parse_input(&parser, command.input_format, raw.as_deref())?;
    match &result {
        Ok(matrix) => info!(
            rows = matrix.rows(),
            columns = matrix.columns(),
            "input parsed"
        ),
        Err(err) => warn!(
            code = %err.code(),
            row = err.row(),
            error = %err,
            "input rejected"
        ),
    }

    Ok(ExecutionSummary {
        source,
        output: command.output,
        result,
    })
}

/// Reads the raw input, yielding `None` for bytes that are not UTF-8.
fn read_input<R: Read>(
    text: Option<String>,
    file: Option<PathBuf>,
    mut stdin: R,
) -> Result<(InputSource, Option<String>), CliError> {
    if let Some(text) = text {
        return Ok((InputSource::Argument, Some(text)));
    }
    if let Some(path) = file {
        let bytes = fs::read(&path).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        return Ok((InputSource::File(path), String::from_utf8(bytes).ok()));
    }
    let mut bytes = Vec::new();
    stdin
        .read_to_end(&mut bytes)
        .map_err(|source| CliError::Stdin { source })?;
    Ok((InputSource::Stdin, String::from_utf8(bytes).ok()))
}

fn parse_input(
    parser: &MatrixParser,
    format: InputFormat,
    raw: Option<&str>,
) -> Result<Result<Matrix, ParseError>, CliError> {
    match (format, raw) {
        (InputFormat::Text, _) | (InputFormat::Json, None) => Ok(parser.parse(raw)),
        (InputFormat::Json, Some(raw)) => {
            let value: serde_json::Value =
                serde_json::from_str(raw).map_err(|source| CliError::Json { source })?;
            Ok(parser.parse(value.as_str()))
        }
    }
}

/// Renders `summary` to `writer` in the requested output format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use matrixtext_cli::cli::{ExecutionSummary, InputSource, OutputFormat, render_summary};
/// # use matrixtext_core::parse_matrix;
/// let summary = ExecutionSummary {
///     source: InputSource::Argument,
///     output: OutputFormat::Json,
///     result: parse_matrix("1 2, 3 4"),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8_lossy(&buffer), "{\"matrix\":[[1.0,2.0],[3.0,4.0]]}\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.output {
        OutputFormat::Human => render_human(&summary.result, &mut writer),
        OutputFormat::Json => {
            let outcome = ParseOutcome::from(summary.result.clone());
            serde_json::to_writer(&mut writer, &outcome)?;
            writeln!(writer)
        }
    }
}

fn render_human(result: &Result<Matrix, ParseError>, mut writer: impl Write) -> io::Result<()> {
    let matrix = match result {
        Ok(matrix) => matrix,
        Err(err) => return writeln!(writer, "error: {err}"),
    };
    writeln!(writer, "rows: {}", matrix.rows())?;
    writeln!(writer, "columns: {}", matrix.columns())?;
    for row in matrix.iter_rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|&value| CellDisplay(value).to_string())
            .collect();
        writeln!(writer, "{}", cells.join("\t"))?;
    }
    Ok(())
}
