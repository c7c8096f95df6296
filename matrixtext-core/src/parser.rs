//! Text-to-matrix parsing.
//!
//! Provides the [`MatrixParser`] entry point plus free functions that parse
//! with the default configuration. Parsing is a pure function of its input:
//! failures come back as [`ParseError`] values and no state survives a call.

use tracing::{Level, Span, field, instrument};

use crate::{
    Result,
    builder::DEFAULT_ROW_DELIMITER,
    cell::{is_cell_separator, parse_cell},
    error::ParseError,
    matrix::Matrix,
};

/// Value of the single cell a blank row contributes.
const BLANK_ROW_VALUE: f64 = 0.0;

/// Parses whitespace-separated cells arranged in delimited rows.
///
/// # Examples
/// ```
/// use matrixtext_core::{MatrixParser, ParseError};
///
/// let parser = MatrixParser::default();
/// let matrix = parser.parse(Some("1 2, 3 4"))?;
/// assert_eq!(matrix.to_nested(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
///
/// assert_eq!(parser.parse(None), Err(ParseError::InvalidInput));
/// assert_eq!(
///     parser.parse(Some("1 2, a 4")),
///     Err(ParseError::NonNumericCell { row: 2 })
/// );
/// # Ok::<(), ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MatrixParser {
    row_delimiter: char,
}

impl Default for MatrixParser {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_DELIMITER)
    }
}

impl MatrixParser {
    pub(crate) const fn new(row_delimiter: char) -> Self {
        Self { row_delimiter }
    }

    /// Returns the character separating rows.
    #[must_use]
    pub fn row_delimiter(&self) -> char {
        self.row_delimiter
    }

    /// Parses `input` into a rectangular [`Matrix`].
    ///
    /// `None` stands for an absent or non-textual value. A row holding no
    /// tokens, including the sole row of whitespace-only input, reads as a
    /// single `0` cell.
    ///
    /// # Errors
    /// - [`ParseError::InvalidInput`] when `input` is `None` or empty.
    /// - [`ParseError::NonNumericCell`] naming the first row (1-based) holding
    ///   a token that is not a number. Later rows are not examined.
    /// - [`ParseError::RaggedMatrix`] when any row's length differs from the
    ///   first row's.
    #[instrument(
        name = "core.parse_matrix",
        err(level = Level::DEBUG),
        skip(self, input),
        fields(
            delimiter = %self.row_delimiter,
            bytes = input.map_or(0, str::len),
            rows = field::Empty,
            columns = field::Empty,
        ),
    )]
    pub fn parse(&self, input: Option<&str>) -> Result<Matrix> {
        let Some(text) = input.filter(|text| !text.is_empty()) else {
            return Err(ParseError::InvalidInput);
        };

        let mut values = Vec::new();
        let mut widths = Vec::new();
        for (index, segment) in text
            .trim_matches(is_cell_separator)
            .split(self.row_delimiter)
            .enumerate()
        {
            let row = index.saturating_add(1);
            let start = values.len();
            for token in segment
                .split(is_cell_separator)
                .filter(|token| !token.is_empty())
            {
                let value = parse_cell(token).ok_or(ParseError::NonNumericCell { row })?;
                values.push(value);
            }
            if values.len() == start {
                values.push(BLANK_ROW_VALUE);
            }
            widths.push(values.len().saturating_sub(start));
        }

        let columns = widths.first().copied().unwrap_or_default();
        if widths.iter().any(|&width| width != columns) {
            return Err(ParseError::RaggedMatrix);
        }

        let span = Span::current();
        span.record("rows", widths.len());
        span.record("columns", columns);
        Ok(Matrix::from_parts(widths.len(), columns, values))
    }
}

/// Parses `input` with the default configuration.
///
/// # Errors
/// See [`MatrixParser::parse`].
///
/// # Examples
/// ```
/// use matrixtext_core::{ParseError, parse_matrix};
///
/// let matrix = parse_matrix("  1   2 , 3  4  ")?;
/// assert_eq!(matrix.to_nested(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
/// assert_eq!(parse_matrix("1 2 3, 4 5"), Err(ParseError::RaggedMatrix));
/// # Ok::<(), ParseError>(())
/// ```
pub fn parse_matrix(input: &str) -> Result<Matrix> {
    MatrixParser::default().parse(Some(input))
}

/// Parses a possibly absent value with the default configuration.
///
/// # Errors
/// See [`MatrixParser::parse`].
///
/// # Examples
/// ```
/// use matrixtext_core::{ParseError, parse_raw};
///
/// assert_eq!(parse_raw(None), Err(ParseError::InvalidInput));
/// assert_eq!(parse_raw(Some("")), Err(ParseError::InvalidInput));
/// ```
pub fn parse_raw(input: Option<&str>) -> Result<Matrix> {
    MatrixParser::default().parse(input)
}
