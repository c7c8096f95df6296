//! Builder utilities for configuring [`MatrixParser`] instances.

use crate::{cell::is_cell_separator, error::BuilderError, parser::MatrixParser};

/// Row delimiter used when none is configured.
pub const DEFAULT_ROW_DELIMITER: char = ',';

/// Configures and constructs [`MatrixParser`] instances.
///
/// # Examples
/// ```
/// use matrixtext_core::MatrixParserBuilder;
///
/// let parser = MatrixParserBuilder::new()
///     .with_row_delimiter(';')
///     .build()
///     .expect("semicolon is a valid delimiter");
/// let matrix = parser.parse(Some("1 2; 3 4"))?;
/// assert_eq!(matrix.shape(), (2, 2));
/// # Ok::<(), matrixtext_core::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MatrixParserBuilder {
    row_delimiter: char,
}

impl Default for MatrixParserBuilder {
    fn default() -> Self {
        Self {
            row_delimiter: DEFAULT_ROW_DELIMITER,
        }
    }
}

impl MatrixParserBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use matrixtext_core::MatrixParserBuilder;
    ///
    /// assert_eq!(MatrixParserBuilder::new().row_delimiter(), ',');
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the character separating rows.
    #[must_use]
    pub fn with_row_delimiter(mut self, delimiter: char) -> Self {
        self.row_delimiter = delimiter;
        self
    }

    /// Returns the configured row delimiter.
    #[must_use]
    pub fn row_delimiter(&self) -> char {
        self.row_delimiter
    }

    /// Validates the configuration and constructs a [`MatrixParser`].
    ///
    /// # Errors
    /// Returns [`BuilderError::WhitespaceDelimiter`] when the delimiter is
    /// whitespace or a byte order mark, and [`BuilderError::ConflictingDelimiter`] when it is
    /// alphanumeric or one of `.`, `+`, `-`, any of which may appear inside a
    /// number.
    ///
    /// # Examples
    /// ```
    /// use matrixtext_core::{BuilderError, MatrixParserBuilder};
    ///
    /// let err = MatrixParserBuilder::new()
    ///     .with_row_delimiter('\t')
    ///     .build()
    ///     .expect_err("tab separates cells");
    /// assert_eq!(err, BuilderError::WhitespaceDelimiter { delimiter: '\t' });
    /// ```
    pub fn build(self) -> Result<MatrixParser, BuilderError> {
        let delimiter = self.row_delimiter;
        if delimiter.is_whitespace() || is_cell_separator(delimiter) {
            return Err(BuilderError::WhitespaceDelimiter { delimiter });
        }
        if delimiter.is_alphanumeric() || matches!(delimiter, '.' | '+' | '-') {
            return Err(BuilderError::ConflictingDelimiter { delimiter });
        }
        Ok(MatrixParser::new(delimiter))
    }
}
