//! Tagged parse outcome for callers that hand results across a wire.

use crate::{Result, error::ParseError, matrix::Matrix};

/// Either the parsed matrix or the message describing why parsing failed.
///
/// With the `serde` feature enabled this serialises to exactly one of
/// `{"matrix": [[...], ...]}` or `{"error": "..."}`.
///
/// # Examples
/// ```
/// use matrixtext_core::{ParseOutcome, parse_matrix};
///
/// let outcome = ParseOutcome::from(parse_matrix("1 2, a 4"));
/// assert_eq!(outcome.error(), Some("row 2 contains non-numeric values"));
/// assert!(outcome.matrix().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParseOutcome {
    /// Parsing succeeded.
    Matrix(Matrix),
    /// Parsing failed with the given message.
    Error(String),
}

impl ParseOutcome {
    /// Returns the matrix when parsing succeeded.
    #[must_use]
    pub fn matrix(&self) -> Option<&Matrix> {
        match self {
            Self::Matrix(matrix) => Some(matrix),
            Self::Error(_) => None,
        }
    }

    /// Returns the error message when parsing failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Matrix(_) => None,
            Self::Error(message) => Some(message),
        }
    }

    /// Reports whether the outcome holds a matrix.
    #[must_use]
    pub fn is_matrix(&self) -> bool {
        matches!(self, Self::Matrix(_))
    }
}

impl From<Result<Matrix>> for ParseOutcome {
    fn from(result: Result<Matrix>) -> Self {
        match result {
            Ok(matrix) => Self::Matrix(matrix),
            Err(error) => Self::from(error),
        }
    }
}

impl From<ParseError> for ParseOutcome {
    fn from(error: ParseError) -> Self {
        Self::Error(error.to_string())
    }
}
