//! Rectangular numeric matrix produced by the parser.

use std::fmt;

use crate::error::{ParseError, Result};

/// Rectangular matrix of `f64` cells backed by a contiguous row-major buffer.
///
/// A `Matrix` always has at least one row and one column, and every row has
/// the same number of columns.
///
/// # Examples
/// ```
/// use matrixtext_core::parse_matrix;
///
/// let matrix = parse_matrix("1 2, 3 4")?;
/// assert_eq!(matrix.shape(), (2, 2));
/// assert_eq!(matrix.row(1), Some(&[3.0, 4.0][..]));
/// assert_eq!(matrix.get(0, 1), Some(2.0));
/// # Ok::<(), matrixtext_core::ParseError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from validated parts.
    pub(crate) fn from_parts(rows: usize, columns: usize, values: Vec<f64>) -> Self {
        debug_assert!(rows > 0 && columns > 0);
        debug_assert_eq!(values.len(), rows.saturating_mul(columns));
        Self {
            rows,
            columns,
            values,
        }
    }

    /// Builds a matrix from nested rows after validating its shape.
    ///
    /// # Errors
    /// Returns [`ParseError::RaggedMatrix`] if row lengths differ and
    /// [`ParseError::InvalidInput`] if there are no rows or no columns.
    ///
    /// # Examples
    /// ```
    /// use matrixtext_core::{Matrix, ParseError};
    ///
    /// let matrix = Matrix::try_from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    /// assert_eq!(matrix.values(), &[1.0, 2.0, 3.0, 4.0]);
    ///
    /// let err = Matrix::try_from_rows(vec![vec![1.0], vec![2.0, 3.0]]);
    /// assert_eq!(err, Err(ParseError::RaggedMatrix));
    /// # Ok::<(), ParseError>(())
    /// ```
    pub fn try_from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let Some((first, rest)) = rows.split_first() else {
            return Err(ParseError::InvalidInput);
        };
        let columns = first.len();
        if rest.iter().any(|row| row.len() != columns) {
            return Err(ParseError::RaggedMatrix);
        }
        if columns == 0 {
            return Err(ParseError::InvalidInput);
        }
        let row_count = rows.len();
        let values = rows.into_iter().flatten().collect();
        Ok(Self::from_parts(row_count, columns, values))
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns shared by every row.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Returns the underlying row-major buffer.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the row at `index`, or `None` when out of bounds.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.rows {
            return None;
        }
        let start = index.checked_mul(self.columns)?;
        let end = start.checked_add(self.columns)?;
        self.values.get(start..end)
    }

    /// Returns the cell at (`row`, `column`), or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if column >= self.columns {
            return None;
        }
        self.row(row)?.get(column).copied()
    }

    /// Iterates over the rows in order.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.columns)
    }

    /// Copies the matrix into nested rows.
    #[must_use]
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }
}

/// Formats the matrix in the same textual layout the parser accepts: cells
/// separated by a space and rows separated by `", "`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.iter_rows().enumerate() {
            if row_index > 0 {
                f.write_str(", ")?;
            }
            for (column_index, value) in row.iter().enumerate() {
                if column_index > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", CellDisplay(*value))?;
            }
        }
        Ok(())
    }
}

/// Formats a single cell so the parser reads it back unchanged.
///
/// Infinities are spelled `Infinity` and `-Infinity`; finite values use the
/// shortest representation that round-trips.
///
/// # Examples
/// ```
/// use matrixtext_core::CellDisplay;
///
/// assert_eq!(CellDisplay(2.5).to_string(), "2.5");
/// assert_eq!(CellDisplay(f64::NEG_INFINITY).to_string(), "-Infinity");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellDisplay(pub f64);

impl fmt::Display for CellDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(value) = *self;
        if value.is_infinite() {
            let sign = if value.is_sign_negative() { "-" } else { "" };
            return write!(f, "{sign}Infinity");
        }
        write!(f, "{value}")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter_rows())
    }
}
