//! matrixtext core library.
//!
//! Turns user-entered text such as `"1 2, 3 4"` into a rectangular numeric
//! [`Matrix`]. Rows are separated by a delimiter (a comma unless configured
//! otherwise through [`MatrixParserBuilder`]) and cells within a row by
//! whitespace. Failures are ordinary [`ParseError`] values carrying stable
//! [`ParseErrorCode`]s.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod cell;
mod error;
mod matrix;
mod outcome;
mod parser;
pub mod theme;

pub use crate::{
    builder::{DEFAULT_ROW_DELIMITER, MatrixParserBuilder},
    error::{BuilderError, BuilderErrorCode, ParseError, ParseErrorCode, Result},
    matrix::{CellDisplay, Matrix},
    outcome::ParseOutcome,
    parser::{MatrixParser, parse_matrix, parse_raw},
};
