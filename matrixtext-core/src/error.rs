//! Error types for the matrixtext core library.
//!
//! Defines the parse and builder error enums exposed by the public API, their
//! stable machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while turning raw text into a [`crate::Matrix`].
///
/// Row numbers are 1-based so they can be shown to the person who typed the
/// input without translation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    /// Input was missing, empty, whitespace-only, or not textual.
    #[error("empty or invalid input")]
    InvalidInput,
    /// A row contained a token that does not convert to a number.
    #[error("row {row} contains non-numeric values")]
    NonNumericCell {
        /// 1-based index of the offending row.
        row: usize,
    },
    /// Rows did not all share the first row's column count.
    #[error("all rows must have the same number of columns")]
    RaggedMatrix,
}

define_error_codes! {
    /// Stable codes describing [`ParseError`] variants.
    enum ParseErrorCode for ParseError {
        /// Input was missing, empty, or not textual.
        InvalidInput => InvalidInput => "PARSE_INVALID_INPUT",
        /// A row contained a non-numeric token.
        NonNumericCell => NonNumericCell { .. } => "PARSE_NON_NUMERIC_CELL",
        /// Rows had inconsistent lengths.
        RaggedMatrix => RaggedMatrix => "PARSE_RAGGED_MATRIX",
    }
}

impl ParseError {
    /// Returns the 1-based row associated with the error, if any.
    ///
    /// Only [`ParseError::NonNumericCell`] carries a row; ragged matrices are
    /// reported without one.
    ///
    /// # Examples
    /// ```
    /// use matrixtext_core::ParseError;
    ///
    /// assert_eq!(ParseError::NonNumericCell { row: 2 }.row(), Some(2));
    /// assert_eq!(ParseError::RaggedMatrix.row(), None);
    /// ```
    #[must_use]
    pub const fn row(&self) -> Option<usize> {
        match self {
            Self::NonNumericCell { row } => Some(*row),
            Self::InvalidInput | Self::RaggedMatrix => None,
        }
    }
}

/// Error type produced when validating a [`crate::MatrixParserBuilder`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BuilderError {
    /// Whitespace already separates cells and cannot also delimit rows.
    #[error("row delimiter {delimiter:?} is whitespace")]
    WhitespaceDelimiter {
        /// The rejected delimiter.
        delimiter: char,
    },
    /// The delimiter can appear inside a numeric token.
    #[error("row delimiter {delimiter:?} conflicts with number syntax")]
    ConflictingDelimiter {
        /// The rejected delimiter.
        delimiter: char,
    },
}

define_error_codes! {
    /// Stable codes describing [`BuilderError`] variants.
    enum BuilderErrorCode for BuilderError {
        /// Whitespace delimiters are rejected.
        WhitespaceDelimiter => WhitespaceDelimiter { .. } => "BUILDER_WHITESPACE_DELIMITER",
        /// Delimiters that collide with number syntax are rejected.
        ConflictingDelimiter => ConflictingDelimiter { .. } => "BUILDER_CONFLICTING_DELIMITER",
    }
}

/// Convenient alias for results returned by the parsing API.
pub type Result<T> = core::result::Result<T, ParseError>;
