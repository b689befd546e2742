//! Error types for matriz operations.
//!
//! Every failure the library can report is a [`MatrizError`]. The variants
//! separate structural problems (wrong shape), bad elements (a cell that is
//! not a plain number), bad operands (a usable value of the wrong kind),
//! non-square misuse, and capabilities that are absent by design, so callers
//! can tell "your input was bad" apart from "this is not a feature".

use std::fmt;

/// Main error type for matriz operations.
///
/// # Examples
///
/// ```
/// use matriz::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x2".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Matrix shapes don't fit the operation, or raw row data does not form
    /// a rectangular, non-empty grid.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// A cell of the raw input is not a plain number.
    InvalidElement {
        /// Rendition of the offending value
        value: String,
        /// Row index of the offending cell
        row: usize,
        /// Column index of the offending cell
        col: usize,
    },

    /// An operand has the right type but the wrong capability, e.g. a
    /// non-integer power exponent.
    InvalidOperation {
        /// What was wrong with the operand
        reason: String,
    },

    /// An operation requiring a square matrix was invoked on a non-square one.
    NotSquare {
        /// Row count of the offending matrix
        rows: usize,
        /// Column count of the offending matrix
        cols: usize,
    },

    /// The requested capability is absent by design (e.g. negative matrix
    /// powers). Distinct from the domain errors above.
    Unsupported {
        /// Name of the absent capability
        capability: String,
    },

    /// Serialization/deserialization error.
    Serialization(String),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::InvalidElement { value, row, col } => {
                write!(
                    f,
                    "matrix elements must be numeric, got {value} at index ({row}, {col})"
                )
            }
            MatrizError::InvalidOperation { reason } => {
                write!(f, "invalid operation: {reason}")
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "matrix must be square, got {rows}x{cols}")
            }
            MatrizError::Unsupported { capability } => {
                write!(f, "unsupported capability: {capability}")
            }
            MatrizError::Serialization(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for MatrizError {}

impl From<serde_json::Error> for MatrizError {
    fn from(err: serde_json::Error) -> Self {
        MatrizError::Serialization(err.to_string())
    }
}

impl MatrizError {
    /// Create a dimension mismatch error from two shape descriptions.
    #[must_use]
    pub fn dimension_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a dimension mismatch error from two (rows, cols) shapes.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create an invalid element error for the cell at (row, col).
    #[must_use]
    pub fn invalid_element(value: impl fmt::Display, row: usize, col: usize) -> Self {
        Self::InvalidElement {
            value: value.to_string(),
            row,
            col,
        }
    }

    /// Create an unsupported capability error.
    #[must_use]
    pub fn unsupported(capability: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: capability.into(),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for MatrizError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<MatrizError> for &str {
    fn eq(&self, other: &MatrizError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
