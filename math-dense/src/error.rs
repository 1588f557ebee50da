//! Error types for the dense kernels.
//!
//! Every kernel reports failure through [`DenseError`] instead of returning a
//! matrix full of NaN or infinities.

use thiserror::Error;

/// Errors that can occur in the dense matrix kernels.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DenseError {
    /// Two operands (or a matrix and its right-hand side) have incompatible sizes.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Size required by the other operand
        expected: usize,
        /// Size actually provided
        got: usize,
    },

    /// The operation needs a square matrix.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The operation needs at least one row and column.
    #[error("matrix is empty")]
    EmptyMatrix,

    /// Unpivoted elimination hit an exact zero on the diagonal.
    #[error("zero pivot at elimination step {step}")]
    ZeroPivot {
        /// Elimination step (diagonal index) of the zero pivot
        step: usize,
    },

    /// The determinant is zero, so the matrix has no inverse.
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,

    /// Pivot step is outside the matrix.
    #[error("pivot step {step} is out of range for a {n}x{n} matrix")]
    PivotOutOfRange {
        /// Requested step
        step: usize,
        /// Matrix dimension
        n: usize,
    },

    /// Row or column index for a minor is outside the matrix.
    #[error("minor index ({row}, {col}) is out of range for a {n}x{n} matrix")]
    IndexOutOfRange {
        /// Row to delete
        row: usize,
        /// Column to delete
        col: usize,
        /// Matrix dimension
        n: usize,
    },
}

/// A specialized `Result` type for dense kernel operations.
pub type Result<T> = std::result::Result<T, DenseError>;

impl DenseError {
    /// Returns `true` if this is a shape-related error.
    ///
    /// This includes `DimensionMismatch`, `NotSquare`, `EmptyMatrix`,
    /// `PivotOutOfRange` and `IndexOutOfRange`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            DenseError::DimensionMismatch { .. }
                | DenseError::NotSquare { .. }
                | DenseError::EmptyMatrix
                | DenseError::PivotOutOfRange { .. }
                | DenseError::IndexOutOfRange { .. }
        )
    }

    /// Returns `true` if the input was numerically unusable.
    ///
    /// This includes `ZeroPivot` and `SingularMatrix`.
    pub fn is_numerical_error(&self) -> bool {
        matches!(
            self,
            DenseError::ZeroPivot { .. } | DenseError::SingularMatrix
        )
    }
}

/// Checks that `rows == cols` and that the matrix is not empty, returning `n`.
pub(crate) fn require_square(rows: usize, cols: usize) -> Result<usize> {
    if rows != cols {
        return Err(DenseError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(DenseError::EmptyMatrix);
    }
    Ok(rows)
}
