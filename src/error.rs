use std::error::Error;
use std::fmt;

/// Errors produced by matrix construction and matrix-matrix operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for `op`. Shapes are `(height, width)`.
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// No rows, or a zero-length first row.
    Empty,
    /// Row `row` has `found` elements where `expected` were required.
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::ShapeMismatch { op: "dot", left, right } => write!(
                f,
                "cannot compute dot product: matrix A has width {} but matrix B has height {} (A is {}x{}, B is {}x{})",
                left.1, right.0, left.0, left.1, right.0, right.1
            ),
            MatrixError::ShapeMismatch { op, left, right } => write!(
                f,
                "cannot {} matrices of different sizes: matrix A is {}x{}, matrix B is {}x{}",
                op, left.0, left.1, right.0, right.1
            ),
            MatrixError::Empty => write!(f, "matrix must have at least one row and one column"),
            MatrixError::Jagged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} elements, expected {}",
                row, found, expected
            ),
        }
    }
}

impl Error for MatrixError {}
