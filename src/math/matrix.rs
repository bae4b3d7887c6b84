use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::error::MatrixError;
use crate::rng;

/// Resolution of `Matrix::random`: draws are multiples of `1 / RANDOM_STEPS`.
const RANDOM_STEPS: u32 = 1_000_000;

/// A dense, row-major matrix of `f64`.
///
/// Every operation that returns a `Matrix` builds a fresh one; the receiver
/// is only changed by the compound-assignment style methods and operators.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Build a matrix from a list of rows.
    ///
    /// ```
    /// use nn_matrix::Matrix;
    ///
    /// let m = Matrix::create(vec![vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]]).unwrap();
    /// assert_eq!(m.shape(), (3, 2));
    /// ```
    ///
    /// Returns `MatrixError::Empty` if there are no rows or the first row is
    /// empty, and `MatrixError::Jagged` if any row differs in length from the
    /// first.
    pub fn create(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(MatrixError::Empty);
        }

        let mut data = Vec::with_capacity(height * width);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(MatrixError::Jagged {
                    row: idx,
                    expected: width,
                    found: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            rows: height,
            cols: width,
        })
    }

    /// An `h x w` matrix of zeros.
    pub fn zerofill(h: usize, w: usize) -> Self {
        Self::filled(h, w, 0.0)
    }

    pub(crate) fn filled(h: usize, w: usize, value: f64) -> Self {
        Self {
            data: vec![value; h * w],
            rows: h,
            cols: w,
        }
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// An `h x w` matrix of values drawn uniformly from `[0, 1)` in steps of
    /// `0.000001`, using the process-wide generator (see [`crate::rng`]).
    pub fn random(h: usize, w: usize) -> Self {
        rng::with_rng(|r| Self::random_with(h, w, r))
    }

    /// Like [`Matrix::random`] but drawing from a caller-owned generator.
    pub fn random_with<R: Rng>(h: usize, w: usize, rng: &mut R) -> Self {
        let data = (0..h * w)
            .map(|_| rng.gen_range(0..RANDOM_STEPS) as f64 / RANDOM_STEPS as f64)
            .collect();
        Self::from_parts(h, w, data)
    }

    pub fn height(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.cols
    }

    /// `(height, width)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Copy the contents out as one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    /// Largest element, starting from a floor of `0.0`.
    ///
    /// A matrix whose elements are all negative therefore reports `0.0`.
    /// Use [`Matrix::true_max`] for the actual largest element.
    pub fn max(&self) -> f64 {
        self.data
            .iter()
            .fold(0.0, |max, &v| if v > max { v } else { max })
    }

    /// Largest element with no floor, ignoring NaN.
    pub fn true_max(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |max, v| match max {
                Some(m) if m >= v => Some(m),
                _ => Some(v),
            })
    }

    /// Sum of all elements, accumulated in row-major order.
    pub fn sum(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, &v| acc + v)
    }

    /// Apply `f` to every element, returning a new matrix of the same shape.
    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().copied().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Combine two equally shaped matrices element by element.
    pub(crate) fn zip_with<F>(
        &self,
        other: &Matrix,
        op: &'static str,
        mut f: F,
    ) -> Result<Matrix, MatrixError>
    where
        F: FnMut(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(self.mismatch(op, other));
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub(crate) fn mismatch(&self, op: &'static str, other: &Matrix) -> MatrixError {
        log::debug!(
            "Matrix {} rejected: A is {}x{}, B is {}x{}",
            op,
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );
        MatrixError::ShapeMismatch {
            op,
            left: self.shape(),
            right: other.shape(),
        }
    }

    /// Replace the receiver's contents wholesale with `result`.
    pub(crate) fn replace_with(&mut self, result: Matrix) {
        *self = result;
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(index.1 < self.cols, "column index out of bounds");
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(index.1 < self.cols, "column index out of bounds");
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}
