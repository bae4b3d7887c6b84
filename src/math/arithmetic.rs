//! Scalar and matrix-matrix arithmetic.
//!
//! Matrix-matrix operations check shapes up front and return
//! `MatrixError::ShapeMismatch` without computing anything when the
//! operands are incompatible.
use crate::error::MatrixError;
use crate::math::Matrix;

impl Matrix {
    /// Multiply every element by `-1`.
    pub fn negative(&self) -> Matrix {
        self.map(|v| -v)
    }

    /// Add `n` to every element.
    ///
    /// ```text
    /// [0  1]       [5  6]
    /// [2  3] + 5 = [7  8]
    /// ```
    pub fn add_scalar(&self, n: f64) -> Matrix {
        self.map(|v| v + n)
    }

    pub fn multiply_scalar(&self, n: f64) -> Matrix {
        self.map(|v| v * n)
    }

    /// Divide every element by `n`. Dividing by zero yields infinities or NaN.
    pub fn divide_scalar(&self, n: f64) -> Matrix {
        self.map(|v| v / n)
    }

    /// Elementwise sum. Both matrices must have the same shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Elementwise (Hadamard) product. Both matrices must have the same shape.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "multiply", |a, b| a * b)
    }

    /// Matrix product of an `m x n` and an `n x p` matrix, giving `m x p`.
    pub fn dot(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.width() != other.height() {
            return Err(self.mismatch("dot", other));
        }

        let (m, p) = (self.height(), other.width());
        let mut data = Vec::with_capacity(m * p);
        for i in 0..m {
            let row = self.row_slice(i);
            for j in 0..p {
                let val = row
                    .iter()
                    .enumerate()
                    .fold(0.0, |acc, (k, &a)| acc + a * other[(k, j)]);
                data.push(val);
            }
        }
        Ok(Matrix::from_parts(m, p, data))
    }

    /// Alias of [`Matrix::add`].
    pub fn plus(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.add(other)
    }

    /// `self + (-other)`.
    pub fn minus(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.add(&other.negative()).map_err(|err| match err {
            MatrixError::ShapeMismatch { left, right, .. } => MatrixError::ShapeMismatch {
                op: "subtract",
                left,
                right,
            },
            other => other,
        })
    }

    /// Alias of [`Matrix::multiply_scalar`].
    pub fn scale(&self, n: f64) -> Matrix {
        self.multiply_scalar(n)
    }

    // In-place variants. Each computes the value-returning result and then
    // swaps it in, so the receiver is never partially updated.

    pub fn add_assign_scalar(&mut self, n: f64) {
        let result = self.add_scalar(n);
        self.replace_with(result);
    }

    pub fn sub_assign_scalar(&mut self, n: f64) {
        let result = self.add_scalar(-n);
        self.replace_with(result);
    }

    pub fn mul_assign_scalar(&mut self, n: f64) {
        let result = self.multiply_scalar(n);
        self.replace_with(result);
    }

    pub fn div_assign_scalar(&mut self, n: f64) {
        let result = self.divide_scalar(n);
        self.replace_with(result);
    }

    /// Add `1.0` to every element in place.
    pub fn increment(&mut self) {
        self.add_assign_scalar(1.0);
    }

    /// Subtract `1.0` from every element in place.
    pub fn decrement(&mut self) {
        self.sub_assign_scalar(1.0);
    }

    /// In-place [`Matrix::add`]. On error the receiver is left untouched.
    pub fn add_assign_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        let result = self.add(other)?;
        self.replace_with(result);
        Ok(())
    }

    /// In-place [`Matrix::minus`]. On error the receiver is left untouched.
    pub fn sub_assign_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        let result = self.minus(other)?;
        self.replace_with(result);
        Ok(())
    }

    /// In-place [`Matrix::multiply`]. On error the receiver is left untouched.
    pub fn mul_assign_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        let result = self.multiply(other)?;
        self.replace_with(result);
        Ok(())
    }
}
