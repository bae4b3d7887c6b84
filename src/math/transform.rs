//! Shape transforms. Flips and rotations are built from `transpose` and
//! `flip_columns` so that every composition is exact.
use crate::math::Matrix;

impl Matrix {
    /// `width x height` matrix with `out[i][j] = self[j][i]`.
    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = self.shape();
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..cols {
            for j in 0..rows {
                data.push(self[(j, i)]);
            }
        }
        Matrix::from_parts(cols, rows, data)
    }

    /// Reverse the order of the rows (a vertical mirror).
    pub fn flip_columns(&self) -> Matrix {
        let (rows, cols) = self.shape();
        let mut data = Vec::with_capacity(rows * cols);
        for i in (0..rows).rev() {
            data.extend_from_slice(self.row_slice(i));
        }
        Matrix::from_parts(rows, cols, data)
    }

    /// Reverse the order of the columns (a horizontal mirror).
    pub fn flip_rows(&self) -> Matrix {
        self.transpose().flip_columns().transpose()
    }

    /// Rotate 90 degrees anti-clockwise.
    pub fn rotate_left(&self) -> Matrix {
        self.transpose().flip_columns()
    }

    /// Rotate 90 degrees clockwise.
    pub fn rotate_right(&self) -> Matrix {
        self.rotate_left().rotate_left().rotate_left()
    }
}
