//! Console rendering of a matrix, one bracketed line per row.
//!
//! This is a display aid only. Values are truncated to two decimals and
//! anything smaller than `0.01` in magnitude prints as `0`, so the output
//! cannot be parsed back into the same matrix.
use std::fmt;

use crate::math::Matrix;

const MIN_FIELD_WIDTH: usize = 4;

/// Field width for every cell, grown by the magnitude of `Matrix::max`.
fn field_width(max: f64) -> usize {
    if max.is_infinite() {
        return MIN_FIELD_WIDTH;
    }
    // NaN and -inf (max of 0.0) both land below the floor after the cast.
    let spc = (max.log10().floor() + 7.0) as i64;
    if spc < 5 {
        MIN_FIELD_WIDTH
    } else {
        spc as usize
    }
}

fn format_cell(n: f64, width: usize) -> String {
    let body = if n.abs() < 0.01 {
        "0".to_string()
    } else {
        let whole = n.abs() as i64;
        let cents = ((n * 100.0) as i64 % 100).abs();
        format!("{}.{:02}", whole, cents)
    };
    let signed = if n > 0.0 {
        format!(" {}", body)
    } else {
        format!("-{}", body)
    };
    format!("{:>width$}", signed, width = width)
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = field_width(self.max());
        for row in 0..self.height() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (idx, &value) in self.row_slice(row).iter().enumerate() {
                if idx > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{}", format_cell(value, width))?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl Matrix {
    /// Print the matrix to stdout.
    pub fn log(&self) {
        println!("{}", self);
    }
}
