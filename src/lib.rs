//! nn-matrix: a small dense matrix type for neural-network prototyping.
//!
//! `Matrix` is a row-major `f64` value type with scalar and matrix
//! arithmetic, shape transforms (transpose, flips, quarter-turn rotations),
//! activation functions and a console pretty-printer. It is meant for toy
//! layers and experiments rather than fast linear algebra.
//!
//! Matrix-matrix operations return `Result<_, MatrixError>` when shapes do
//! not line up; random fills draw from a seedable process-wide generator in
//! [`rng`].
pub mod config;
pub mod error;
pub mod math;
pub mod rng;

pub use config::{Activation, MatrixConfig};
pub use error::MatrixError;
pub use math::Matrix;
