//! The dense `Matrix` type and its operation families.
//!
//! Construction and introspection live in `matrix`; arithmetic, shape
//! transforms, activations, operators and console formatting each extend
//! `Matrix` from their own module.
pub mod activation;
pub mod arithmetic;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod transform;

pub use activation::DEFAULT_RELU_LEAK;
pub use matrix::Matrix;
