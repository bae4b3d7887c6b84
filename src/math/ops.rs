//! Operator overloads over the named methods.
//!
//! `*` between two matrices is the matrix product (`dot`), `*` with a scalar
//! scales. Matrix-matrix operators panic on a shape mismatch; call `plus`,
//! `minus` or `dot` directly to get a `Result` instead.
//!
//! There is no `MulAssign<&Matrix>`: `*` already means the matrix product,
//! so an in-place `*=` would be ambiguous. Use `mul_assign_matrix` for the
//! in-place Hadamard product.
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::MatrixError;
use crate::math::Matrix;

fn expect_shape(result: Result<Matrix, MatrixError>) -> Matrix {
    match result {
        Ok(m) => m,
        Err(err) => panic!("{}", err),
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Matrix {
        expect_shape(Matrix::plus(self, rhs))
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Matrix {
        expect_shape(Matrix::minus(self, rhs))
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Matrix {
        expect_shape(Matrix::dot(self, rhs))
    }
}

impl<'a> Add<f64> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: f64) -> Matrix {
        self.add_scalar(rhs)
    }
}

impl<'a> Sub<f64> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: f64) -> Matrix {
        self.add_scalar(-rhs)
    }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.multiply_scalar(rhs)
    }
}

impl<'a> Div<f64> for &'a Matrix {
    type Output = Matrix;

    fn div(self, rhs: f64) -> Matrix {
        self.divide_scalar(rhs)
    }
}

impl<'a> Neg for &'a Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.negative()
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.negative()
    }
}

// Owned operands forward to the borrowed impls above.
macro_rules! forward_owned {
    (matrix $imp:ident, $method:ident) => {
        impl $imp<Matrix> for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: Matrix) -> Matrix {
                $imp::$method(&self, &rhs)
            }
        }

        impl<'b> $imp<&'b Matrix> for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: &'b Matrix) -> Matrix {
                $imp::$method(&self, rhs)
            }
        }
    };
    (scalar $imp:ident, $method:ident) => {
        impl $imp<f64> for Matrix {
            type Output = Matrix;

            fn $method(self, rhs: f64) -> Matrix {
                $imp::$method(&self, rhs)
            }
        }
    };
}

forward_owned!(matrix Add, add);
forward_owned!(matrix Sub, sub);
forward_owned!(matrix Mul, mul);
forward_owned!(scalar Add, add);
forward_owned!(scalar Sub, sub);
forward_owned!(scalar Mul, mul);
forward_owned!(scalar Div, div);

impl AddAssign<f64> for Matrix {
    fn add_assign(&mut self, rhs: f64) {
        self.add_assign_scalar(rhs);
    }
}

impl SubAssign<f64> for Matrix {
    fn sub_assign(&mut self, rhs: f64) {
        self.sub_assign_scalar(rhs);
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        self.mul_assign_scalar(rhs);
    }
}

impl DivAssign<f64> for Matrix {
    fn div_assign(&mut self, rhs: f64) {
        self.div_assign_scalar(rhs);
    }
}

impl<'b> AddAssign<&'b Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &'b Matrix) {
        if let Err(err) = self.add_assign_matrix(rhs) {
            panic!("{}", err);
        }
    }
}

impl<'b> SubAssign<&'b Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &'b Matrix) {
        if let Err(err) = self.sub_assign_matrix(rhs) {
            panic!("{}", err);
        }
    }
}
