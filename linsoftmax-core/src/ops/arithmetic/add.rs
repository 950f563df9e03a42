use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::ops::apply_binary_op;
use crate::ops::traits::Scalar;

/// Element-wise addition `a + b` with 2-D broadcasting.
pub fn add_op<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, LinSoftmaxError> {
    apply_binary_op(a, b, |x, y| x + y, "add_op")
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
