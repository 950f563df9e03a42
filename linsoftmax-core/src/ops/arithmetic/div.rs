use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::ops::apply_binary_op;
use crate::ops::traits::Scalar;

/// Element-wise division `a / b` with 2-D broadcasting.
///
/// Division by zero follows IEEE semantics (`inf` or `NaN`), it is not an error.
pub fn div_op<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, LinSoftmaxError> {
    apply_binary_op(a, b, |x, y| x / y, "div_op")
}
