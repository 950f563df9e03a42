use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::ops::apply_binary_op;
use crate::ops::traits::Scalar;

/// Element-wise subtraction `a - b` with 2-D broadcasting.
///
/// Subtracting an N×1 column of row maxima from an N×C score matrix is the
/// shift that keeps the softmax exponentials bounded.
pub fn sub_op<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, LinSoftmaxError> {
    apply_binary_op(a, b, |x, y| x - y, "sub_op")
}
