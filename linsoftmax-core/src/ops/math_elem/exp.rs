// src/ops/math_elem/exp.rs

use crate::matrix::Matrix;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;

/// Computes the element-wise exponential \( e^x \).
///
/// # Overflow
/// For `f64`, inputs above roughly 709.78 overflow to `+inf`; for `f32` the
/// limit is roughly 88.72. Callers that exponentiate raw scores should shift
/// them by their row maximum first.
pub fn exp_op<T: Scalar>(a: &Matrix<T>) -> Matrix<T> {
    apply_unary_op(a, |x| x.exp())
}
