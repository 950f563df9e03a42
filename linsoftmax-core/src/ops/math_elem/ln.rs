// src/ops/math_elem/ln.rs

use crate::matrix::Matrix;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;

/// Computes the element-wise natural logarithm (base \( e \)).
///
/// # Domain Considerations
/// The natural logarithm is only defined for strictly positive numbers.
/// `ln(0)` returns `-inf` and negative inputs return `NaN`, as IEEE 754 specifies.
pub fn ln_op<T: Scalar>(a: &Matrix<T>) -> Matrix<T> {
    apply_unary_op(a, |x| x.ln())
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
