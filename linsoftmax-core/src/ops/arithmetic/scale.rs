use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;

/// Multiplies every element by `scalar`.
pub fn mul_scalar_op<T: Scalar>(a: &Matrix<T>, scalar: T) -> Matrix<T> {
    apply_unary_op(a, |x| x * scalar)
}

/// Computes `a + scalar * b` for two matrices of identical shape.
///
/// Used to fold the regularization gradient (`coeff * W`) into the data gradient.
///
/// # Errors
/// Returns `ShapeMismatch` if the shapes differ; no broadcasting is applied.
pub fn add_scaled_op<T: Scalar>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    scalar: T,
) -> Result<Matrix<T>, LinSoftmaxError> {
    if a.shape() != b.shape() {
        return Err(LinSoftmaxError::ShapeMismatch {
            expected: a.shape().to_vec(),
            actual: b.shape().to_vec(),
            operation: "add_scaled_op".to_string(),
        });
    }
    let data = a
        .data
        .iter()
        .zip(&b.data)
        .map(|(&x, &y)| x + scalar * y)
        .collect();
    Ok(Matrix {
        data,
        rows: a.rows,
        cols: a.cols,
    })
}

#[cfg(test)]
#[path = "scale_test.rs"]
mod tests;
