// Matrix products used by the loss: scores `X·W`, per-example `x_i·W` and the
// gradient contraction `Xᵀ·dscores`.

use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::ops::traits::Scalar;

/// Performs matrix multiplication C = A @ B.
/// A: [M, K], B: [K, N] -> C: [M, N]
///
/// Uses the i-k-j loop order so the innermost loop walks both `B` and `C`
/// contiguously.
///
/// # Errors
/// Returns `ShapeMismatch` with operation `"matmul (inner dim)"` when the
/// inner dimensions disagree.
pub fn matmul_op<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, LinSoftmaxError> {
    if a.cols != b.rows {
        return Err(LinSoftmaxError::ShapeMismatch {
            expected: vec![a.cols, b.cols],
            actual: b.shape().to_vec(),
            operation: "matmul (inner dim)".to_string(),
        });
    }

    let (m, k, n) = (a.rows, a.cols, b.cols);
    let mut output = vec![T::zero(); m * n];
    for i in 0..m {
        let out_row = &mut output[i * n..(i + 1) * n];
        for l in 0..k {
            let a_il = a.data[i * k + l];
            let b_row = &b.data[l * n..(l + 1) * n];
            for (o, &b_lj) in out_row.iter_mut().zip(b_row) {
                *o += a_il * b_lj;
            }
        }
    }
    Matrix::new(output, m, n)
}

/// Multiplies a single row vector `x` (length K) by `B` (K×N).
pub fn row_matmul_op<T: Scalar>(x: &[T], b: &Matrix<T>) -> Result<Vec<T>, LinSoftmaxError> {
    if x.len() != b.rows {
        return Err(LinSoftmaxError::ShapeMismatch {
            expected: vec![b.rows],
            actual: vec![x.len()],
            operation: "row_matmul (inner dim)".to_string(),
        });
    }
    let mut output = vec![T::zero(); b.cols];
    for (l, &x_l) in x.iter().enumerate() {
        for (o, &b_lj) in output.iter_mut().zip(b.row(l)) {
            *o += x_l * b_lj;
        }
    }
    Ok(output)
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
