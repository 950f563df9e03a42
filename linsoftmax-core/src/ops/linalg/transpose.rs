use crate::matrix::Matrix;
use crate::ops::traits::Scalar;

/// Returns the transpose of `a`: an (N×M) matrix for an (M×N) input.
pub fn transpose_op<T: Scalar>(a: &Matrix<T>) -> Matrix<T> {
    let (m, n) = (a.rows, a.cols);
    let mut data = Vec::with_capacity(m * n);
    for c in 0..n {
        for r in 0..m {
            data.push(a.data[r * n + c]);
        }
    }
    Matrix { data, rows: n, cols: m }
}
