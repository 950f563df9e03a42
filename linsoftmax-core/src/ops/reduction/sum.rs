use super::utils::reduction_output_shape;
use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::ops::traits::Scalar;

/// Sum along `axis`, keeping the reduced dimension as size 1.
/// Summing an empty axis yields zeros.
pub fn sum_axis_op<T: Scalar>(a: &Matrix<T>, axis: usize) -> Result<Matrix<T>, LinSoftmaxError> {
    let [out_rows, out_cols] = reduction_output_shape(a.shape(), axis)?;
    let mut out = vec![T::zero(); out_rows * out_cols];
    for r in 0..a.rows {
        for (c, &v) in a.row(r).iter().enumerate() {
            if axis == 0 {
                out[c] += v;
            } else {
                out[r] += v;
            }
        }
    }
    Matrix::new(out, out_rows, out_cols)
}

/// Sum of every element.
pub fn sum_all_op<T: Scalar>(a: &Matrix<T>) -> T {
    a.data.iter().copied().sum()
}

/// Σ a², the squared Frobenius norm used by the L2 penalty.
pub fn sum_squares_op<T: Scalar>(a: &Matrix<T>) -> T {
    a.data.iter().map(|&v| v * v).sum()
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
