use super::utils::reduction_output_shape;
use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::ops::traits::Scalar;

/// Maximum along `axis`, keeping the reduced dimension as size 1.
///
/// NaN entries are ignored unless a whole slice is NaN (`Float::max` semantics).
///
/// # Errors
/// * `IndexOutOfBounds` if `axis > 1`.
/// * `ShapeMismatch` if the reduced axis is empty, since the max of nothing is undefined.
pub fn max_axis_op<T: Scalar>(a: &Matrix<T>, axis: usize) -> Result<Matrix<T>, LinSoftmaxError> {
    let [out_rows, out_cols] = reduction_output_shape(a.shape(), axis)?;
    let reduced_len = if axis == 0 { a.rows } else { a.cols };
    if reduced_len == 0 {
        return Err(LinSoftmaxError::ShapeMismatch {
            expected: vec![1],
            actual: vec![0],
            operation: "max_axis_op (empty axis)".to_string(),
        });
    }

    let mut out = vec![T::neg_infinity(); out_rows * out_cols];
    for r in 0..a.rows {
        for (c, &v) in a.row(r).iter().enumerate() {
            let slot = if axis == 0 { &mut out[c] } else { &mut out[r] };
            *slot = slot.max(v);
        }
    }
    Matrix::new(out, out_rows, out_cols)
}

#[cfg(test)]
#[path = "max_test.rs"]
mod tests;
