//! Paired ("fancy") indexing: element `k` addresses `a[rows[k], cols[k]]`.
//!
//! With `rows = 0..N` and `cols = y` this selects, or updates, the target-class
//! entry of every example in one call.

use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::ops::traits::Scalar;

fn check_pairs<T: Scalar>(
    a: &Matrix<T>,
    rows: &[usize],
    cols: &[usize],
    op_name: &str,
) -> Result<(), LinSoftmaxError> {
    if rows.len() != cols.len() {
        return Err(LinSoftmaxError::ShapeMismatch {
            expected: vec![rows.len()],
            actual: vec![cols.len()],
            operation: format!("{} (index lengths)", op_name),
        });
    }
    if let Some((&r, &c)) = rows
        .iter()
        .zip(cols)
        .find(|&(&r, &c)| r >= a.rows || c >= a.cols)
    {
        return Err(LinSoftmaxError::IndexOutOfBounds {
            index: vec![r, c],
            shape: a.shape().to_vec(),
        });
    }
    Ok(())
}

/// Gathers `a[rows[k], cols[k]]` for every `k` into a column matrix.
///
/// # Errors
/// * `ShapeMismatch` if `rows` and `cols` differ in length.
/// * `IndexOutOfBounds` for the first pair that falls outside `a`.
pub fn gather_pairs_op<T: Scalar>(
    a: &Matrix<T>,
    rows: &[usize],
    cols: &[usize],
) -> Result<Matrix<T>, LinSoftmaxError> {
    check_pairs(a, rows, cols, "gather_pairs_op")?;
    let values = rows
        .iter()
        .zip(cols)
        .map(|(&r, &c)| a.data[r * a.cols + c])
        .collect();
    Ok(Matrix::column(values))
}

/// Adds `value` to `a[rows[k], cols[k]]` for every `k`, in place.
///
/// Repeated pairs accumulate. On error `a` is left untouched.
pub fn index_add_pairs_<T: Scalar>(
    a: &mut Matrix<T>,
    rows: &[usize],
    cols: &[usize],
    value: T,
) -> Result<(), LinSoftmaxError> {
    check_pairs(a, rows, cols, "index_add_pairs_")?;
    let stride = a.cols;
    for (&r, &c) in rows.iter().zip(cols) {
        a.data[r * stride + c] += value;
    }
    Ok(())
}

#[cfg(test)]
#[path = "indexing_test.rs"]
mod tests;
