//! # Matrix Operations Module (`ops`)
//!
//! The dense primitives the softmax loss is built from. Operations are grouped
//! into submodules by functionality.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation is a free function named `xxx_op` that takes
//!   its operands by reference and returns a freshly allocated result. In-place
//!   variants carry a trailing underscore (`index_add_pairs_`).
//! - **Traits (`ops::traits`):** The [`Scalar`](traits::Scalar) bound shared by every op.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: Element-wise arithmetic with 2-D broadcasting (add, sub, mul, div, scaling).
//! - [`linalg`]: Matrix multiplication and transpose.
//! - [`reduction`]: Max/sum along an axis, total sums.
//! - [`math_elem`]: Element-wise `exp` and `ln`.
//! - [`indexing`]: Paired (row, column) gather and scatter-add.

pub mod traits;

pub mod arithmetic;
pub mod indexing;
pub mod linalg;
pub mod math_elem;
pub mod reduction;

use crate::error::LinSoftmaxError;
use crate::matrix::broadcast_utils::{broadcast_index, broadcast_shapes};
use crate::matrix::Matrix;
use traits::Scalar;

/// Applies a unary element-wise operation to a matrix.
pub(crate) fn apply_unary_op<T, F>(a: &Matrix<T>, op: F) -> Matrix<T>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    Matrix {
        data: a.data.iter().map(|&x| op(x)).collect(),
        rows: a.rows,
        cols: a.cols,
    }
}

/// Applies a binary element-wise operation, broadcasting size-1 dimensions.
///
/// # Errors
/// Returns `BroadcastError` if the shapes cannot be broadcast together.
pub(crate) fn apply_binary_op<T, F>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    op: F,
    op_name: &str,
) -> Result<Matrix<T>, LinSoftmaxError>
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    let a_shape = a.shape();
    let b_shape = b.shape();
    let [rows, cols] = broadcast_shapes(a_shape, b_shape)?;
    log::trace!("{}: {:?} with {:?} -> {:?}", op_name, a_shape, b_shape, [rows, cols]);

    // Fast path: identical shapes, no index remapping.
    if a_shape == b_shape {
        let data = a.data.iter().zip(&b.data).map(|(&x, &y)| op(x, y)).collect();
        return Ok(Matrix { data, rows, cols });
    }

    let mut data = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let x = a.data[broadcast_index(a_shape, r, c)];
            let y = b.data[broadcast_index(b_shape, r, c)];
            data.push(op(x, y));
        }
    }
    Ok(Matrix { data, rows, cols })
}
