// src/matrix/broadcast_utils.rs

use crate::error::LinSoftmaxError;

/// Computes the broadcast shape of two 2-D shapes.
///
/// Each dimension must either match or be 1 on one side, so an N×C matrix
/// combines with N×1 (per-row values), 1×C (per-column values) or 1×1.
pub fn broadcast_shapes(a: [usize; 2], b: [usize; 2]) -> Result<[usize; 2], LinSoftmaxError> {
    let mut out = [0; 2];
    for i in 0..2 {
        out[i] = match (a[i], b[i]) {
            (x, y) if x == y => x,
            (1, y) => y,
            (x, 1) => x,
            _ => {
                return Err(LinSoftmaxError::BroadcastError {
                    shape1: a.to_vec(),
                    shape2: b.to_vec(),
                })
            }
        };
    }
    Ok(out)
}

/// Maps an output coordinate back to the flat index of an operand that may
/// have been broadcast along either axis.
#[inline]
pub(crate) fn broadcast_index(shape: [usize; 2], r: usize, c: usize) -> usize {
    let r = if shape[0] == 1 { 0 } else { r };
    let c = if shape[1] == 1 { 0 } else { c };
    r * shape[1] + c
}
