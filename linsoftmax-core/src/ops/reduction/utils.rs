use crate::error::LinSoftmaxError;

/// Validates a reduction axis for a 2-D shape and returns the kept-dims output shape.
///
/// Axis 0 reduces over rows (output 1×cols), axis 1 over columns (output rows×1).
pub(super) fn reduction_output_shape(
    shape: [usize; 2],
    axis: usize,
) -> Result<[usize; 2], LinSoftmaxError> {
    match axis {
        0 => Ok([1, shape[1]]),
        1 => Ok([shape[0], 1]),
        _ => Err(LinSoftmaxError::IndexOutOfBounds {
            index: vec![axis],
            shape: shape.to_vec(),
        }),
    }
}
