use thiserror::Error;

/// Custom error type for the linsoftmax crate.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum LinSoftmaxError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Cannot broadcast shapes: {shape1:?} and {shape2:?}")]
    BroadcastError {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("Matrix creation error: data length {data_len} does not match shape {shape:?}")]
    MatrixCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Empty batch: operation {operation} needs at least one example")]
    EmptyBatch { operation: String },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Label {label} of example {index} is not a class index in [0, {num_classes})")]
    LabelOutOfRange {
        index: usize,
        label: usize,
        num_classes: usize,
    },

    #[error("Regularization strength must be finite and non-negative, got {0}")]
    InvalidRegularization(f64),

    #[error("Non-finite value {value} in {operand} at [{row}, {col}]")]
    NonFiniteInput {
        operand: String,
        row: usize,
        col: usize,
        value: f64,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Coarse classification of a [`LinSoftmaxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Incompatible matrix dimensions.
    Shape,
    /// A value outside the domain the routine accepts (labels, `reg`, non-finite inputs).
    Domain,
    Internal,
}

impl LinSoftmaxError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinSoftmaxError::ShapeMismatch { .. }
            | LinSoftmaxError::BroadcastError { .. }
            | LinSoftmaxError::MatrixCreationError { .. }
            | LinSoftmaxError::EmptyBatch { .. }
            | LinSoftmaxError::IndexOutOfBounds { .. } => ErrorKind::Shape,
            LinSoftmaxError::LabelOutOfRange { .. }
            | LinSoftmaxError::InvalidRegularization(_)
            | LinSoftmaxError::NonFiniteInput { .. } => ErrorKind::Domain,
            LinSoftmaxError::InternalError(_) => ErrorKind::Internal,
        }
    }
}

/// Non-fatal numeric conditions met while evaluating the softmax.
///
/// These only show up when exponentiating raw (unshifted) scores; the loss is
/// still returned, but it may be infinite or NaN.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericWarning {
    #[error("exponential sum overflowed for example {row}")]
    ExpOverflow { row: usize },

    #[error("exponential sum underflowed to zero for example {row}")]
    ExpUnderflow { row: usize },

    #[error("target-class probability is zero for example {row}")]
    LogOfZero { row: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let shape = LinSoftmaxError::ShapeMismatch {
            expected: vec![2, 3],
            actual: vec![2, 4],
            operation: "matmul".to_string(),
        };
        assert_eq!(shape.kind(), ErrorKind::Shape);
        assert_eq!(
            LinSoftmaxError::EmptyBatch { operation: "softmax_loss".to_string() }.kind(),
            ErrorKind::Shape
        );

        let label = LinSoftmaxError::LabelOutOfRange { index: 1, label: 7, num_classes: 3 };
        assert_eq!(label.kind(), ErrorKind::Domain);
        assert_eq!(LinSoftmaxError::InvalidRegularization(-1.0).kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_error_messages() {
        let err = LinSoftmaxError::LabelOutOfRange { index: 4, label: 10, num_classes: 10 };
        assert_eq!(
            err.to_string(),
            "Label 10 of example 4 is not a class index in [0, 10)"
        );
        let warn = NumericWarning::ExpOverflow { row: 2 };
        assert_eq!(warn.to_string(), "exponential sum overflowed for example 2");
    }
}
