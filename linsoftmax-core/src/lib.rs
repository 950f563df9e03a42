//! Softmax cross-entropy loss and its gradient for a linear classifier
//! `scores = X·W`, in an explicit-loop form and a vectorized form that agree
//! to floating-point rounding.
//!
//! ```
//! use linsoftmax_core::{softmax_loss_naive, softmax_loss_vectorized, Matrix};
//!
//! let w = Matrix::new(vec![0.0; 4 * 3], 4, 3)?;
//! let x = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, -1.0, 0.0, 1.0, 2.0], 2, 4)?;
//! let y = [0, 2];
//!
//! let (loss, grad) = softmax_loss_vectorized(&w, &x, &y, 0.1)?;
//! assert!((loss - 3.0_f64.ln()).abs() < 1e-12);
//! assert_eq!(grad.shape(), [4, 3]);
//!
//! let (naive_loss, _) = softmax_loss_naive(&w, &x, &y, 0.1)?;
//! assert!((naive_loss - loss).abs() < 1e-12);
//! # Ok::<(), linsoftmax_core::LinSoftmaxError>(())
//! ```

pub mod error;
pub mod grad_check;
pub mod matrix;
pub mod nn;
pub mod ops;
pub mod utils;

// Re-export the main types so they are reachable as `linsoftmax_core::Matrix` etc.
pub use error::{ErrorKind, LinSoftmaxError, NumericWarning};
pub use matrix::Matrix;
pub use nn::losses::{
    compare_strategies, softmax_loss_naive, softmax_loss_vectorized, softmax_probabilities,
    RegGradient, SoftmaxLoss, SoftmaxLossConfig, SoftmaxLossOutput, Stabilization, Strategy,
};
pub use ops::traits::Scalar;
// Re-export traits required by public functions/structs
pub use num_traits;
