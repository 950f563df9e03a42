// src/nn/losses/compare.rs

use super::softmax::{SoftmaxLoss, SoftmaxLossOutput, Strategy};
use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::ops::traits::Scalar;
use log::info;
use std::thread;

/// Side-by-side results of both strategies on the same inputs.
#[derive(Debug, Clone)]
pub struct StrategyComparison<T: Scalar> {
    pub naive: SoftmaxLossOutput<T>,
    pub vectorized: SoftmaxLossOutput<T>,
    /// `|loss_naive - loss_vectorized| / max(|loss_naive|, |loss_vectorized|)`.
    pub loss_relative_diff: T,
    /// Largest element-wise `|dW_naive - dW_vectorized|`.
    pub grad_max_abs_diff: T,
}

impl<T: Scalar> StrategyComparison<T> {
    /// True when the losses agree within `loss_rtol` (relative) and every
    /// gradient entry within `grad_atol` (absolute). NaN differences never agree.
    pub fn is_equivalent(&self, loss_rtol: T, grad_atol: T) -> bool {
        self.loss_relative_diff <= loss_rtol && self.grad_max_abs_diff <= grad_atol
    }
}

/// Runs the naive and vectorized strategies on two scoped threads and compares them.
///
/// Both threads borrow the same read-only inputs and allocate their own outputs.
///
/// # Errors
/// Returns the naive strategy's error if either fails (both validate identically).
pub fn compare_strategies<T: Scalar>(
    loss: &SoftmaxLoss,
    w: &Matrix<T>,
    x: &Matrix<T>,
    y: &[usize],
    reg: T,
) -> Result<StrategyComparison<T>, LinSoftmaxError> {
    let (naive, vectorized) = thread::scope(|s| {
        let naive = s.spawn(|| loss.calculate(Strategy::Naive, w, x, y, reg));
        let vectorized = s.spawn(|| loss.calculate(Strategy::Vectorized, w, x, y, reg));
        (join(naive), join(vectorized))
    });
    let (naive, vectorized) = (naive?, vectorized?);

    let scale = naive.loss.abs().max(vectorized.loss.abs());
    let loss_relative_diff = if scale == T::zero() {
        T::zero()
    } else {
        (naive.loss - vectorized.loss).abs() / scale
    };
    let grad_max_abs_diff = naive
        .grad
        .data()
        .iter()
        .zip(vectorized.grad.data())
        .map(|(&a, &b)| (a - b).abs())
        // NaN must survive the reduction so that `is_equivalent` rejects it.
        .fold(T::zero(), |acc, d| if d.is_nan() || d > acc { d } else { acc });

    info!(
        "compare_strategies: loss {:?} vs {:?} (rel diff {:?}), max |ΔdW| {:?}",
        naive.loss, vectorized.loss, loss_relative_diff, grad_max_abs_diff
    );
    Ok(StrategyComparison {
        naive,
        vectorized,
        loss_relative_diff,
        grad_max_abs_diff,
    })
}

fn join<T: Scalar>(
    handle: thread::ScopedJoinHandle<'_, Result<SoftmaxLossOutput<T>, LinSoftmaxError>>,
) -> Result<SoftmaxLossOutput<T>, LinSoftmaxError> {
    handle.join().unwrap_or_else(|_| {
        Err(LinSoftmaxError::InternalError(
            "softmax loss worker thread panicked".to_string(),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nn::losses::config::SoftmaxLossConfig;
    use crate::utils::testing::random_problem;

    #[test]
    fn test_compare_on_well_scaled_inputs() {
        let (w, x, y) = random_problem(16, 8, 4, 0.1, 21).unwrap();
        let cmp = compare_strategies(&SoftmaxLoss::default(), &w, &x, &y, 0.01).unwrap();
        assert!(cmp.is_equivalent(1e-7, 1e-6), "{:?}", cmp);
        assert!(cmp.naive.warnings.is_empty() && cmp.vectorized.warnings.is_empty());
    }

    #[test]
    fn test_compare_propagates_validation_error() {
        let (w, x, _) = random_problem(4, 3, 2, 0.1, 1).unwrap();
        let result = compare_strategies(&SoftmaxLoss::default(), &w, &x, &[0, 1, 2, 0], 0.0);
        assert!(matches!(result, Err(LinSoftmaxError::LabelOutOfRange { .. })));
    }

    #[test]
    fn test_compare_flags_nan_as_not_equivalent() {
        // Unshifted exponentials overflow, so the gradients are NaN.
        let w = Matrix::new(vec![900.0, -900.0], 1, 2).unwrap();
        let x = Matrix::new(vec![1.0, 1.0], 2, 1).unwrap();
        let loss = SoftmaxLoss::new(SoftmaxLossConfig::reference());
        let cmp = compare_strategies(&loss, &w, &x, &[0, 1], 0.0).unwrap();
        assert!(!cmp.is_equivalent(1e-7, 1e-6));
    }
}
