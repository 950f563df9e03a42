// src/nn/losses/softmax.rs

use super::config::{RegGradient, SoftmaxLossConfig, Stabilization};
use crate::error::{LinSoftmaxError, NumericWarning};
use crate::matrix::{zeros, Matrix};
use crate::ops::arithmetic::{add_scaled_op, div_op, mul_scalar_op, sub_op};
use crate::ops::indexing::{gather_pairs_op, index_add_pairs_};
use crate::ops::linalg::{matmul_op, row_matmul_op, transpose_op};
use crate::ops::math_elem::{exp_op, ln_op};
use crate::ops::reduction::{max_axis_op, sum_all_op, sum_axis_op, sum_squares_op};
use crate::ops::traits::Scalar;
use log::{debug, trace, warn};

/// Which of the two equivalent evaluation strategies to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One example at a time, per-class gradient accumulation in an inner loop.
    Naive,
    /// Whole-batch matrix operations.
    #[default]
    Vectorized,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Vectorized => "vectorized",
        }
    }
}

/// Result of one loss evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftmaxLossOutput<T: Scalar> {
    /// Mean cross-entropy plus `reg · Σ W²`.
    pub loss: T,
    /// `∂loss/∂W`, same shape as `W` (see [`RegGradient`] for the penalty term).
    pub grad: Matrix<T>,
    /// Numeric conditions met along the way. Always empty with [`Stabilization::MaxShift`].
    pub warnings: Vec<NumericWarning>,
}

impl<T: Scalar> SoftmaxLossOutput<T> {
    /// Splits the output into the `(loss, dW)` pair.
    pub fn into_parts(self) -> (T, Matrix<T>) {
        (self.loss, self.grad)
    }
}

/// Softmax cross-entropy loss of a linear classifier `scores = X·W`, together
/// with its gradient with respect to `W`.
///
/// Inputs, for a minibatch of N examples with D features and C classes:
/// * `w`: weights, D×C.
/// * `x`: examples, N×D.
/// * `y`: labels, length N, each in `0..C`.
/// * `reg`: L2 regularization strength, `>= 0`.
///
/// Both strategies validate their inputs identically and agree to within
/// floating-point rounding, so they can be swapped freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftmaxLoss {
    config: SoftmaxLossConfig,
}

impl SoftmaxLoss {
    pub fn new(config: SoftmaxLossConfig) -> Self {
        SoftmaxLoss { config }
    }

    pub fn config(&self) -> &SoftmaxLossConfig {
        &self.config
    }

    /// Evaluates the loss with the given strategy.
    pub fn calculate<T: Scalar>(
        &self,
        strategy: Strategy,
        w: &Matrix<T>,
        x: &Matrix<T>,
        y: &[usize],
        reg: T,
    ) -> Result<SoftmaxLossOutput<T>, LinSoftmaxError> {
        match strategy {
            Strategy::Naive => self.naive(w, x, y, reg),
            Strategy::Vectorized => self.vectorized(w, x, y, reg),
        }
    }

    /// Explicit-loop evaluation: one example at a time, accumulating into `dW` in place.
    pub fn naive<T: Scalar>(
        &self,
        w: &Matrix<T>,
        x: &Matrix<T>,
        y: &[usize],
        reg: T,
    ) -> Result<SoftmaxLossOutput<T>, LinSoftmaxError> {
        validate_inputs(w, x, y, reg)?;
        let (n, d, c) = (x.rows(), w.rows(), w.cols());
        debug!(
            "softmax_loss_naive: N={} D={} C={} reg={:?} {:?}",
            n, d, c, reg, self.config
        );
        let shift = self.config.stabilization == Stabilization::MaxShift;

        let mut data_loss = T::zero();
        let mut grad = zeros(d, c);
        let mut warnings = Vec::new();

        for (i, &label) in y.iter().enumerate() {
            let xi = x.row(i);
            let mut scores = row_matmul_op(xi, w)?;
            if let Some(col) = scores.iter().position(|v| !v.is_finite()) {
                return Err(score_overflow(i, col, scores[col]));
            }
            if shift {
                let max = scores.iter().copied().fold(T::neg_infinity(), T::max);
                scores.iter_mut().for_each(|s| *s -= max);
            }
            let target_score = scores[label];

            // Exponentiate in place; `scores` holds exp(s) from here on.
            let mut exp_sum = T::zero();
            for s in scores.iter_mut() {
                *s = s.exp();
                exp_sum += *s;
            }

            let loss_i = if shift {
                exp_sum.ln() - target_score
            } else {
                let p_target = scores[label] / exp_sum;
                warnings.extend(row_warning(i, exp_sum, p_target));
                -p_target.ln()
            };
            trace!("softmax_loss_naive: example {} label {} loss {:?}", i, label, loss_i);
            data_loss += loss_i;

            for (j, &e) in scores.iter().enumerate() {
                let mut dscore = e / exp_sum;
                if j == label {
                    dscore -= T::one();
                }
                for (k, &x_ik) in xi.iter().enumerate() {
                    grad[(k, j)] += x_ik * dscore;
                }
            }
        }

        let n_t = count_as_scalar::<T>(n)?;
        let data_grad = mul_scalar_op(&grad, T::one() / n_t);
        self.finish(data_loss / n_t, data_grad, w, reg, warnings, Strategy::Naive)
    }

    /// Loop-free evaluation over the whole batch.
    pub fn vectorized<T: Scalar>(
        &self,
        w: &Matrix<T>,
        x: &Matrix<T>,
        y: &[usize],
        reg: T,
    ) -> Result<SoftmaxLossOutput<T>, LinSoftmaxError> {
        validate_inputs(w, x, y, reg)?;
        let n = x.rows();
        debug!(
            "softmax_loss_vectorized: N={} D={} C={} reg={:?} {:?}",
            n,
            w.rows(),
            w.cols(),
            reg,
            self.config
        );

        let scores = checked_scores(x, w)?;
        let RowSoftmax { scores, exp_sums, probs } =
            row_softmax(scores, self.config.stabilization)?;
        let index: Vec<usize> = (0..n).collect();

        let mut warnings = Vec::new();
        let data_loss = match self.config.stabilization {
            Stabilization::MaxShift => {
                // ln Σ exp(s - max) - (s_y - max)
                let target = gather_pairs_op(&scores, &index, y)?;
                sum_all_op(&sub_op(&ln_op(&exp_sums), &target)?)
            }
            Stabilization::Unshifted => {
                let p_target = gather_pairs_op(&probs, &index, y)?;
                warnings.extend(
                    exp_sums
                        .data()
                        .iter()
                        .zip(p_target.data())
                        .enumerate()
                        .filter_map(|(i, (&s, &p))| row_warning(i, s, p)),
                );
                -sum_all_op(&ln_op(&p_target))
            }
        };

        let n_t = count_as_scalar::<T>(n)?;
        let mut dscores = probs;
        index_add_pairs_(&mut dscores, &index, y, -T::one())?;
        let data_grad = matmul_op(&transpose_op(x), &mul_scalar_op(&dscores, T::one() / n_t))?;

        self.finish(data_loss / n_t, data_grad, w, reg, warnings, Strategy::Vectorized)
    }

    /// Adds the L2 penalty to the mean data loss and its gradient.
    fn finish<T: Scalar>(
        &self,
        data_loss: T,
        data_grad: Matrix<T>,
        w: &Matrix<T>,
        reg: T,
        warnings: Vec<NumericWarning>,
        strategy: Strategy,
    ) -> Result<SoftmaxLossOutput<T>, LinSoftmaxError> {
        let loss = data_loss + reg * sum_squares_op(w);
        let reg_coeff = match self.config.reg_gradient {
            RegGradient::Exact => reg + reg,
            RegGradient::Reference => reg,
        };
        let grad = add_scaled_op(&data_grad, w, reg_coeff)?;

        if let Some(first) = warnings.first() {
            warn!(
                "softmax_loss_{}: {} numeric warning(s), first: {}",
                strategy.name(),
                warnings.len(),
                first
            );
        }
        debug!("softmax_loss_{}: loss={:?}", strategy.name(), loss);
        Ok(SoftmaxLossOutput { loss, grad, warnings })
    }
}

/// Softmax loss and gradient, explicit-loop form, with the default configuration.
///
/// Returns `(loss, dW)`. See [`SoftmaxLoss`] for the input contract.
pub fn softmax_loss_naive<T: Scalar>(
    w: &Matrix<T>,
    x: &Matrix<T>,
    y: &[usize],
    reg: T,
) -> Result<(T, Matrix<T>), LinSoftmaxError> {
    SoftmaxLoss::default()
        .naive(w, x, y, reg)
        .map(SoftmaxLossOutput::into_parts)
}

/// Softmax loss and gradient, vectorized form, with the default configuration.
///
/// Inputs and outputs are the same as [`softmax_loss_naive`].
pub fn softmax_loss_vectorized<T: Scalar>(
    w: &Matrix<T>,
    x: &Matrix<T>,
    y: &[usize],
    reg: T,
) -> Result<(T, Matrix<T>), LinSoftmaxError> {
    SoftmaxLoss::default()
        .vectorized(w, x, y, reg)
        .map(SoftmaxLossOutput::into_parts)
}

/// The N×C matrix of class probabilities `softmax(X·W)`, row by row.
pub fn softmax_probabilities<T: Scalar>(
    w: &Matrix<T>,
    x: &Matrix<T>,
    stabilization: Stabilization,
) -> Result<Matrix<T>, LinSoftmaxError> {
    let scores = checked_scores(x, w)?;
    Ok(row_softmax(scores, stabilization)?.probs)
}

/// `X·W`, rejecting entries that overflowed even though both operands are finite.
fn checked_scores<T: Scalar>(x: &Matrix<T>, w: &Matrix<T>) -> Result<Matrix<T>, LinSoftmaxError> {
    let scores = matmul_op(x, w)?;
    match scores.first_non_finite() {
        Some((row, col, value)) => Err(score_overflow(row, col, value)),
        None => Ok(scores),
    }
}

fn score_overflow<T: Scalar>(row: usize, col: usize, value: T) -> LinSoftmaxError {
    LinSoftmaxError::NonFiniteInput {
        operand: "X·W".to_string(),
        row,
        col,
        value: value.to_f64().unwrap_or(f64::NAN),
    }
}

struct RowSoftmax<T: Scalar> {
    /// Scores after the optional max-shift.
    scores: Matrix<T>,
    /// N×1 row sums of `exp(scores)`.
    exp_sums: Matrix<T>,
    probs: Matrix<T>,
}

fn row_softmax<T: Scalar>(
    scores: Matrix<T>,
    stabilization: Stabilization,
) -> Result<RowSoftmax<T>, LinSoftmaxError> {
    let scores = match stabilization {
        Stabilization::MaxShift => {
            let row_max = max_axis_op(&scores, 1)?;
            sub_op(&scores, &row_max)?
        }
        Stabilization::Unshifted => scores,
    };
    let exp_scores = exp_op(&scores);
    let exp_sums = sum_axis_op(&exp_scores, 1)?;
    let probs = div_op(&exp_scores, &exp_sums)?;
    Ok(RowSoftmax { scores, exp_sums, probs })
}

/// Classifies the numeric condition of one unshifted row, if any.
fn row_warning<T: Scalar>(row: usize, exp_sum: T, p_target: T) -> Option<NumericWarning> {
    if !exp_sum.is_finite() {
        Some(NumericWarning::ExpOverflow { row })
    } else if exp_sum == T::zero() {
        Some(NumericWarning::ExpUnderflow { row })
    } else if p_target == T::zero() {
        Some(NumericWarning::LogOfZero { row })
    } else {
        None
    }
}

fn count_as_scalar<T: Scalar>(n: usize) -> Result<T, LinSoftmaxError> {
    T::from(n).ok_or_else(|| {
        LinSoftmaxError::InternalError(format!("example count {} not representable", n))
    })
}

/// Checks every precondition of the loss, in a fixed order: shapes, batch and
/// class counts, `reg`, labels, then finiteness of `W` and `X`.
pub(crate) fn validate_inputs<T: Scalar>(
    w: &Matrix<T>,
    x: &Matrix<T>,
    y: &[usize],
    reg: T,
) -> Result<(), LinSoftmaxError> {
    if x.cols() != w.rows() {
        return Err(LinSoftmaxError::ShapeMismatch {
            expected: vec![x.rows(), w.rows()],
            actual: x.shape().to_vec(),
            operation: "softmax_loss (X·W inner dim)".to_string(),
        });
    }
    if y.len() != x.rows() {
        return Err(LinSoftmaxError::ShapeMismatch {
            expected: vec![x.rows()],
            actual: vec![y.len()],
            operation: "softmax_loss (labels)".to_string(),
        });
    }
    if x.rows() == 0 {
        return Err(LinSoftmaxError::EmptyBatch {
            operation: "softmax_loss".to_string(),
        });
    }
    if w.cols() == 0 {
        return Err(LinSoftmaxError::ShapeMismatch {
            expected: vec![w.rows(), 1],
            actual: w.shape().to_vec(),
            operation: "softmax_loss (no classes)".to_string(),
        });
    }
    if !(reg >= T::zero()) || !reg.is_finite() {
        return Err(LinSoftmaxError::InvalidRegularization(
            reg.to_f64().unwrap_or(f64::NAN),
        ));
    }
    let num_classes = w.cols();
    if let Some((index, &label)) = y.iter().enumerate().find(|&(_, &l)| l >= num_classes) {
        return Err(LinSoftmaxError::LabelOutOfRange {
            index,
            label,
            num_classes,
        });
    }
    for (operand, m) in [("W", w), ("X", x)] {
        if let Some((row, col, value)) = m.first_non_finite() {
            return Err(LinSoftmaxError::NonFiniteInput {
                operand: operand.to_string(),
                row,
                col,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "softmax_test.rs"]
mod tests;
