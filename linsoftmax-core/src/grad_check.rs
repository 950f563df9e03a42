use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::nn::init::randn;
use crate::ops::arithmetic::{add_scaled_op, mul_op, mul_scalar_op};
use crate::ops::reduction::{sum_all_op, sum_squares_op};
use log::debug;
use rand::Rng;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for sample {sample}: analytic {analytic:?} != numerical {numerical:?} (relative error {relative_error:?} > tolerance {tolerance:?})")]
    GradientMismatch {
        sample: usize,
        analytic: f64,
        numerical: f64,
        relative_error: f64,
        tolerance: f64,
    },
    #[error("Analytic gradient shape {grad:?} does not match weight shape {weights:?}")]
    ShapeMismatch { weights: Vec<usize>, grad: Vec<usize> },
    #[error("Finite-difference step must be finite and positive, got {0}")]
    InvalidStep(f64),
    #[error("Numerical gradient is NaN or infinite for sample {sample}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        sample: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Loss evaluation failed during gradient check: {0}")]
    LossEvaluation(LinSoftmaxError),
}

// Map LinSoftmaxError to GradCheckError::LossEvaluation
impl From<LinSoftmaxError> for GradCheckError {
    fn from(err: LinSoftmaxError) -> Self {
        GradCheckError::LossEvaluation(err)
    }
}

/// One random-direction comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalCheck {
    /// ⟨dW, V⟩ for the sampled unit direction V.
    pub analytic: f64,
    /// (f(W + hV) - f(W - hV)) / 2h.
    pub numerical: f64,
    pub relative_error: f64,
}

/// One single-entry comparison from [`check_grad_sparse`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementCheck {
    pub row: usize,
    pub col: usize,
    pub analytic: f64,
    pub numerical: f64,
    pub relative_error: f64,
}

/// `|a - n| / (|a| + |n|)`, zero when both vanish.
pub fn relative_error(analytic: f64, numerical: f64) -> f64 {
    let denom = (analytic.abs() + numerical.abs()).max(f64::MIN_POSITIVE);
    (analytic - numerical).abs() / denom
}

fn check_inputs(w: &Matrix<f64>, analytic: &Matrix<f64>, h: f64) -> Result<(), GradCheckError> {
    if w.shape() != analytic.shape() {
        return Err(GradCheckError::ShapeMismatch {
            weights: w.shape().to_vec(),
            grad: analytic.shape().to_vec(),
        });
    }
    if !(h > 0.0) || !h.is_finite() {
        return Err(GradCheckError::InvalidStep(h));
    }
    Ok(())
}

/// Checks an analytic gradient against central finite differences along
/// random directions.
///
/// For each of `num_samples` samples a direction `V` is drawn from a standard
/// normal and scaled to unit norm; the directional derivative ⟨dW, V⟩ must
/// match `(f(W + hV) - f(W - hV)) / 2h` to within `tolerance` relative error.
///
/// # Arguments
/// * `f`: The scalar function whose gradient is checked (typically the loss at fixed `X`, `y`, `reg`).
/// * `w`: The point to check at.
/// * `analytic`: The gradient claimed for `f` at `w`.
/// * `h`: Finite-difference step, e.g. `1e-5`.
///
/// # Returns
/// The per-sample report if every sample passes.
pub fn check_directional_grad<F, R>(
    mut f: F,
    w: &Matrix<f64>,
    analytic: &Matrix<f64>,
    num_samples: usize,
    h: f64,
    tolerance: f64,
    rng: &mut R,
) -> Result<Vec<DirectionalCheck>, GradCheckError>
where
    F: FnMut(&Matrix<f64>) -> Result<f64, LinSoftmaxError>,
    R: Rng + ?Sized,
{
    check_inputs(w, analytic, h)?;

    let mut report = Vec::with_capacity(num_samples);
    for sample in 0..num_samples {
        let direction = randn(w.rows(), w.cols(), 1.0_f64, rng)?;
        let norm = sum_squares_op(&direction).sqrt();
        let direction = if norm > 0.0 {
            mul_scalar_op(&direction, 1.0 / norm)
        } else {
            direction
        };

        let loss_plus = f(&add_scaled_op(w, &direction, h)?)?;
        let loss_minus = f(&add_scaled_op(w, &direction, -h)?)?;
        let numerical = (loss_plus - loss_minus) / (2.0 * h);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                sample,
                loss_plus,
                loss_minus,
            });
        }

        let analytic_dir = sum_all_op(&mul_op(analytic, &direction)?);
        let rel = relative_error(analytic_dir, numerical);
        debug!(
            "check_directional_grad: sample {} analytic {:e} numerical {:e} relative error {:e}",
            sample, analytic_dir, numerical, rel
        );
        if !(rel <= tolerance) {
            return Err(GradCheckError::GradientMismatch {
                sample,
                analytic: analytic_dir,
                numerical,
                relative_error: rel,
                tolerance,
            });
        }
        report.push(DirectionalCheck {
            analytic: analytic_dir,
            numerical,
            relative_error: rel,
        });
    }
    Ok(report)
}

/// Samples `num_checks` random entries of `w` and compares each analytic
/// partial derivative with a central difference of step `h`.
///
/// No threshold is applied; callers inspect `relative_error` in the report.
/// Positions may repeat.
pub fn check_grad_sparse<F, R>(
    mut f: F,
    w: &Matrix<f64>,
    analytic: &Matrix<f64>,
    num_checks: usize,
    h: f64,
    rng: &mut R,
) -> Result<Vec<ElementCheck>, GradCheckError>
where
    F: FnMut(&Matrix<f64>) -> Result<f64, LinSoftmaxError>,
    R: Rng + ?Sized,
{
    check_inputs(w, analytic, h)?;
    if w.numel() == 0 {
        return Ok(Vec::new());
    }

    let mut perturbed = w.clone();
    let mut report = Vec::with_capacity(num_checks);
    for sample in 0..num_checks {
        let row = rng.gen_range(0..w.rows());
        let col = rng.gen_range(0..w.cols());
        let original = w[(row, col)];

        perturbed[(row, col)] = original + h;
        let loss_plus = f(&perturbed)?;
        perturbed[(row, col)] = original - h;
        let loss_minus = f(&perturbed)?;
        perturbed[(row, col)] = original;

        let numerical = (loss_plus - loss_minus) / (2.0 * h);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                sample,
                loss_plus,
                loss_minus,
            });
        }
        let analytic_val = analytic[(row, col)];
        let check = ElementCheck {
            row,
            col,
            analytic: analytic_val,
            numerical,
            relative_error: relative_error(analytic_val, numerical),
        };
        debug!("check_grad_sparse: {:?}", check);
        report.push(check);
    }
    Ok(report)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
