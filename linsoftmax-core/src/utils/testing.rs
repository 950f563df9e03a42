//! Helpers shared by unit tests and the integration tests in `tests/`.

use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::nn::init::randn;
use crate::ops::traits::Scalar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Checks that a matrix has the expected shape and data within tolerance.
/// Panics on the first element that differs by more than `tolerance`.
pub fn check_matrix_near<T: Scalar>(
    actual: &Matrix<T>,
    expected_shape: [usize; 2],
    expected_data: &[T],
    tolerance: T,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert_eq!(actual.numel(), expected_data.len(), "Data length mismatch");

    for (i, (a, e)) in actual.data().iter().zip(expected_data).enumerate() {
        let diff = (*a - *e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Asserts two `f64` matrices are equal element-wise within `epsilon`
/// (absolute) or `max_relative` (relative), whichever is looser.
pub fn assert_matrix_relative_eq(
    actual: &Matrix<f64>,
    expected: &Matrix<f64>,
    epsilon: f64,
    max_relative: f64,
) {
    assert_eq!(actual.shape(), expected.shape(), "Shape mismatch");
    for (i, (a, e)) in actual.data().iter().zip(expected.data()).enumerate() {
        assert!(
            approx::relative_eq!(*a, *e, epsilon = epsilon, max_relative = max_relative),
            "Data mismatch at [{}, {}]: actual={}, expected={}",
            i / actual.cols(),
            i % actual.cols(),
            a,
            e
        );
    }
}

/// Largest absolute element-wise difference between two equally shaped matrices.
pub fn max_abs_diff<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<T, LinSoftmaxError> {
    if a.shape() != b.shape() {
        return Err(LinSoftmaxError::ShapeMismatch {
            expected: a.shape().to_vec(),
            actual: b.shape().to_vec(),
            operation: "max_abs_diff".to_string(),
        });
    }
    Ok(a.data()
        .iter()
        .zip(b.data())
        .map(|(&x, &y)| (x - y).abs())
        .fold(T::zero(), T::max))
}

/// `|a - b| / max(|a|, |b|)`, zero when both are zero.
pub fn relative_error<T: Scalar>(a: T, b: T) -> T {
    let scale = a.abs().max(b.abs());
    if scale == T::zero() {
        T::zero()
    } else {
        (a - b).abs() / scale
    }
}

/// `n` labels drawn uniformly from `0..num_classes`.
pub fn random_labels<R: Rng + ?Sized>(n: usize, num_classes: usize, rng: &mut R) -> Vec<usize> {
    (0..n).map(|_| rng.gen_range(0..num_classes)).collect()
}

/// A seeded random problem `(W, X, y)` with `N` examples, `D` features and `C` classes.
///
/// `X` is standard normal and `W` is normal with standard deviation `w_std`.
pub fn random_problem(
    n: usize,
    d: usize,
    c: usize,
    w_std: f64,
    seed: u64,
) -> Result<(Matrix<f64>, Matrix<f64>, Vec<usize>), LinSoftmaxError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let w = randn(d, c, w_std, &mut rng)?;
    let x = randn(n, d, 1.0, &mut rng)?;
    let y = random_labels(n, c, &mut rng);
    Ok((w, x, y))
}
