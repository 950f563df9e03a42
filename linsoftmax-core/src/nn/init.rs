use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::ops::traits::Scalar;
use rand::Rng;
use rand_distr::StandardNormal;

/// Creates a `rows`×`cols` weight matrix of zeros.
///
/// With zero weights every class scores the same, so the softmax loss is
/// exactly `ln(C)`.
pub fn zeros<T: Scalar>(rows: usize, cols: usize) -> Matrix<T> {
    crate::matrix::zeros(rows, cols)
}

/// Creates a `rows`×`cols` matrix with entries drawn from `N(0, std²)`.
///
/// The usual starting point for a linear classifier is a small `std`
/// (e.g. `1e-4`), which keeps the initial loss close to `ln(C)`.
///
/// # Arguments
/// * `rows`, `cols`: Shape of the matrix (D×C for weights).
/// * `std`: Standard deviation of the entries.
/// * `rng`: Random number generator; seed it for reproducible weights.
///
/// # Errors
/// Returns `InternalError` if a sample cannot be represented in `T`.
pub fn randn<T: Scalar, R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    std: T,
    rng: &mut R,
) -> Result<Matrix<T>, LinSoftmaxError> {
    let data = (0..rows * cols)
        .map(|_| {
            let z: f64 = rng.sample(StandardNormal);
            T::from(z).map(|z| z * std).ok_or_else(|| {
                LinSoftmaxError::InternalError(format!(
                    "randn: cannot convert {} to element type",
                    z
                ))
            })
        })
        .collect::<Result<Vec<T>, _>>()?;
    Matrix::new(data, rows, cols)
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
