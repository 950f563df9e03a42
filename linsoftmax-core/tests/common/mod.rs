use linsoftmax_core::utils::testing::random_problem;
use linsoftmax_core::Matrix;

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Seeded `(W, X, y)` problem; panics if generation fails.
#[allow(dead_code)]
pub fn problem(
    n: usize,
    d: usize,
    c: usize,
    w_std: f64,
    seed: u64,
) -> (Matrix<f64>, Matrix<f64>, Vec<usize>) {
    random_problem(n, d, c, w_std, seed).expect("Test problem creation failed")
}

/// Shapes `(N, D, C)` covering degenerate single-row/feature/class cases.
#[allow(dead_code)]
pub const SHAPES: [(usize, usize, usize); 6] = [
    (1, 1, 1),
    (1, 3, 4),
    (5, 1, 3),
    (7, 4, 1),
    (32, 10, 10),
    (50, 20, 7),
];
