// src/matrix/mod.rs

use crate::ops::traits::Scalar;

mod accessors;
pub mod broadcast_utils;
pub mod create;

pub use broadcast_utils::broadcast_shapes;
pub use create::{full, zeros, zeros_like};

/// A dense, row-major 2-D matrix.
///
/// Every matrix in this crate owns its buffer: weights `W` (D×C), design
/// matrices `X` (N×D), scores and probabilities (N×C) and gradients. There is
/// no view or stride machinery, element `(r, c)` lives at `data[r * cols + c]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Scalar> {
    pub(crate) data: Vec<T>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl<T: Scalar> std::ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (r, c): (usize, usize)) -> &T {
        assert!(c < self.cols, "column {} out of bounds for {} columns", c, self.cols);
        &self.data[r * self.cols + c]
    }
}

impl<T: Scalar> std::ops::IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        assert!(c < self.cols, "column {} out of bounds for {} columns", c, self.cols);
        &mut self.data[r * self.cols + c]
    }
}

#[cfg(test)]
#[path = "matrix_test.rs"]
mod tests;
