// src/matrix/accessors.rs

use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::ops::traits::Scalar;

impl<T: Scalar> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `[rows, cols]`.
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Returns the total number of elements in the matrix.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// The row-major backing buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Borrows row `r`. Panics if `r` is out of bounds, like slice indexing.
    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Checked element access.
    pub fn get(&self, r: usize, c: usize) -> Result<T, LinSoftmaxError> {
        if r >= self.rows || c >= self.cols {
            return Err(LinSoftmaxError::IndexOutOfBounds {
                index: vec![r, c],
                shape: self.shape().to_vec(),
            });
        }
        Ok(self.data[r * self.cols + c])
    }

    /// Position and value of the first NaN or infinite entry, if any.
    pub fn first_non_finite(&self) -> Option<(usize, usize, T)> {
        self.data
            .iter()
            .position(|v| !v.is_finite())
            .map(|i| (i / self.cols, i % self.cols, self.data[i]))
    }
}
