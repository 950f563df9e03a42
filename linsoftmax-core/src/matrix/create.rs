// src/matrix/create.rs

use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::ops::traits::Scalar;

impl<T: Scalar> Matrix<T> {
    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    /// Returns `MatrixCreationError` if `data.len() != rows * cols`.
    pub fn new(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, LinSoftmaxError> {
        if data.len() != rows * cols {
            return Err(LinSoftmaxError::MatrixCreationError {
                data_len: data.len(),
                shape: vec![rows, cols],
            });
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Builds a matrix from a slice of equally sized rows.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, LinSoftmaxError> {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(LinSoftmaxError::MatrixCreationError {
                    data_len: row.len(),
                    shape: vec![1, cols],
                });
            }
            data.extend_from_slice(row);
        }
        Matrix::new(data, rows.len(), cols)
    }

    /// An N×1 column matrix holding `values`.
    pub fn column(values: Vec<T>) -> Self {
        let rows = values.len();
        Matrix { data: values, rows, cols: 1 }
    }
}

/// Creates a `rows`×`cols` matrix filled with zeros.
pub fn zeros<T: Scalar>(rows: usize, cols: usize) -> Matrix<T> {
    full(rows, cols, T::zero())
}

/// Creates a `rows`×`cols` matrix filled with `value`.
pub fn full<T: Scalar>(rows: usize, cols: usize, value: T) -> Matrix<T> {
    Matrix {
        data: vec![value; rows * cols],
        rows,
        cols,
    }
}

/// Creates a zero matrix with the shape of `other`.
pub fn zeros_like<T: Scalar>(other: &Matrix<T>) -> Matrix<T> {
    zeros(other.rows, other.cols)
}
