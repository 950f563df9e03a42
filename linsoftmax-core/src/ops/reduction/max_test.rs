use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::ops::reduction::max_axis_op;
use crate::utils::testing::check_matrix_near;

#[test]
fn test_max_rows_keep_dims() {
    let a = Matrix::new(vec![1.0_f64, 5.0, -2.0, -7.0, -3.0, -4.0], 2, 3).unwrap();
    let out = max_axis_op(&a, 1).unwrap();
    check_matrix_near(&out, [2, 1], &[5.0, -3.0], 1e-12);
}

#[test]
fn test_max_cols_keep_dims() {
    let a = Matrix::new(vec![1.0_f64, 5.0, -2.0, -7.0, -3.0, 4.0], 2, 3).unwrap();
    let out = max_axis_op(&a, 0).unwrap();
    check_matrix_near(&out, [1, 3], &[1.0, 5.0, 4.0], 1e-12);
}

#[test]
fn test_max_invalid_axis() {
    let a = Matrix::new(vec![1.0_f64; 4], 2, 2).unwrap();
    assert!(matches!(
        max_axis_op(&a, 2),
        Err(LinSoftmaxError::IndexOutOfBounds { .. })
    ));
}

#[test]
fn test_max_empty_axis() {
    let a: Matrix<f64> = Matrix::new(vec![], 3, 0).unwrap();
    assert!(matches!(
        max_axis_op(&a, 1),
        Err(LinSoftmaxError::ShapeMismatch { .. })
    ));
}
