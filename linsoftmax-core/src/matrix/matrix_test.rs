use crate::error::LinSoftmaxError;
use crate::matrix::{broadcast_shapes, full, zeros, zeros_like, Matrix};

#[test]
fn test_matrix_creation() {
    let m = Matrix::new(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    assert_eq!(m.shape(), [2, 3]);
    assert_eq!(m.numel(), 6);
    assert_eq!(m[(1, 0)], 4.0);
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
}

#[test]
fn test_matrix_creation_error() {
    let result = Matrix::new(vec![1.0_f64, 2.0, 3.0], 2, 2);
    match result.err().unwrap() {
        LinSoftmaxError::MatrixCreationError { data_len, shape } => {
            assert_eq!(data_len, 3);
            assert_eq!(shape, vec![2, 2]);
        }
        e => panic!("Expected MatrixCreationError, got {:?}", e),
    }
}

#[test]
fn test_from_rows_ragged() {
    let ok = Matrix::from_rows(&[vec![1.0_f32, 2.0], vec![3.0, 4.0]]).unwrap();
    assert_eq!(ok.data(), &[1.0, 2.0, 3.0, 4.0]);

    let ragged = Matrix::from_rows(&[vec![1.0_f32, 2.0], vec![3.0]]);
    assert!(matches!(ragged, Err(LinSoftmaxError::MatrixCreationError { .. })));
}

#[test]
fn test_zeros_full_like() {
    let z: Matrix<f64> = zeros(3, 2);
    assert!(z.data().iter().all(|&x| x == 0.0));
    let f = full(2, 2, 0.5_f64);
    assert!(f.data().iter().all(|&x| x == 0.5));
    assert_eq!(zeros_like(&f).shape(), [2, 2]);
    assert_eq!(Matrix::column(vec![1.0_f64, 2.0, 3.0]).shape(), [3, 1]);
}

#[test]
fn test_checked_get_and_index_mut() {
    let mut m: Matrix<f64> = zeros(2, 2);
    m[(0, 1)] = 7.0;
    assert_eq!(m.get(0, 1).unwrap(), 7.0);
    assert!(matches!(
        m.get(2, 0),
        Err(LinSoftmaxError::IndexOutOfBounds { .. })
    ));
}

#[test]
#[should_panic]
fn test_index_column_out_of_bounds_panics() {
    let m: Matrix<f64> = zeros(2, 2);
    let _ = m[(0, 2)];
}

#[test]
fn test_first_non_finite() {
    let m = Matrix::new(vec![1.0_f64, f64::NAN, 0.0, f64::INFINITY], 2, 2).unwrap();
    let (r, c, v) = m.first_non_finite().unwrap();
    assert_eq!((r, c), (0, 1));
    assert!(v.is_nan());
    assert!(zeros::<f64>(2, 2).first_non_finite().is_none());
}

#[test]
fn test_broadcast_shapes() {
    assert_eq!(broadcast_shapes([4, 3], [4, 1]).unwrap(), [4, 3]);
    assert_eq!(broadcast_shapes([1, 3], [4, 3]).unwrap(), [4, 3]);
    assert_eq!(broadcast_shapes([1, 1], [2, 5]).unwrap(), [2, 5]);
    assert!(matches!(
        broadcast_shapes([4, 3], [3, 1]),
        Err(LinSoftmaxError::BroadcastError { .. })
    ));
}
