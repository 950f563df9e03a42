use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::ops::indexing::{gather_pairs_op, index_add_pairs_};
use crate::utils::testing::check_matrix_near;

fn probs() -> Matrix<f64> {
    Matrix::new(vec![0.2, 0.5, 0.3, 0.1, 0.1, 0.8], 2, 3).unwrap()
}

#[test]
fn test_gather_target_class() {
    let out = gather_pairs_op(&probs(), &[0, 1], &[1, 2]).unwrap();
    check_matrix_near(&out, [2, 1], &[0.5, 0.8], 1e-12);
}

#[test]
fn test_gather_length_mismatch() {
    let result = gather_pairs_op(&probs(), &[0, 1], &[1]);
    assert!(matches!(result, Err(LinSoftmaxError::ShapeMismatch { .. })));
}

#[test]
fn test_gather_out_of_bounds() {
    match gather_pairs_op(&probs(), &[0, 1], &[1, 3]) {
        Err(LinSoftmaxError::IndexOutOfBounds { index, shape }) => {
            assert_eq!(index, vec![1, 3]);
            assert_eq!(shape, vec![2, 3]);
        }
        other => panic!("Expected IndexOutOfBounds, got {:?}", other),
    }
}

#[test]
fn test_index_add_subtracts_one_hot() {
    let mut p = probs();
    index_add_pairs_(&mut p, &[0, 1], &[1, 2], -1.0).unwrap();
    check_matrix_near(&p, [2, 3], &[0.2, -0.5, 0.3, 0.1, 0.1, -0.2], 1e-12);
}

#[test]
fn test_index_add_repeated_pairs_accumulate() {
    let mut p = probs();
    index_add_pairs_(&mut p, &[0, 0], &[0, 0], 1.0).unwrap();
    assert!((p[(0, 0)] - 2.2).abs() < 1e-12);
}

#[test]
fn test_index_add_error_leaves_matrix_untouched() {
    let mut p = probs();
    assert!(index_add_pairs_(&mut p, &[0, 5], &[0, 0], 1.0).is_err());
    assert_eq!(p, probs());
}
