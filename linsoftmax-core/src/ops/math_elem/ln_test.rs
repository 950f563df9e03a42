use crate::matrix::Matrix;
use crate::ops::math_elem::{exp_op, ln_op};
use crate::utils::testing::check_matrix_near;

#[test]
fn test_ln_basic() {
    let a = Matrix::new(vec![1.0_f64, std::f64::consts::E, 10.0], 1, 3).unwrap();
    let out = ln_op(&a);
    check_matrix_near(&out, [1, 3], &[0.0, 1.0, 10.0_f64.ln()], 1e-12);
}

#[test]
fn test_ln_inverts_exp() {
    let a = Matrix::new(vec![-3.0_f64, -0.5, 0.0, 2.5], 2, 2).unwrap();
    let out = ln_op(&exp_op(&a));
    check_matrix_near(&out, [2, 2], a.data(), 1e-12);
}

#[test]
fn test_ln_domain() {
    let a = Matrix::new(vec![0.0_f64, -1.0], 1, 2).unwrap();
    let out = ln_op(&a);
    assert_eq!(out.data()[0], f64::NEG_INFINITY);
    assert!(out.data()[1].is_nan());
}
