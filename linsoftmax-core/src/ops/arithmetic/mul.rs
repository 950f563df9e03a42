use crate::error::LinSoftmaxError;
use crate::matrix::Matrix;
use crate::ops::apply_binary_op;
use crate::ops::traits::Scalar;

/// Element-wise (Hadamard) product with 2-D broadcasting.
pub fn mul_op<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, LinSoftmaxError> {
    apply_binary_op(a, b, |x, y| x * y, "mul_op")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::check_matrix_near;

    #[test]
    fn test_mul_same_shape() {
        let a = Matrix::new(vec![1.0_f64, -2.0, 3.0], 1, 3).unwrap();
        let out = mul_op(&a, &a).unwrap();
        check_matrix_near(&out, [1, 3], &[1.0, 4.0, 9.0], 1e-12);
    }

    #[test]
    fn test_mul_scalar_matrix_broadcast() {
        let a = Matrix::new(vec![1.0_f64, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let s = Matrix::new(vec![0.5_f64], 1, 1).unwrap();
        let out = mul_op(&s, &a).unwrap();
        check_matrix_near(&out, [2, 2], &[0.5, 1.0, 1.5, 2.0], 1e-12);
    }
}
