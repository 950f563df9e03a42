// src/ops/linalg/mod.rs

pub mod matmul;
pub mod transpose;

pub use matmul::{matmul_op, row_matmul_op};
pub use transpose::transpose_op;
