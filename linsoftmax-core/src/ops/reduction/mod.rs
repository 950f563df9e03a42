// src/ops/reduction/mod.rs
// Reductions along an axis (with kept dims) and over the whole matrix.

pub mod max;
pub mod sum;
mod utils;

pub use max::max_axis_op;
pub use sum::{sum_all_op, sum_axis_op, sum_squares_op};
