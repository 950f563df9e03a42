// src/nn/mod.rs
// Linear-classifier building blocks: weight initialisation and losses.

pub mod init;
pub mod losses;

// Re-export common items
pub use losses::{softmax_loss_naive, softmax_loss_vectorized, SoftmaxLoss};
