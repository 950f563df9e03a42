pub mod compare;
pub mod config;
pub mod softmax;

pub use compare::{compare_strategies, StrategyComparison};
pub use config::{RegGradient, SoftmaxLossConfig, Stabilization};
pub use softmax::{
    softmax_loss_naive, softmax_loss_vectorized, softmax_probabilities, SoftmaxLoss,
    SoftmaxLossOutput, Strategy,
};
