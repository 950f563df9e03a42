use approx::assert_relative_eq;
use linsoftmax_core::utils::testing::{assert_matrix_relative_eq, max_abs_diff};
use linsoftmax_core::{
    compare_strategies, softmax_loss_naive, softmax_loss_vectorized, RegGradient, SoftmaxLoss,
    SoftmaxLossConfig, Stabilization, Strategy,
};

mod common;
use common::{init_logger, problem, SHAPES};

#[test]
fn test_strategies_agree_across_shapes() {
    init_logger();
    for (i, &(n, d, c)) in SHAPES.iter().enumerate() {
        for reg in [0.0, 0.01, 2.5] {
            let (w, x, y) = problem(n, d, c, 0.1, i as u64);
            let (loss_n, grad_n) = softmax_loss_naive(&w, &x, &y, reg).unwrap();
            let (loss_v, grad_v) = softmax_loss_vectorized(&w, &x, &y, reg).unwrap();
            assert_relative_eq!(loss_n, loss_v, epsilon = 1e-12, max_relative = 1e-7);
            assert!(
                max_abs_diff(&grad_n, &grad_v).unwrap() <= 1e-6,
                "gradients differ for N={} D={} C={} reg={}",
                n, d, c, reg
            );
        }
    }
}

#[test]
fn test_strategies_agree_for_every_config() {
    let (w, x, y) = problem(25, 8, 6, 0.2, 99);
    for reg_gradient in [RegGradient::Exact, RegGradient::Reference] {
        for stabilization in [Stabilization::MaxShift, Stabilization::Unshifted] {
            let loss = SoftmaxLoss::new(
                SoftmaxLossConfig::new()
                    .with_reg_gradient(reg_gradient)
                    .with_stabilization(stabilization),
            );
            let naive = loss.calculate(Strategy::Naive, &w, &x, &y, 0.1).unwrap();
            let vectorized = loss.calculate(Strategy::Vectorized, &w, &x, &y, 0.1).unwrap();
            assert_relative_eq!(naive.loss, vectorized.loss, max_relative = 1e-7);
            assert_matrix_relative_eq(&naive.grad, &vectorized.grad, 1e-6, 0.0);
        }
    }
}

#[test]
fn test_single_class_has_zero_data_loss() {
    // With one class every probability is 1: only the penalty remains.
    let (w, x, y) = problem(7, 4, 1, 0.5, 3);
    let reg = 0.2;
    let penalty: f64 = w.data().iter().map(|v| v * v).sum::<f64>() * reg;
    for strategy in [Strategy::Naive, Strategy::Vectorized] {
        let out = SoftmaxLoss::default().calculate(strategy, &w, &x, &y, reg).unwrap();
        assert_relative_eq!(out.loss, penalty, epsilon = 1e-12);
        for (g, wv) in out.grad.data().iter().zip(w.data()) {
            assert_relative_eq!(*g, 2.0 * reg * wv, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_parallel_comparison() {
    init_logger();
    for seed in 0..4 {
        let (w, x, y) = problem(40, 12, 5, 0.1, seed);
        let cmp = compare_strategies(&SoftmaxLoss::default(), &w, &x, &y, 0.05).unwrap();
        assert!(cmp.is_equivalent(1e-7, 1e-6), "seed {}: {:?}", seed, cmp);
    }
}

#[test]
fn test_parallel_callers_share_inputs() {
    // Many threads evaluating the same borrowed inputs see identical results.
    let (w, x, y) = problem(30, 6, 4, 0.3, 12);
    let (expected, _) = softmax_loss_vectorized(&w, &x, &y, 0.01).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| softmax_loss_vectorized(&w, &x, &y, 0.01).unwrap().0))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
