// Sanity checks for the softmax classifier loss on a random 10-class problem:
// initial loss close to ln(10), gradient checks, and naive vs vectorized timing.

use linsoftmax_core::grad_check::{check_directional_grad, check_grad_sparse};
use linsoftmax_core::nn::init::randn;
use linsoftmax_core::utils::testing::random_labels;
use linsoftmax_core::{
    compare_strategies, softmax_loss_naive, softmax_loss_vectorized, Matrix, SoftmaxLoss,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::time::Instant;

const NUM_TRAIN: usize = 500;
const NUM_FEATURES: usize = 64;
const NUM_CLASSES: usize = 10;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(231);

    let x = randn(NUM_TRAIN, NUM_FEATURES, 1.0, &mut rng)?;
    let y = random_labels(NUM_TRAIN, NUM_CLASSES, &mut rng);
    let w = randn(NUM_FEATURES, NUM_CLASSES, 1e-4, &mut rng)?;

    // With near-zero weights every class gets probability ~0.1.
    let (loss, grad) = softmax_loss_naive(&w, &x, &y, 0.0)?;
    println!("loss: {:.6}", loss);
    println!("sanity check: {:.6}", -(0.1_f64).ln());

    println!("\nSparse gradient check (reg = 0):");
    let f = |w_: &Matrix<f64>| softmax_loss_naive(w_, &x, &y, 0.0).map(|(l, _)| l);
    for c in check_grad_sparse(f, &w, &grad, 10, 1e-5, &mut rng)? {
        println!(
            "numerical: {:+.6e} analytic: {:+.6e}, relative error: {:.3e}",
            c.numerical, c.analytic, c.relative_error
        );
    }

    println!("\nDirectional gradient check (reg = 5.0):");
    let reg = 5.0;
    let (_, grad) = softmax_loss_vectorized(&w, &x, &y, reg)?;
    let f = |w_: &Matrix<f64>| softmax_loss_vectorized(w_, &x, &y, reg).map(|(l, _)| l);
    for c in check_directional_grad(f, &w, &grad, 10, 1e-5, 1e-5, &mut rng)? {
        println!(
            "numerical: {:+.6e} analytic: {:+.6e}, relative error: {:.3e}",
            c.numerical, c.analytic, c.relative_error
        );
    }

    let tic = Instant::now();
    let (loss_naive, grad_naive) = softmax_loss_naive(&w, &x, &y, 5e-6)?;
    println!("\nnaive loss: {:e} computed in {:?}", loss_naive, tic.elapsed());

    let tic = Instant::now();
    let (loss_vectorized, grad_vectorized) = softmax_loss_vectorized(&w, &x, &y, 5e-6)?;
    println!("vectorized loss: {:e} computed in {:?}", loss_vectorized, tic.elapsed());

    let grad_difference = grad_naive
        .data()
        .iter()
        .zip(grad_vectorized.data())
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt();
    println!("Loss difference: {:e}", (loss_naive - loss_vectorized).abs());
    println!("Gradient difference: {:e}", grad_difference);

    let cmp = compare_strategies(&SoftmaxLoss::default(), &w, &x, &y, 5e-6)?;
    println!("Equivalent (1e-7 / 1e-6): {}", cmp.is_equivalent(1e-7, 1e-6));
    Ok(())
}
