//! Trains a single sigmoid layer on a tiny OR dataset and prints the
//! weights and predictions.
//!
//! Run with `RUST_LOG=debug cargo run --example train_layer` to see the
//! library's log output.
use anyhow::Result;
use nn_matrix::{Activation, Matrix, MatrixConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = MatrixConfig::new(Some(7), Activation::Sigmoid);
    config.apply();

    // 4 samples, 2 features, plus a bias column of ones
    let x = Matrix::create(vec![
        vec![0.0, 0.0, 1.0],
        vec![0.0, 1.0, 1.0],
        vec![1.0, 0.0, 1.0],
        vec![1.0, 1.0, 1.0],
    ])?;
    let y = Matrix::create(vec![vec![0.0], vec![1.0], vec![1.0], vec![1.0]])?;

    let mut weights = Matrix::random(3, 1).add_scalar(-0.5);
    let learning_rate = 0.5;

    for epoch in 0..2000 {
        let z = x.dot(&weights)?;
        let output = z.activate(config.activation);
        let error = output.minus(&y)?;
        let delta = error.multiply(&z.sigmoid_derivative())?;
        let gradient = x.transpose().dot(&delta)?;
        weights.sub_assign_matrix(&gradient.scale(learning_rate))?;

        if epoch % 500 == 0 {
            let loss = error.multiply(&error)?.sum() / y.height() as f64;
            log::info!("epoch {} loss {:.4}", epoch, loss);
        }
    }

    println!("Weights:");
    weights.log();

    let predictions = x.dot(&weights)?.sigmoid();
    println!("Predictions:");
    predictions.log();
    println!("Rounded:");
    predictions.round().log();

    Ok(())
}
