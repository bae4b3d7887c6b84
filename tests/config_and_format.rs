//! Integration tests for configuration types and console formatting.

use nn_matrix::math::DEFAULT_RELU_LEAK;
use nn_matrix::{Activation, Matrix, MatrixConfig};

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn default_config() {
    let cfg = MatrixConfig::default();
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.activation, Activation::Sigmoid);
}

#[test]
fn config_deserializes_with_defaults() {
    let cfg: MatrixConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
    assert_eq!(cfg.seed, Some(5));
    assert_eq!(cfg.activation, Activation::Sigmoid);

    let cfg: MatrixConfig = serde_json::from_str(r#"{"activation": {"relu": {}}}"#).unwrap();
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.activation, Activation::Relu { leak: DEFAULT_RELU_LEAK });

    let cfg: MatrixConfig = serde_json::from_str(r#"{"activation": "to_binary"}"#).unwrap();
    assert_eq!(cfg.activation, Activation::ToBinary);
}

#[test]
fn seeded_config_makes_random_reproducible() {
    let cfg = MatrixConfig::new(Some(1234), Activation::Tanh);
    cfg.apply();
    let a = Matrix::random(3, 3);
    cfg.apply();
    let b = Matrix::random(3, 3);
    assert_eq!(a, b);
}

#[test]
fn activation_from_str() {
    assert_eq!("sigmoid".parse::<Activation>(), Ok(Activation::Sigmoid));
    assert_eq!("Sigmoid_Derivative".parse::<Activation>(), Ok(Activation::SigmoidDerivative));
    assert_eq!("TANH".parse::<Activation>(), Ok(Activation::Tanh));
    assert_eq!(
        "relu".parse::<Activation>(),
        Ok(Activation::Relu { leak: DEFAULT_RELU_LEAK })
    );
    assert_eq!("round".parse::<Activation>(), Ok(Activation::Round));
    assert_eq!("binary".parse::<Activation>(), Ok(Activation::ToBinary));
    let err = "softmax".parse::<Activation>().unwrap_err();
    assert!(err.contains("softmax"));
}

#[test]
fn configured_relu_leak_is_applied() {
    let cfg: MatrixConfig =
        serde_json::from_str(r#"{"activation": {"relu": {"leak": 0.2}}}"#).unwrap();
    assert_eq!(cfg.activation, Activation::Relu { leak: 0.2 });

    let x = Matrix::create(vec![vec![-10.0, 3.0]]).unwrap();
    let out = x.activate(cfg.activation);
    assert_eq!(out[(0, 0)], -2.0);
    assert_eq!(out[(0, 1)], 3.0);
}

#[test]
fn config_rejects_unknown_keys() {
    let result = serde_json::from_str::<MatrixConfig>(r#"{"relu_leak": 0.2, "activation": "relu"}"#);
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn display_right_aligns_to_max_width() {
    let a = Matrix::create(vec![vec![1.5, -2.25], vec![0.001, 10.0]]).unwrap();
    // max 10 -> floor(log10(10)) + 7 = 8 characters per cell
    let expected = format!(
        "[{}  {}]\n[{}  {}]",
        "    1.50", "   -2.25", "       0", "   10.00"
    );
    assert_eq!(a.to_string(), expected);
}

#[test]
fn display_uses_minimum_width_for_non_positive_matrices() {
    let a = Matrix::create(vec![vec![-1.0, 0.0]]).unwrap();
    assert_eq!(a.to_string(), "[-1.00    -0]");
}

#[test]
fn display_one_line_per_row() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let a = Matrix::random_with(5, 3, &mut StdRng::seed_from_u64(3));
    let text = a.to_string();
    assert_eq!(text.lines().count(), 5);
    assert!(text.lines().all(|l| l.starts_with('[') && l.ends_with(']')));
}
