use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::math::activation::DEFAULT_RELU_LEAK;
use crate::rng;

fn default_relu_leak() -> f64 {
    DEFAULT_RELU_LEAK
}

/// Settings for code that builds and transforms matrices, e.g. a layer in
/// a toy network.
///
/// The ReLU leak is carried by `Activation::Relu { leak }`; unknown keys are
/// rejected rather than ignored.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MatrixConfig {
    /// Seed for the process-wide generator. `None` leaves it entropy-seeded.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub activation: Activation,
}

impl MatrixConfig {
    pub fn new(seed: Option<u64>, activation: Activation) -> Self {
        Self {
            seed,
            activation,
        }
    }

    /// Seed the process-wide generator if a seed is configured.
    pub fn apply(&self) {
        match self.seed {
            Some(seed) => rng::seed(seed),
            None => log::debug!("No seed configured, keeping current matrix RNG state"),
        }
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self::new(None, Activation::default())
    }
}

/// Elementwise transform selectable by name.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Sigmoid,
    SigmoidDerivative,
    Tanh,
    Relu {
        #[serde(default = "default_relu_leak")]
        leak: f64,
    },
    Round,
    ToBinary,
}

impl Default for Activation {
    fn default() -> Self {
        Activation::Sigmoid
    }
}

impl FromStr for Activation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sigmoid" => Ok(Activation::Sigmoid),
            "sigmoid_derivative" => Ok(Activation::SigmoidDerivative),
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu {
                leak: DEFAULT_RELU_LEAK,
            }),
            "round" => Ok(Activation::Round),
            "to_binary" | "binary" => Ok(Activation::ToBinary),
            _ => Err(format!(
                "Unknown activation: {}. Expected one of sigmoid, sigmoid_derivative, tanh, relu, round, to_binary",
                s
            )),
        }
    }
}
