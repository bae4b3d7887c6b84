//! Elementwise nonlinear transforms used as neural-network activations.
use crate::config::Activation;
use crate::math::Matrix;

/// Default leak factor for [`Matrix::relu`].
pub const DEFAULT_RELU_LEAK: f64 = 0.001;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl Matrix {
    /// `1 / (1 + e^-x)` per element.
    pub fn sigmoid(&self) -> Matrix {
        self.map(sigmoid)
    }

    /// `s * (1 - s)` with `s = sigmoid(x)`, per element.
    pub fn sigmoid_derivative(&self) -> Matrix {
        self.map(|x| {
            let s = sigmoid(x);
            s * (1.0 - s)
        })
    }

    pub fn tanh(&self) -> Matrix {
        self.map(f64::tanh)
    }

    /// Leaky ReLU with the default leak of `0.001`.
    pub fn relu(&self) -> Matrix {
        self.relu_with_leak(DEFAULT_RELU_LEAK)
    }

    /// Leaky ReLU: non-negative elements pass through, negative ones are
    /// multiplied by `leak`.
    pub fn relu_with_leak(&self, leak: f64) -> Matrix {
        self.map(|x| if x < 0.0 { x * leak } else { x })
    }

    /// Round each element to the nearest integer, halves away from zero.
    pub fn round(&self) -> Matrix {
        self.map(f64::round)
    }

    /// `1.0` where the element is `>= 0`, else `0.0`.
    pub fn to_binary(&self) -> Matrix {
        self.map(|x| if x >= 0.0 { 1.0 } else { 0.0 })
    }

    /// Apply the transform selected by `activation`.
    pub fn activate(&self, activation: Activation) -> Matrix {
        log::trace!("Applying {:?} to {}x{} matrix", activation, self.height(), self.width());
        match activation {
            Activation::Sigmoid => self.sigmoid(),
            Activation::SigmoidDerivative => self.sigmoid_derivative(),
            Activation::Tanh => self.tanh(),
            Activation::Relu { leak } => self.relu_with_leak(leak),
            Activation::Round => self.round(),
            Activation::ToBinary => self.to_binary(),
        }
    }
}
