//! Activation function types.

use serde_derive::{Deserialize, Serialize};

/// [Activation function](https://en.wikipedia.org/wiki/Activation_function)
/// types.
///
/// Every function takes a scalar parameter alongside the weighted sum. Its
/// meaning depends on the function: a slope for `Linear`, `Sigmoid` and
/// `HyperbolicTangent`, and the firing level for `Threshold`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activator {
    /// `f(s) = a*s`, unbounded.
    Linear,
    /// Logistic sigmoid `f(s) = 1 / (1 + e^(-a*s))`, in `[0, 1]`.
    Sigmoid,
    /// `1` when `s` exceeds the parameter, `0` otherwise.
    Threshold,
    /// `f(s) = tanh(a*s)`, in `[-1, 1]`.
    HyperbolicTangent,
}

impl Activator {
    /// Evaluates `f(sum)` for the selected activation function.
    pub fn f(&self, param: f64, sum: f64) -> f64 {
        match *self {
            Activator::Linear => param * sum,
            Activator::Sigmoid => 1.0 / (1.0 + (-param * sum).exp()),
            Activator::Threshold => if sum > param { 1.0 } else { 0.0 },
            Activator::HyperbolicTangent => (param * sum).tanh(),
        }
    }

    /// Evaluates the derivative `f'(x)`, where `x = f^{-1}(y)`.
    ///
    /// Like `f`, this takes the *output* of the activation function, so the
    /// backward pass can work from the outputs retained by the forward pass.
    /// Only `Linear` and `Sigmoid` have a derivative rule; the other kinds
    /// return `None` and cannot be trained.
    pub fn fprime(&self, param: f64, y: f64) -> Option<f64> {
        match *self {
            Activator::Linear => Some(param),
            Activator::Sigmoid => Some(param * y * (1.0 - y)),
            Activator::Threshold | Activator::HyperbolicTangent => None,
        }
    }

    /// Returns true if the backward pass can train through this function.
    pub fn is_trainable(&self) -> bool {
        self.fprime(1.0, 0.0).is_some()
    }
}
