//! A single weighted-sum unit.

use rand::Rng;

use crate::activator::Activator;
use crate::error::{Error, Result};

/// Draws a fresh starting weight in `[-0.1, 0.1)` on a `0.001` grid.
fn initial_weight<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(-100i32..100)) / 1000.0
}

/// A formal neuron: `f(sum(inputs[k] * weights[k]) + bias)`.
///
/// `weights` and `inputs` always have the same length, the neuron's fan-in.
/// The inputs are the raw signals last delivered by a forward pass; they stay
/// around so the trainer can recompute this neuron's output.
#[derive(Clone, Debug)]
pub struct Neuron {
    weights: Vec<f64>,
    bias: f64,
    activator: Activator,
    param: f64,
    inputs: Vec<f64>,
}

impl Neuron {
    /// Creates a neuron with `fan_in` zeroed inputs and random weights and
    /// bias.
    ///
    /// A zero fan-in is accepted here: such a neuron only outputs `f(bias)`.
    pub fn new<R: Rng + ?Sized>(
        fan_in: usize,
        activator: Activator,
        param: f64,
        rng: &mut R,
    ) -> Self {
        let bias = initial_weight(rng);
        Neuron {
            weights: (0..fan_in).map(|_| initial_weight(rng)).collect(),
            bias,
            activator,
            param,
            inputs: vec![0.0; fan_in],
        }
    }

    /// Weighted sum of the current inputs plus bias.
    pub fn sum(&self) -> f64 {
        self.inputs
            .iter()
            .zip(&self.weights)
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + self.bias
    }

    /// The neuron's output for its current inputs.
    pub fn signal_out(&self) -> f64 {
        self.activator.f(self.param, self.sum())
    }

    /// Resizes the neuron to `n` inputs and redraws every weight and the
    /// bias.
    pub fn set_input_count<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Result<()> {
        if n < 1 {
            return Err(Error::InvalidInputCount(n));
        }
        self.inputs = vec![0.0; n];
        self.weights = (0..n).map(|_| initial_weight(rng)).collect();
        self.bias = initial_weight(rng);
        Ok(())
    }

    pub fn fan_in(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Mutable access to the weights. The fan-in cannot change through it.
    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }

    pub fn activator(&self) -> Activator {
        self.activator
    }

    /// Switches the activation function, keeping weights and bias.
    pub fn set_activator(&mut self, activator: Activator) {
        self.activator = activator;
    }

    pub fn param(&self) -> f64 {
        self.param
    }

    pub fn set_param(&mut self, param: f64) {
        self.param = param;
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    /// Replaces the retained input signals.
    pub fn set_inputs(&mut self, inputs: &[f64]) -> Result<()> {
        if inputs.len() != self.inputs.len() {
            return Err(Error::ShapeMismatch {
                context: "neuron inputs",
                expected: self.inputs.len(),
                found: inputs.len(),
            });
        }
        self.inputs.copy_from_slice(inputs);
        Ok(())
    }
}
