//! The input layer: a pass-through stage in front of the network.

use rand::Rng;

use super::Layer;
use crate::activator::Activator;
use crate::matrix::Links;

impl Layer {
    /// Creates an input layer of `size` neurons with no outgoing links.
    ///
    /// Every neuron has one input with weight `1.0` and bias `0.0`. The
    /// activation function is still applied to the incoming value.
    pub fn input<R: Rng + ?Sized>(
        size: usize,
        activator: Activator,
        param: f64,
        rng: &mut R,
    ) -> Self {
        let mut layer = Layer::new(size, activator, param, rng);
        layer.pass_through();
        layer
    }

    /// Creates an input layer with the given links to the next layer.
    pub fn input_with_links<R: Rng + ?Sized>(
        links: Links,
        activator: Activator,
        param: f64,
        rng: &mut R,
    ) -> Self {
        let mut layer = Layer::with_links(links, activator, param, rng);
        layer.pass_through();
        layer
    }

    /// Returns true if every neuron forwards its single input unscaled.
    pub fn is_pass_through(&self) -> bool {
        self.neurons
            .iter()
            .all(|n| n.weights() == &[1.0] && n.bias() == 0.0)
    }

    fn pass_through(&mut self) {
        for neuron in &mut self.neurons {
            neuron.weights_mut().fill(1.0);
            neuron.set_bias(0.0);
        }
    }
}
