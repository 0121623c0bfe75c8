//! A [Feedforward neural network]
//! (https://en.wikipedia.org/wiki/Feedforward_neural_network) whose layers
//! need not be fully connected.
//!
//! # Example
//!
//! Let's train a small network to compute the OR function:
//!
//! ```
//! # use neuronet::activator::Activator;
//! # use neuronet::feed_forward::Network;
//! # use neuronet::trainer::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut network = Network::new(&[2, 2, 2, 1], Activator::Sigmoid, &mut rng)?;
//! network.connect_all(&mut rng)?;
//!
//! let inputs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
//! let targets = [[0.0], [1.0], [1.0], [1.0]];
//!
//! let mut trainer = Trainer::new(network)
//!     .learning_rate(1.0)
//!     .logging(Logging::Silent)
//!     .stop_condition(StopCondition::Iterations(200));
//! let report = trainer.train(SupervisedMethod::GradientDescent, &inputs, &targets)?;
//! assert_eq!(report.epochs, 200);
//!
//! let output = trainer.network_mut().forward(&[1.0, 0.0])?;
//! assert_eq!(output.len(), 1);
//! # Ok::<(), neuronet::Error>(())
//! ```

use rand::Rng;
use tracing::debug;

use crate::activator::Activator;
use crate::error::{Error, Result};
use crate::layers::Layer;
use crate::matrix::{Links, Mat};

/// A Feedforward neural network
///
/// Layer 0 is always an input layer; the last layer produces the output.
#[derive(Clone, Debug)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// Creates a new, unlinked neural network.
    ///
    /// Arguments:
    ///  * `layer_sizes` - the number of neurons in each layer, input first.
    ///  * `activator` - the activation function to use for each neuron.
    ///  * `rng` - source for the starting weights.
    ///
    /// Every activation parameter starts at `1.0`. The network cannot run
    /// until it has been linked with `connect_all` or `set_links`.
    pub fn new<R: Rng + ?Sized>(
        layer_sizes: &[usize],
        activator: Activator,
        rng: &mut R,
    ) -> Result<Self> {
        if layer_sizes.is_empty() {
            return Err(Error::InvalidTopology("a network needs at least one layer".into()));
        }
        if let Some(i) = layer_sizes.iter().position(|&size| size == 0) {
            return Err(Error::InvalidTopology(format!("layer {} has no neurons", i)));
        }
        let mut layers = Vec::with_capacity(layer_sizes.len());
        layers.push(Layer::input(layer_sizes[0], activator, 1.0, rng));
        for &size in &layer_sizes[1..] {
            layers.push(Layer::new(size, activator, 1.0, rng));
        }
        Ok(Network { layers })
    }

    /// Returns the number of layers, input and output included.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always false: a network has at least an input layer.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Mutable layers for in-place parameter updates. The slice cannot be
    /// resized, so the topology stays fixed.
    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub fn layer(&self, index: usize) -> Result<&Layer> {
        let len = self.layers.len();
        self.layers
            .get(index)
            .ok_or(Error::LayerOutOfRange { index, len })
    }

    pub fn layer_mut(&mut self, index: usize) -> Result<&mut Layer> {
        let len = self.layers.len();
        self.layers
            .get_mut(index)
            .ok_or(Error::LayerOutOfRange { index, len })
    }

    pub fn input_layer(&self) -> &Layer {
        &self.layers[0]
    }

    pub fn output_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    /// Returns the size of the input layer to the network.
    pub fn input_len(&self) -> usize {
        self.input_layer().len()
    }

    /// Returns the size of the output layer from the network.
    pub fn output_len(&self) -> usize {
        self.output_layer().len()
    }

    /// Returns the number of neurons in each layer.
    pub fn sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::len).collect()
    }

    /// Sets the activation parameter of every neuron in the network.
    pub fn set_param(&mut self, param: f64) {
        for layer in &mut self.layers {
            layer.set_param(param);
        }
    }

    /// Replaces the links from layer `index` to the next one.
    ///
    /// `links` must be shaped `[layer.len(), next.len()]`; the output layer
    /// accepts any number of columns. The layer is rebuilt: an input layer
    /// returns to pass-through form, any other layer takes its fan-in from the
    /// previous layer's links and gets freshly drawn weights. The following
    /// layer is rebuilt as well so its fan-in matches the new links, which
    /// also redraws its weights.
    ///
    /// Every receiver in the next layer must keep at least one linked
    /// sender, otherwise `InvalidInputCount` is returned. On error the
    /// network is left unchanged.
    pub fn set_links<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        links: Links,
        rng: &mut R,
    ) -> Result<()> {
        let layer = self.layer(index)?;
        if links.rows() != layer.len() {
            return Err(Error::ShapeMismatch {
                context: "link rows",
                expected: layer.len(),
                found: links.rows(),
            });
        }
        let next = self.layers.get(index + 1);
        if let Some(next) = next {
            if links.cols() != next.len() {
                return Err(Error::ShapeMismatch {
                    context: "link columns",
                    expected: next.len(),
                    found: links.cols(),
                });
            }
            linked_fan_in(&links)?;
        }

        let (activator, param) = (layer.activator(), layer.param());
        let rebuilt = if index == 0 {
            Layer::input_with_links(links, activator, param, rng)
        } else {
            let fan_in = self.fan_in_from_predecessor(index)?;
            let mut rebuilt = Layer::with_links(links, activator, param, rng);
            for (neuron, &n) in rebuilt.neurons_mut().iter_mut().zip(&fan_in) {
                neuron.set_input_count(n, rng)?;
            }
            rebuilt
        };
        let successor = match next {
            Some(next) => Some(Layer::from_predecessor(
                &rebuilt,
                next.links().clone(),
                next.activator(),
                next.param(),
                rng,
            )?),
            None => None,
        };

        debug!(
            layer = index,
            rows = rebuilt.links().rows(),
            cols = rebuilt.links().cols(),
            "relinked layer"
        );
        self.layers[index] = rebuilt;
        if let Some(successor) = successor {
            self.layers[index + 1] = successor;
        }
        Ok(())
    }

    /// Links every neuron to every neuron of the next layer.
    ///
    /// The output layer gets a single all-true column. Every neuron past the
    /// input layer is resized to the previous layer's size and its weights are
    /// redrawn.
    pub fn connect_all<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let sizes = self.sizes();
        for (layer, pair) in self.layers.iter_mut().zip(sizes.windows(2)) {
            layer.replace_links(Links::full(pair[0], pair[1]));
        }
        let last = self.layers.len() - 1;
        self.layers[last].replace_links(Links::full(sizes[last], 1));

        for (layer, &prev_len) in self.layers[1..].iter_mut().zip(&sizes) {
            for neuron in layer.neurons_mut() {
                neuron.set_input_count(prev_len, rng)?;
            }
        }
        debug!(?sizes, "fully connected network");
        Ok(())
    }

    /// Feeds the provided `input` through the network, returning the output
    /// layer.
    ///
    /// Each neuron keeps the inputs it received, which the trainer relies on.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.input_len() {
            return Err(Error::ShapeMismatch {
                context: "network input",
                expected: self.input_len(),
                found: input.len(),
            });
        }
        let signals = Mat::from_fn(1, input.len(), |_, j| Some(input[j]));
        self.layers[0].receive(&signals)?;
        for i in 1..self.layers.len() {
            let signals = self.layers[i - 1].transfer();
            self.layers[i].receive(&signals)?;
        }
        Ok(self.output_layer().flash())
    }

    /// Fan-in of every neuron in layer `index`, read from the previous
    /// layer's link columns.
    fn fan_in_from_predecessor(&self, index: usize) -> Result<Vec<usize>> {
        let prev = self.layers[index - 1].links();
        let len = self.layers[index].len();
        if prev.cols() != len {
            return Err(Error::ShapeMismatch {
                context: "predecessor links",
                expected: len,
                found: prev.cols(),
            });
        }
        linked_fan_in(prev)
    }
}

/// Fan-in of every receiver of `links`. Each receiver needs at least one
/// linked sender.
fn linked_fan_in(links: &Links) -> Result<Vec<usize>> {
    let fan_in: Vec<usize> = (0..links.cols()).map(|j| links.fan_in(j)).collect();
    if let Some(&n) = fan_in.iter().find(|&&n| n < 1) {
        return Err(Error::InvalidInputCount(n));
    }
    Ok(fan_in)
}
