//! Layers of neurons and the signal routing between them.

mod input;

use rand::Rng;

use crate::activator::Activator;
use crate::error::{Error, Result};
use crate::matrix::{Links, Mat, Signals};
use crate::neuron::Neuron;

/// An ordered group of neurons sharing a default activation function.
///
/// A layer owns the connectivity matrix to the *next* layer, shaped
/// `[self.len(), next.len()]`. The output layer keeps a single all-true dummy
/// column once the network is fully connected.
#[derive(Clone, Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
    links: Links,
    activator: Activator,
    param: f64,
}

impl Layer {
    /// Creates `size` neurons with a single input each and no outgoing
    /// links. Used while the topology is still unknown.
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        activator: Activator,
        param: f64,
        rng: &mut R,
    ) -> Self {
        Layer::with_links(Links::full(size, 0), activator, param, rng)
    }

    /// Creates one neuron per row of `links`, each with a single input. The
    /// real fan-in is assigned later.
    pub fn with_links<R: Rng + ?Sized>(
        links: Links,
        activator: Activator,
        param: f64,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..links.rows())
            .map(|_| Neuron::new(1, activator, param, rng))
            .collect();
        Layer {
            neurons,
            links,
            activator,
            param,
        }
    }

    /// Creates one neuron per row of `links`, sizing every neuron's fan-in
    /// from the matching column of `prev`'s connectivity.
    pub fn from_predecessor<R: Rng + ?Sized>(
        prev: &Layer,
        links: Links,
        activator: Activator,
        param: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if prev.links.cols() != links.rows() {
            return Err(Error::ShapeMismatch {
                context: "predecessor links",
                expected: links.rows(),
                found: prev.links.cols(),
            });
        }
        let neurons = (0..links.rows())
            .map(|j| Neuron::new(prev.links.fan_in(j), activator, param, rng))
            .collect();
        Ok(Layer {
            neurons,
            links,
            activator,
            param,
        })
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    /// Connectivity to the next layer.
    pub fn links(&self) -> &Links {
        &self.links
    }

    /// Swaps the outgoing links without touching any neuron.
    pub(crate) fn replace_links(&mut self, links: Links) {
        self.links = links;
    }

    pub fn activator(&self) -> Activator {
        self.activator
    }

    /// Sets the activation function of the layer and every neuron in it.
    pub fn set_activator(&mut self, activator: Activator) {
        self.activator = activator;
        for neuron in &mut self.neurons {
            neuron.set_activator(activator);
        }
    }

    pub fn param(&self) -> f64 {
        self.param
    }

    /// Sets the activation parameter of the layer and every neuron in it.
    pub fn set_param(&mut self, param: f64) {
        self.param = param;
        for neuron in &mut self.neurons {
            neuron.set_param(param);
        }
    }

    /// Accepts a `[senders, self.len()]` signal matrix.
    ///
    /// Column `j` is compacted top to bottom, skipping unlinked cells, and
    /// becomes neuron `j`'s input vector, so input `k` always comes from the
    /// k-th linked sender. Nothing is written unless every column fits.
    pub fn receive(&mut self, signals: &Signals) -> Result<()> {
        if signals.cols() != self.len() {
            return Err(Error::ShapeMismatch {
                context: "receiving layer size",
                expected: self.len(),
                found: signals.cols(),
            });
        }
        let mut columns = Vec::with_capacity(self.len());
        for (j, neuron) in self.neurons.iter().enumerate() {
            let column: Vec<f64> = signals.column(j).filter_map(|&cell| cell).collect();
            if column.len() != neuron.fan_in() {
                return Err(Error::ShapeMismatch {
                    context: "linked inputs",
                    expected: neuron.fan_in(),
                    found: column.len(),
                });
            }
            columns.push(column);
        }
        for (neuron, column) in self.neurons.iter_mut().zip(&columns) {
            neuron.set_inputs(column)?;
        }
        Ok(())
    }

    /// Emits a `[self.len(), next.len()]` signal matrix holding each
    /// neuron's output wherever it is linked.
    pub fn transfer(&self) -> Signals {
        let outputs = self.flash();
        Mat::from_fn(self.links.rows(), self.links.cols(), |i, j| {
            if self.links[(i, j)] {
                Some(outputs[i])
            } else {
                None
            }
        })
    }

    /// Every neuron's current output, in order.
    pub fn flash(&self) -> Vec<f64> {
        self.neurons.iter().map(Neuron::signal_out).collect()
    }
}
