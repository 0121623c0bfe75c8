//! JSON training configuration.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde_derive::{Deserialize, Serialize};

use crate::activator::Activator;
use crate::error::Result;
use crate::feed_forward::Network;
use crate::trainer::{Logging, StopCondition, Trainer};

fn default_param() -> f64 {
    1.0
}

fn default_learning_rate() -> f64 {
    0.8
}

fn default_stop_condition() -> StopCondition {
    StopCondition::Iterations(1000)
}

fn default_logging() -> Logging {
    Logging::Completion
}

/// Describes a fully connected network and how to train it.
///
/// ```
/// # use neuronet::config::TrainingConfig;
/// let config = TrainingConfig::from_json(r#"{
///     "layers": [2, 2, 1],
///     "activator": "Sigmoid",
///     "stop_condition": { "ErrorThreshold": 0.001 }
/// }"#)?;
/// assert_eq!(config.learning_rate, 0.8);
/// # Ok::<(), neuronet::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Neurons per layer, input first.
    pub layers: Vec<usize>,
    pub activator: Activator,
    /// Activation parameter for every neuron.
    #[serde(default = "default_param")]
    pub param: f64,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_stop_condition")]
    pub stop_condition: StopCondition,
    #[serde(default = "default_logging")]
    pub logging: Logging,
}

impl TrainingConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        TrainingConfig::from_json(&json)
    }

    /// Builds the described network with every layer fully connected.
    pub fn build_network<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
        let mut network = Network::new(&self.layers, self.activator, rng)?;
        network.set_param(self.param);
        network.connect_all(rng)?;
        Ok(network)
    }

    /// Wraps `network` in a trainer using this configuration's settings.
    pub fn build_trainer(&self, network: Network) -> Trainer {
        Trainer::new(network)
            .learning_rate(self.learning_rate)
            .logging(self.logging)
            .stop_condition(self.stop_condition)
    }
}
