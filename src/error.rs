//! Error types for network construction, inference and training.

use thiserror::Error;

use crate::activator::Activator;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the network, trainer or snapshot code can report.
///
/// None of these are retryable: the operation that produced them made no
/// change to the network.
#[derive(Error, Debug)]
pub enum Error {
    /// A matrix or vector did not have the dimension its consumer requires.
    #[error("{context}: expected {expected}, found {found}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    /// A neuron was asked to accept fewer than one input.
    #[error("a neuron needs at least one input, got {0}")]
    InvalidInputCount(usize),

    /// The backward pass has no derivative rule for this activation.
    #[error("layer {layer}: training is not supported for {activator:?} activation")]
    UnsupportedActivation { layer: usize, activator: Activator },

    /// Training inputs and targets have a different number of samples.
    #[error("{inputs} training inputs but {targets} targets")]
    SampleCountMismatch { inputs: usize, targets: usize },

    /// A parameter snapshot does not describe the live network.
    #[error("snapshot does not match network: {0}")]
    SnapshotMismatch(String),

    /// Layer sizes cannot form a network.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// A layer index past the end of the network.
    #[error("layer {index} out of range for a network of {len} layers")]
    LayerOutOfRange { index: usize, len: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot value could not be encoded or decoded
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),

    /// Configuration could not be parsed
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
