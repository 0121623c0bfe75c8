//! A multilayer feed-forward neural network with arbitrary layer-to-layer
//! wiring, trained by error backpropagation.

pub mod activator;
pub mod config;
pub mod error;
pub mod feed_forward;
pub mod layers;
pub mod matrix;
pub mod neuron;
pub mod persist;
pub mod trainer;

pub use error::{Error, Result};
