//! Binary snapshots of a network's learned parameters.
//!
//! All values are little-endian:
//!
//! ```text
//! i32 layer_count
//! i32 neuron_count[layer_count]
//! for each layer, for each neuron:
//!     f64 bias
//!     f64 weight[fan_in]
//! ```
//!
//! A snapshot carries no topology beyond the layer sizes. It can only be
//! loaded into a network with the same sizes and links.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use bincode::Options;
use tracing::debug;

use crate::error::{Error, Result};
use crate::feed_forward::Network;

/// Fixed-width little-endian encoding: 4 bytes per `i32`, 8 per `f64`.
fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
        .with_little_endian()
}

fn write_count<W: Write>(writer: &mut W, count: usize) -> Result<()> {
    let count = i32::try_from(count).map_err(|_| {
        Error::InvalidTopology(format!("{} does not fit a snapshot header", count))
    })?;
    codec().serialize_into(writer, &count)?;
    Ok(())
}

fn read_count<R: Read>(reader: &mut R) -> Result<i32> {
    Ok(codec().deserialize_from(reader)?)
}

fn read_f64<R: Read>(reader: &mut R) -> Result<f64> {
    Ok(codec().deserialize_from(reader)?)
}

/// Writes every bias and weight of `network` to `writer`.
pub fn save<W: Write>(network: &Network, writer: &mut W) -> Result<()> {
    write_count(writer, network.len())?;
    for layer in network.layers() {
        write_count(writer, layer.len())?;
    }
    for layer in network.layers() {
        for neuron in layer.neurons() {
            codec().serialize_into(&mut *writer, &neuron.bias())?;
            for weight in neuron.weights() {
                codec().serialize_into(&mut *writer, weight)?;
            }
        }
    }
    Ok(())
}

/// Reads a snapshot from `reader` into `network`.
///
/// The header is checked against the network's layer sizes before any
/// parameter is read, and the whole snapshot is read before any parameter is
/// written. The snapshot must end right after the last parameter. On error
/// the network is unchanged.
pub fn load<R: Read>(network: &mut Network, reader: &mut R) -> Result<()> {
    let layer_count = read_count(reader)?;
    if usize::try_from(layer_count).ok() != Some(network.len()) {
        return Err(Error::SnapshotMismatch(format!(
            "{} layers in snapshot, {} in network",
            layer_count,
            network.len()
        )));
    }
    for (i, layer) in network.layers().iter().enumerate() {
        let count = read_count(reader)?;
        if usize::try_from(count).ok() != Some(layer.len()) {
            return Err(Error::SnapshotMismatch(format!(
                "layer {} has {} neurons in snapshot, {} in network",
                i,
                count,
                layer.len()
            )));
        }
    }

    let mut parameters = Vec::with_capacity(network.len());
    for layer in network.layers() {
        let mut layer_parameters = Vec::with_capacity(layer.len());
        for neuron in layer.neurons() {
            let bias = read_f64(reader)?;
            let weights = (0..neuron.fan_in())
                .map(|_| read_f64(reader))
                .collect::<Result<Vec<f64>>>()?;
            layer_parameters.push((bias, weights));
        }
        parameters.push(layer_parameters);
    }
    let mut rest = Vec::new();
    reader.read_to_end(&mut rest)?;
    if !rest.is_empty() {
        return Err(Error::SnapshotMismatch(format!(
            "{} bytes left after the last parameter",
            rest.len()
        )));
    }

    let layers = network.layers_mut();
    for (layer, layer_parameters) in layers.iter_mut().zip(parameters) {
        let neurons = layer.neurons_mut();
        for (neuron, (bias, weights)) in neurons.iter_mut().zip(layer_parameters) {
            neuron.set_bias(bias);
            neuron.weights_mut().copy_from_slice(&weights);
        }
    }
    Ok(())
}

/// Saves a snapshot of `network` to the file at `path`, replacing it.
pub fn save_to_path<P: AsRef<Path>>(network: &Network, path: P) -> Result<()> {
    let mut buffer = Vec::new();
    save(network, &mut buffer)?;
    fs::write(path.as_ref(), &buffer)?;
    debug!(path = %path.as_ref().display(), bytes = buffer.len(), "saved snapshot");
    Ok(())
}

/// Loads the snapshot at `path` into `network`.
pub fn load_from_path<P: AsRef<Path>>(network: &mut Network, path: P) -> Result<()> {
    let bytes = fs::read(path.as_ref())?;
    load(network, &mut bytes.as_slice())?;
    debug!(path = %path.as_ref().display(), bytes = bytes.len(), "loaded snapshot");
    Ok(())
}
