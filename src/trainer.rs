//! Supervised training by error backpropagation.

use std::path::Path;
use std::time::{Duration, Instant};

use itertools::multizip;
use serde_derive::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::feed_forward::Network;
use crate::persist;

/// Smallest learning rate a trainer will use.
pub const MIN_LEARNING_RATE: f64 = 1e-7;
/// Largest learning rate a trainer will use.
pub const MAX_LEARNING_RATE: f64 = 1.0;

/// Saturates `rate` into `[MIN_LEARNING_RATE, MAX_LEARNING_RATE]`.
fn clamp_rate(rate: f64) -> f64 {
    if rate > MAX_LEARNING_RATE {
        MAX_LEARNING_RATE
    } else if rate < MIN_LEARNING_RATE || rate.is_nan() {
        MIN_LEARNING_RATE
    } else {
        rate
    }
}

/// Supervised learning methods.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupervisedMethod {
    /// Online gradient descent: weights are corrected after every sample.
    GradientDescent,
}

/// Logging frequency to use during training
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Logging {
    /// No logs will be emitted
    Silent,
    /// A summary will be emitted at completion
    Completion,
    /// A summary will be emitted after every `n` training epochs
    Iterations(usize),
}

impl Logging {
    /// Performs logging at the current `epoch` of training.
    fn epoch(&self, epoch: usize, training_error: f64) {
        if let Logging::Iterations(freq) = *self {
            if freq > 0 && epoch % freq == 0 {
                info!(epoch, error = training_error, "training epoch");
            }
        }
    }

    /// Performs logging at the end of training.
    fn completion(&self, report: &TrainingReport) {
        if let Logging::Silent = *self {
            return;
        }
        info!(
            epochs = report.epochs,
            error = report.error,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "training completed"
        );
    }
}

/// When to stop training
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StopCondition {
    /// Stops after the provided number of training epochs
    Iterations(usize),
    /// Stops when the training error drops below the provided threshold
    ErrorThreshold(f64),
    /// Stops after the provided duration
    Duration(Duration),
}

impl From<Duration> for StopCondition {
    fn from(duration: Duration) -> StopCondition {
        StopCondition::Duration(duration)
    }
}

impl StopCondition {
    /// Returns true if training is complete.
    fn should_stop(&self, epoch: usize, training_error: f64, start_time: Instant) -> bool {
        match *self {
            StopCondition::Iterations(epochs) => epoch >= epochs,
            StopCondition::ErrorThreshold(threshold) => training_error < threshold,
            StopCondition::Duration(duration) => start_time.elapsed() > duration,
        }
    }
}

/// Outcome of a `Trainer::train` run.
#[derive(Copy, Clone, Debug)]
pub struct TrainingReport {
    /// Number of epochs run.
    pub epochs: usize,
    /// Network error after the last epoch.
    pub error: f64,
    pub elapsed: Duration,
}

/// Trains a `Network` in place.
#[derive(Debug)]
pub struct Trainer {
    network: Network,
    learning_rate: f64,
    logging: Logging,
    stop_condition: StopCondition,
}

impl Trainer {
    /// Creates a new Trainer instance.
    ///
    /// The trainer is initialized with some default values. These defaults are:
    ///
    /// * A learning rate of 0.8.
    /// * Stops after 1000 training epochs.
    /// * Logs on training completion.
    pub fn new(network: Network) -> Self {
        Trainer {
            network,
            learning_rate: 0.8,
            logging: Logging::Completion,
            stop_condition: StopCondition::Iterations(1000),
        }
    }

    /// Sets the learning rate to use during gradient descent.
    ///
    /// Rates outside `[1e-7, 1]` are silently saturated to the nearest bound.
    pub fn learning_rate(mut self, rate: f64) -> Self {
        self.set_learning_rate(rate);
        self
    }

    /// Sets the type of logging to be emitted during training.
    pub fn logging(mut self, logging: Logging) -> Self {
        self.logging = logging;
        self
    }

    /// Sets the condition to finish training.
    pub fn stop_condition<C>(mut self, condition: C) -> Self
    where
        C: Into<StopCondition>,
    {
        self.stop_condition = condition.into();
        self
    }

    /// Replaces the learning rate, with the same saturation as
    /// `learning_rate`.
    pub fn set_learning_rate(&mut self, rate: f64) {
        self.learning_rate = clamp_rate(rate);
    }

    /// The learning rate in effect.
    pub fn current_learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    pub fn into_network(self) -> Network {
        self.network
    }

    /// Runs epochs of `supervised_train` until the stop condition holds.
    pub fn train<I, O>(
        &mut self,
        method: SupervisedMethod,
        inputs: &[I],
        targets: &[O],
    ) -> Result<TrainingReport>
    where
        I: AsRef<[f64]>,
        O: AsRef<[f64]>,
    {
        let start_time = Instant::now();
        let mut epoch = 0;
        let mut training_error;
        loop {
            training_error = self.supervised_train(method, inputs, targets)?;
            epoch += 1;

            self.logging.epoch(epoch, training_error);
            if self
                .stop_condition
                .should_stop(epoch, training_error, start_time)
            {
                break;
            }
        }
        let report = TrainingReport {
            epochs: epoch,
            error: training_error,
            elapsed: start_time.elapsed(),
        };
        self.logging.completion(&report);
        Ok(report)
    }

    /// One training epoch over `inputs` and their expected `targets`.
    ///
    /// Weights are corrected after every sample. Returns half the summed
    /// squared error over all samples, measured with the weights as they are
    /// after the epoch.
    pub fn supervised_train<I, O>(
        &mut self,
        method: SupervisedMethod,
        inputs: &[I],
        targets: &[O],
    ) -> Result<f64>
    where
        I: AsRef<[f64]>,
        O: AsRef<[f64]>,
    {
        if inputs.len() != targets.len() {
            return Err(Error::SampleCountMismatch {
                inputs: inputs.len(),
                targets: targets.len(),
            });
        }
        for (input, target) in inputs.iter().zip(targets) {
            let errors = match method {
                SupervisedMethod::GradientDescent => {
                    self.gradient_descent(input.as_ref(), target.as_ref())?
                }
            };
            self.correct_weights(&errors)?;
        }

        let mut network_error = 0.0;
        for (input, target) in inputs.iter().zip(targets) {
            let output = self.network.forward(input.as_ref())?;
            network_error += output
                .iter()
                .zip(target.as_ref())
                .map(|(y, t)| (y - t) * (y - t))
                .sum::<f64>();
        }
        Ok(network_error / 2.0)
    }

    /// Backpropagates the error of a single sample.
    ///
    /// Returns one error vector per layer past the input layer, ordered input
    /// to output. Fails if any trained neuron uses an activation function
    /// without a derivative rule.
    pub fn gradient_descent(
        &mut self,
        input: &[f64],
        target: &[f64],
    ) -> Result<Vec<Vec<f64>>> {
        self.check_trainable()?;
        let outputs = self.network.forward(input)?;
        if target.len() != outputs.len() {
            return Err(Error::ShapeMismatch {
                context: "training target",
                expected: outputs.len(),
                found: target.len(),
            });
        }
        let layers = self.network.layers();
        let last = layers.len() - 1;
        if last == 0 {
            return Ok(Vec::new());
        }

        let mut output_errors = Vec::with_capacity(outputs.len());
        for (neuron, &y, &t) in multizip((layers[last].neurons(), &outputs, target)) {
            let derivative = neuron.activator().fprime(neuron.param(), y).ok_or(
                Error::UnsupportedActivation {
                    layer: last,
                    activator: neuron.activator(),
                },
            )?;
            output_errors.push(derivative * (y - t));
        }

        // Built output first, reversed before returning.
        let mut errors = vec![output_errors];
        for i in (1..last).rev() {
            let (layer, next) = (&layers[i], &layers[i + 1]);
            let downstream = &errors[errors.len() - 1];
            let activations = layer.flash();
            let mut layer_errors = Vec::with_capacity(layer.len());
            for (j, neuron) in layer.neurons().iter().enumerate() {
                // Weight from j into k sits at j's position among k's senders.
                let weighted: f64 = next
                    .neurons()
                    .iter()
                    .enumerate()
                    .filter_map(|(k, receiver)| {
                        layer
                            .links()
                            .slot(j, k)
                            .map(|slot| downstream[k] * receiver.weights()[slot])
                    })
                    .sum();
                let derivative = neuron
                    .activator()
                    .fprime(neuron.param(), activations[j])
                    .ok_or(Error::UnsupportedActivation {
                        layer: i,
                        activator: neuron.activator(),
                    })?;
                layer_errors.push(weighted * derivative);
            }
            errors.push(layer_errors);
        }
        errors.reverse();
        Ok(errors)
    }

    /// Fails on the first neuron past the input layer whose activation has
    /// no derivative rule, before anything runs through the network.
    fn check_trainable(&self) -> Result<()> {
        for (i, layer) in self.network.layers().iter().enumerate().skip(1) {
            let untrainable = layer
                .neurons()
                .iter()
                .map(|n| n.activator())
                .find(|a| !a.is_trainable());
            if let Some(activator) = untrainable {
                return Err(Error::UnsupportedActivation { layer: i, activator });
            }
        }
        Ok(())
    }

    /// Applies the per-layer `errors` from `gradient_descent`.
    ///
    /// Each weight moves against its gradient, the error of its neuron times
    /// the output of the sender it is linked to. Each bias moves once by the
    /// neuron's error. The input layer is never changed.
    pub fn correct_weights(&mut self, errors: &[Vec<f64>]) -> Result<()> {
        let layers = self.network.layers_mut();
        if errors.len() + 1 != layers.len() {
            return Err(Error::ShapeMismatch {
                context: "error layers",
                expected: layers.len() - 1,
                found: errors.len(),
            });
        }
        for (i, layer_errors) in errors.iter().enumerate() {
            if layer_errors.len() != layers[i + 1].len() {
                return Err(Error::ShapeMismatch {
                    context: "layer errors",
                    expected: layers[i + 1].len(),
                    found: layer_errors.len(),
                });
            }
        }

        let rate = self.learning_rate;
        for i in (1..layers.len()).rev() {
            let (before, after) = layers.split_at_mut(i);
            let (prev, layer) = (&before[i - 1], &mut after[0]);
            let upstream = prev.flash();
            for (j, (neuron, &error)) in layer
                .neurons_mut()
                .iter_mut()
                .zip(&errors[i - 1])
                .enumerate()
            {
                let senders = prev.links().senders(j);
                for (weight, sender) in neuron.weights_mut().iter_mut().zip(senders) {
                    *weight -= rate * error * upstream[sender];
                }
                neuron.set_bias(neuron.bias() - rate * error);
            }
        }
        Ok(())
    }

    /// Saves the network's weights and biases to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persist::save_to_path(&self.network, path)
    }

    /// Loads weights and biases from `path` into the network.
    ///
    /// The snapshot must describe the same layer sizes; otherwise nothing is
    /// loaded.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        persist::load_from_path(&mut self.network, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activator::Activator;
    use crate::matrix::Mat;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const OR_INPUTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
    const OR_TARGETS: [[f64; 1]; 4] = [[0.0], [1.0], [1.0], [1.0]];

    fn connected(sizes: &[usize], activator: Activator, seed: u64) -> Network {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut network = Network::new(sizes, activator, &mut rng).unwrap();
        network.connect_all(&mut rng).unwrap();
        network
    }

    /// Half the summed squared error of a single sample.
    fn sample_error(network: &mut Network, input: &[f64], target: &[f64]) -> f64 {
        let y = network.forward(input).unwrap();
        y.iter().zip(target).map(|(y, t)| (y - t) * (y - t)).sum::<f64>() / 2.0
    }

    #[test]
    fn learning_rate_saturates() {
        let network = connected(&[1, 1], Activator::Linear, 0);
        let mut trainer = Trainer::new(network).learning_rate(5.0);
        assert_eq!(trainer.current_learning_rate(), 1.0);
        trainer.set_learning_rate(1e-12);
        assert_eq!(trainer.current_learning_rate(), 1e-7);
        trainer.set_learning_rate(-3.0);
        assert_eq!(trainer.current_learning_rate(), 1e-7);
        trainer.set_learning_rate(0.3);
        assert_eq!(trainer.current_learning_rate(), 0.3);
    }

    #[test]
    fn clamped_rates_train_identically() {
        for &(wild, bound) in &[(5.0, 1.0), (1e-12, 1e-7)] {
            let mut a = Trainer::new(connected(&[2, 2, 1], Activator::Sigmoid, 9))
                .learning_rate(wild);
            let mut b = Trainer::new(connected(&[2, 2, 1], Activator::Sigmoid, 9))
                .learning_rate(bound);
            for _ in 0..5 {
                let ea = a
                    .supervised_train(SupervisedMethod::GradientDescent, &OR_INPUTS, &OR_TARGETS)
                    .unwrap();
                let eb = b
                    .supervised_train(SupervisedMethod::GradientDescent, &OR_INPUTS, &OR_TARGETS)
                    .unwrap();
                assert_eq!(ea, eb);
            }
        }
    }

    #[test]
    fn sample_count_mismatch() {
        let mut trainer = Trainer::new(connected(&[2, 1], Activator::Linear, 0));
        let result = trainer.supervised_train(
            SupervisedMethod::GradientDescent,
            &OR_INPUTS,
            &OR_TARGETS[..3],
        );
        assert!(matches!(
            result,
            Err(Error::SampleCountMismatch { inputs: 4, targets: 3 })
        ));
    }

    #[test]
    fn wrong_target_size() {
        let mut trainer = Trainer::new(connected(&[2, 1], Activator::Linear, 0));
        assert!(matches!(
            trainer.gradient_descent(&[0.0, 1.0], &[1.0, 1.0]),
            Err(Error::ShapeMismatch { context: "training target", .. })
        ));
    }

    #[test]
    fn unsupported_output_activation() {
        let mut network = connected(&[2, 2, 1], Activator::Sigmoid, 1);
        network.layer_mut(2).unwrap().set_activator(Activator::Threshold);
        let mut trainer = Trainer::new(network);
        assert!(matches!(
            trainer.gradient_descent(&[0.0, 1.0], &[1.0]),
            Err(Error::UnsupportedActivation {
                layer: 2,
                activator: Activator::Threshold
            })
        ));
    }

    #[test]
    fn untrainable_network_is_not_run() {
        let mut network = connected(&[2, 2, 1], Activator::Sigmoid, 1);
        network.forward(&[1.0, 0.0]).unwrap();
        let seen = network.output_layer().neurons()[0].inputs().to_vec();
        network.layer_mut(1).unwrap().set_activator(Activator::Threshold);

        let mut trainer = Trainer::new(network);
        assert!(matches!(
            trainer.gradient_descent(&[0.0, 1.0], &[1.0]),
            Err(Error::UnsupportedActivation { layer: 1, .. })
        ));
        let output = trainer.network().output_layer();
        assert_eq!(output.neurons()[0].inputs(), &seen[..]);
    }

    #[test]
    fn unsupported_hidden_activation() {
        let mut network = connected(&[2, 2, 1], Activator::Sigmoid, 1);
        network.layer_mut(1).unwrap().set_activator(Activator::HyperbolicTangent);
        let mut trainer = Trainer::new(network);
        let before = trainer.network().layers()[2].neurons()[0].weights().to_vec();
        let result =
            trainer.supervised_train(SupervisedMethod::GradientDescent, &OR_INPUTS, &OR_TARGETS);
        assert!(matches!(
            result,
            Err(Error::UnsupportedActivation { layer: 1, .. })
        ));
        assert_eq!(trainer.network().layers()[2].neurons()[0].weights(), &before[..]);
    }

    #[test]
    fn single_linear_step_by_hand() {
        let mut network = connected(&[1, 1], Activator::Linear, 3);
        {
            let neuron = &mut network.layer_mut(1).unwrap().neurons_mut()[0];
            neuron.weights_mut()[0] = 0.5;
            neuron.set_bias(0.25);
        }
        let mut trainer = Trainer::new(network).learning_rate(0.1);
        // y = 0.5 * 2 + 0.25 = 1.25, error = y - 3 = -1.75
        let errors = trainer.gradient_descent(&[2.0], &[3.0]).unwrap();
        assert_eq!(errors.len(), 1);
        assert_relative_eq!(errors[0][0], -1.75);
        trainer.correct_weights(&errors).unwrap();
        let neuron = &trainer.network().output_layer().neurons()[0];
        assert_relative_eq!(neuron.weights()[0], 0.5 + 0.1 * 1.75 * 2.0);
        assert_relative_eq!(neuron.bias(), 0.25 + 0.1 * 1.75);
        assert!(trainer.network().input_layer().is_pass_through());
    }

    #[test]
    fn errors_match_numeric_bias_gradient() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut network = Network::new(&[3, 3, 2, 2], Activator::Sigmoid, &mut rng).unwrap();
        network.connect_all(&mut rng).unwrap();
        network
            .set_links(
                1,
                Mat::from_rows(vec![
                    vec![true, false],
                    vec![true, true],
                    vec![false, true],
                ])
                .unwrap(),
                &mut rng,
            )
            .unwrap();
        network.layer_mut(3).unwrap().set_activator(Activator::Linear);
        // Larger weights than the starting range so every path matters.
        for layer in network.layers_mut()[1..].iter_mut() {
            for (j, neuron) in layer.neurons_mut().iter_mut().enumerate() {
                for (k, w) in neuron.weights_mut().iter_mut().enumerate() {
                    *w = 0.3 + 0.2 * j as f64 - 0.4 * k as f64;
                }
            }
        }

        let (input, target) = ([0.9, -0.4, 0.2], [0.3, -0.8]);
        let mut trainer = Trainer::new(network);
        let errors = trainer.gradient_descent(&input, &target).unwrap();
        assert_eq!(errors.len(), 3);

        let h = 1e-6;
        let network = trainer.network_mut();
        for (i, layer_errors) in errors.iter().enumerate() {
            for (j, &error) in layer_errors.iter().enumerate() {
                let bias = network.layers()[i + 1].neurons()[j].bias();
                network.layer_mut(i + 1).unwrap().neurons_mut()[j].set_bias(bias + h);
                let up = sample_error(network, &input, &target);
                network.layer_mut(i + 1).unwrap().neurons_mut()[j].set_bias(bias - h);
                let down = sample_error(network, &input, &target);
                network.layer_mut(i + 1).unwrap().neurons_mut()[j].set_bias(bias);
                assert_relative_eq!(error, (up - down) / (2.0 * h), epsilon = 1e-7);
            }
        }
    }

    #[test]
    fn weight_correction_follows_sparse_links() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut network = Network::new(&[3, 2], Activator::Linear, &mut rng).unwrap();
        network.connect_all(&mut rng).unwrap();
        network
            .set_links(
                0,
                Mat::from_rows(vec![
                    vec![false, true],
                    vec![true, true],
                    vec![true, false],
                ])
                .unwrap(),
                &mut rng,
            )
            .unwrap();
        let mut trainer = Trainer::new(network).learning_rate(0.5);
        let input = [2.0, 3.0, 5.0];
        trainer.network_mut().forward(&input).unwrap();
        let weights = |trainer: &Trainer| -> Vec<Vec<f64>> {
            let output = trainer.network().output_layer();
            output.neurons().iter().map(|n| n.weights().to_vec()).collect()
        };
        let before = weights(&trainer);

        trainer.correct_weights(&[vec![1.0, -2.0]]).unwrap();
        let after = weights(&trainer);
        // Neuron 0 reads inputs 1 and 2; neuron 1 reads inputs 0 and 1.
        assert_relative_eq!(after[0][0], before[0][0] - 0.5 * 1.0 * 3.0);
        assert_relative_eq!(after[0][1], before[0][1] - 0.5 * 1.0 * 5.0);
        assert_relative_eq!(after[1][0], before[1][0] + 0.5 * 2.0 * 2.0);
        assert_relative_eq!(after[1][1], before[1][1] + 0.5 * 2.0 * 3.0);
    }

    #[test]
    fn correction_shape_checked() {
        let mut trainer = Trainer::new(connected(&[2, 2, 1], Activator::Linear, 0));
        assert!(trainer.correct_weights(&[vec![0.0, 0.0]]).is_err());
        assert!(trainer.correct_weights(&[vec![0.0], vec![0.0]]).is_err());
        assert!(trainer.correct_weights(&[vec![0.0, 0.0], vec![0.0]]).is_ok());
    }

    #[test]
    fn epoch_error_reflects_updated_weights() {
        let mut trainer =
            Trainer::new(connected(&[2, 2, 1], Activator::Sigmoid, 4)).learning_rate(1.0);
        let reported = trainer
            .supervised_train(SupervisedMethod::GradientDescent, &OR_INPUTS, &OR_TARGETS)
            .unwrap();
        let network = trainer.network_mut();
        let measured: f64 = OR_INPUTS
            .iter()
            .zip(&OR_TARGETS)
            .map(|(x, t)| sample_error(network, x, t))
            .sum();
        assert_relative_eq!(reported, measured, epsilon = 1e-12);
    }

    #[test]
    fn learns_or() {
        let mut trainer =
            Trainer::new(connected(&[2, 2, 2, 1], Activator::Sigmoid, 2024)).learning_rate(1.0);
        let mut errors = Vec::new();
        for _ in 0..100_000 {
            let error = trainer
                .supervised_train(SupervisedMethod::GradientDescent, &OR_INPUTS, &OR_TARGETS)
                .unwrap();
            errors.push(error);
            if error < 1e-3 {
                break;
            }
        }
        let last = errors[errors.len() - 1];
        assert!(last < 1e-3, "error still {} after {} epochs", last, errors.len());
        let head = errors.iter().take(100).sum::<f64>() / 100f64.min(errors.len() as f64);
        let tail = errors.iter().rev().take(100).sum::<f64>() / 100f64.min(errors.len() as f64);
        assert!(tail < head);

        let network = trainer.network_mut();
        for (input, target) in OR_INPUTS.iter().zip(&OR_TARGETS) {
            let y = network.forward(input).unwrap()[0];
            assert_eq!(y > 0.5, target[0] > 0.5, "{:?} -> {}", input, y);
        }
    }

    #[test]
    fn train_stops_on_condition() {
        let mut trainer = Trainer::new(connected(&[2, 2, 1], Activator::Sigmoid, 6))
            .logging(Logging::Silent)
            .stop_condition(StopCondition::Iterations(25));
        let report = trainer
            .train(SupervisedMethod::GradientDescent, &OR_INPUTS, &OR_TARGETS)
            .unwrap();
        assert_eq!(report.epochs, 25);

        let mut trainer = Trainer::new(connected(&[2, 2, 1], Activator::Sigmoid, 6))
            .logging(Logging::Iterations(1))
            .stop_condition(StopCondition::ErrorThreshold(f64::INFINITY));
        let report = trainer
            .train(SupervisedMethod::GradientDescent, &OR_INPUTS, &OR_TARGETS)
            .unwrap();
        assert_eq!(report.epochs, 1);

        let mut trainer = Trainer::new(connected(&[2, 1], Activator::Sigmoid, 6))
            .logging(Logging::Silent)
            .stop_condition(Duration::from_millis(0));
        let report = trainer
            .train(SupervisedMethod::GradientDescent, &OR_INPUTS, &OR_TARGETS)
            .unwrap();
        assert!(report.epochs >= 1);
    }

    #[test]
    fn input_only_network_has_nothing_to_train() {
        let mut trainer = Trainer::new(connected(&[2], Activator::Linear, 0));
        let errors = trainer.gradient_descent(&[1.0, 2.0], &[1.0, 2.0]).unwrap();
        assert!(errors.is_empty());
        trainer.correct_weights(&errors).unwrap();
        assert!(trainer.network().input_layer().is_pass_through());
    }
}
