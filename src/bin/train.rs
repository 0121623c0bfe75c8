//! Trains one of the demo networks and prints its answers.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use neuronet::activator::Activator;
use neuronet::config::TrainingConfig;
use neuronet::trainer::{Logging, StopCondition, SupervisedMethod};

#[derive(Parser, Debug)]
#[command(author, version, about = "Train a demo feed-forward network")]
struct Args {
    #[command(subcommand)]
    demo: Demo,

    /// Seed for weights and generated samples
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// JSON training config replacing the demo's defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Load parameters from this snapshot instead of training
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the trained parameters to this snapshot
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Stop after this many epochs regardless of the config
    #[arg(long)]
    max_epochs: Option<usize>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Demo {
    /// Logical OR of two inputs
    Or,
    /// Dollar to euro conversion, `y = 1.113 x`
    Convert,
    /// Product of three numbers in [0, 1], encoded as `1 / (1 + e^(x1 x2 x3))`
    Multiply,
}

const EXCHANGE_RATE: f64 = 1.113;

impl Demo {
    fn default_config(self) -> TrainingConfig {
        let (layers, activator, learning_rate, stop_condition) = match self {
            Demo::Or => (
                vec![2, 2, 2, 1],
                Activator::Sigmoid,
                1.0,
                StopCondition::ErrorThreshold(1e-4),
            ),
            Demo::Convert => (
                vec![1, 2, 1],
                Activator::Linear,
                1e-9,
                StopCondition::Iterations(100_000),
            ),
            Demo::Multiply => (
                vec![3, 3, 2, 1],
                Activator::Sigmoid,
                0.85,
                StopCondition::Iterations(100_000),
            ),
        };
        TrainingConfig {
            layers,
            activator,
            param: 1.0,
            learning_rate,
            stop_condition,
            logging: Logging::Iterations(10_000),
        }
    }

    /// Training inputs and targets.
    fn samples(self, rng: &mut StdRng) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let inputs: Vec<Vec<f64>> = match self {
            Demo::Or => vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
            Demo::Convert => (0..20).map(|_| vec![f64::from(rng.gen_range(0i32..100))]).collect(),
            Demo::Multiply => {
                let mut inputs = vec![vec![1.0, 1.0, 1.0]];
                // Samples pinning one factor to 0 or 1, then plain random ones.
                for pinned in 0..3 {
                    let mut x: Vec<f64> = (0..3).map(|_| rng.gen()).collect();
                    x[pinned] = 0.0;
                    inputs.push(x);
                }
                for pinned in 0..6 {
                    let mut x: Vec<f64> = (0..3).map(|_| rng.gen()).collect();
                    x[pinned % 3] = 1.0;
                    if pinned < 3 {
                        x[(pinned + 1) % 3] = 1.0;
                    }
                    inputs.push(x);
                }
                inputs.extend((0..64).map(|_| (0..3).map(|_| rng.gen()).collect::<Vec<f64>>()));
                inputs
            }
        };
        let targets = inputs.iter().map(|x| vec![self.expected(x)]).collect();
        (inputs, targets)
    }

    fn expected(self, x: &[f64]) -> f64 {
        match self {
            Demo::Or => if x[0] > 0.5 || x[1] > 0.5 { 1.0 } else { 0.0 },
            Demo::Convert => x[0] * EXCHANGE_RATE,
            Demo::Multiply => 1.0 / (1.0 + (x[0] * x[1] * x[2]).exp()),
        }
    }

    /// Inputs to show answers for once training is done.
    fn showcase(self, rng: &mut StdRng) -> Vec<Vec<f64>> {
        match self {
            Demo::Or => vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
            Demo::Convert => vec![vec![1.0], vec![10.0], vec![42.0], vec![99.0]],
            Demo::Multiply => (0..5).map(|_| (0..3).map(|_| rng.gen()).collect()).collect(),
        }
    }

    fn report(self, input: &[f64], output: f64) {
        match self {
            Demo::Multiply => println!(
                "{:?} -> {:.4} (expected {:.4})",
                input,
                (1.0 / output - 1.0).ln(),
                input.iter().product::<f64>()
            ),
            _ => println!(
                "{:?} -> {:.4} (expected {:.4})",
                input,
                output,
                self.expected(input)
            ),
        }
    }
}

fn main() -> neuronet::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let mut config = match &args.config {
        Some(path) => TrainingConfig::from_path(path)?,
        None => args.demo.default_config(),
    };
    if let Some(epochs) = args.max_epochs {
        config.stop_condition = StopCondition::Iterations(epochs);
    }
    info!(demo = ?args.demo, layers = ?config.layers, "building network");

    let network = config.build_network(&mut rng)?;
    let mut trainer = config.build_trainer(network);
    match &args.load {
        Some(path) => {
            trainer.load(path)?;
            info!(path = %path.display(), "loaded parameters");
        }
        None => {
            let (inputs, targets) = args.demo.samples(&mut rng);
            trainer.train(SupervisedMethod::GradientDescent, &inputs, &targets)?;
        }
    }
    if let Some(path) = &args.snapshot {
        trainer.save(path)?;
        info!(path = %path.display(), "saved parameters");
    }

    let network = trainer.network_mut();
    for input in args.demo.showcase(&mut rng) {
        let output = network.forward(&input)?;
        args.demo.report(&input, output[0]);
    }
    Ok(())
}
