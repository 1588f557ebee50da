//! Timing harness comparing the six multiplication loop orders
//!
//! For each matrix size and each [`LoopOrder`], fresh random square matrices
//! are multiplied `repetitions` times and the mean wall-clock time is
//! reported in milliseconds.

use crate::error::DenseError;
use crate::multiply::{LoopOrder, multiply};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Instant;
use thiserror::Error;

/// Errors raised by the benchmark harness.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The configuration cannot be run.
    #[error("invalid benchmark configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A kernel call failed.
    #[error(transparent)]
    Dense(#[from] DenseError),
}

/// Benchmark configuration, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Square matrix sizes to time
    #[serde(default = "default_sizes")]
    pub sizes: Vec<usize>,
    /// Multiplications per order and size
    #[serde(default = "default_repetitions")]
    pub repetitions: usize,
    /// Loop orders to compare
    #[serde(default = "default_orders")]
    pub orders: Vec<LoopOrder>,
    /// Seed for reproducible matrices (random seed if absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_sizes() -> Vec<usize> {
    vec![10, 100, 1000]
}

fn default_repetitions() -> usize {
    10
}

fn default_orders() -> Vec<LoopOrder> {
    LoopOrder::ALL.to_vec()
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            repetitions: default_repetitions(),
            orders: default_orders(),
            seed: None,
        }
    }
}

impl BenchConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, BenchError> {
        let content = fs::read_to_string(path)?;
        let config: BenchConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes at least one non-empty run.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig("no matrix sizes given".into()));
        }
        if let Some(&size) = self.sizes.iter().find(|&&s| s == 0) {
            return Err(BenchError::InvalidConfig(format!(
                "matrix size must be positive, got {size}"
            )));
        }
        if self.repetitions == 0 {
            return Err(BenchError::InvalidConfig(
                "repetitions must be at least 1".into(),
            ));
        }
        if self.orders.is_empty() {
            return Err(BenchError::InvalidConfig("no loop orders given".into()));
        }
        Ok(())
    }
}

/// Timings of one loop order at one size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTiming {
    /// Loop order that was timed
    pub order: LoopOrder,
    /// Mean of `samples_ms`
    pub mean_ms: f64,
    /// One entry per repetition
    pub samples_ms: Vec<f64>,
}

/// All order timings for one matrix size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeReport {
    /// Side length of the square matrices
    pub size: usize,
    /// One entry per configured order, in configuration order
    pub timings: Vec<OrderTiming>,
}

/// Full benchmark output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchReport {
    /// One entry per configured size
    pub sizes: Vec<SizeReport>,
}

impl BenchReport {
    /// Order with the smallest mean time at `size`.
    pub fn fastest(&self, size: usize) -> Option<LoopOrder> {
        self.sizes
            .iter()
            .find(|r| r.size == size)?
            .timings
            .iter()
            .min_by(|a, b| a.mean_ms.total_cmp(&b.mean_ms))
            .map(|t| t.order)
    }

    /// Write the report as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), BenchError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Run the benchmark described by `config`.
pub fn run(config: &BenchConfig) -> Result<BenchReport, BenchError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut report = BenchReport::default();
    for &size in &config.sizes {
        log::info!("timing {} loop orders at n = {}", config.orders.len(), size);

        let mut timings = Vec::with_capacity(config.orders.len());
        for &order in &config.orders {
            let mut samples_ms = Vec::with_capacity(config.repetitions);
            for _ in 0..config.repetitions {
                let a = random_matrix(&mut rng, size);
                let b = random_matrix(&mut rng, size);

                let start = Instant::now();
                let c = multiply(&a, &b, order)?;
                samples_ms.push(start.elapsed().as_secs_f64() * 1000.0);
                std::hint::black_box(c);
            }
            let mean_ms = samples_ms.iter().sum::<f64>() / samples_ms.len() as f64;
            log::info!("  n = {} {}: {:.3} ms", size, order, mean_ms);
            timings.push(OrderTiming {
                order,
                mean_ms,
                samples_ms,
            });
        }
        report.sizes.push(SizeReport { size, timings });
    }

    Ok(report)
}

/// Square matrix with entries drawn uniformly from `[0, 1)`.
pub fn random_matrix<R: Rng>(rng: &mut R, n: usize) -> Array2<f64> {
    Array2::from_shape_simple_fn((n, n), || rng.random::<f64>())
}
