use serde::{Serialize, Deserialize};

use crate::network::DEFAULT_LEARNING_RATE;

/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `epochs`        — full passes over the training set
/// - `learning_rate` — assigned to the network before the first epoch
/// - `shuffle`       — visit samples in a fresh random order each epoch
/// - `log_every`     — record and log an `EpochStats` every N epochs (the
///                     final epoch is always recorded)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub shuffle: bool,
    pub log_every: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            ..TrainConfig::default()
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 10_000,
            learning_rate: DEFAULT_LEARNING_RATE,
            shuffle: true,
            log_every: 1_000,
        }
    }
}
