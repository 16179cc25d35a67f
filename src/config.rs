//! Run configuration for the `hidden-mlp` binary.
//!
//! Every field has a default, so an empty JSON object is a valid config:
//!
//! ```json
//! {
//!   "topology": { "input_size": 2, "hidden_size": 4, "output_size": 1 },
//!   "train": { "epochs": 5000, "learning_rate": 0.5, "shuffle": true, "log_every": 500 },
//!   "output_dir": "output_files",
//!   "dump": true
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::Topology;
use crate::train::{Sample, TrainConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub topology: Topology,
    pub train: TrainConfig,
    /// Directory the matrix dumps and logs are written to.
    pub output_dir: PathBuf,
    /// Write before/after weight dumps and the input/output logs.
    pub dump: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            topology: Topology::default(),
            train: TrainConfig::default(),
            output_dir: PathBuf::from("output_files"),
            dump: true,
        }
    }
}

impl RunConfig {
    /// Reads and validates a JSON config file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<RunConfig, ConfigError> {
        let contents = fs::read_to_string(path)?;
        RunConfig::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> Result<RunConfig, ConfigError> {
        let config: RunConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.topology.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "every layer needs at least one unit, got {:?}",
                self.topology
            )));
        }
        if self.train.epochs == 0 {
            return Err(ConfigError::Invalid("epochs must be at least 1".into()));
        }
        if !self.train.learning_rate.is_finite() || self.train.learning_rate <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "learning_rate must be positive and finite, got {}",
                self.train.learning_rate
            )));
        }
        if self.train.log_every == 0 {
            return Err(ConfigError::Invalid("log_every must be at least 1".into()));
        }
        Ok(())
    }

    /// Checks that every sample fits the configured input and output layers.
    pub fn validate_samples(&self, samples: &[Sample]) -> Result<(), ConfigError> {
        let Topology { input_size, output_size, .. } = self.topology;

        for (i, sample) in samples.iter().enumerate() {
            if sample.input.len() != input_size || sample.target.len() != output_size {
                return Err(ConfigError::Invalid(format!(
                    "sample {i} has {} inputs and {} targets, topology expects {input_size} and {output_size}",
                    sample.input.len(),
                    sample.target.len(),
                )));
            }
        }
        Ok(())
    }
}
