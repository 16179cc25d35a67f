pub mod epoch_stats;
pub mod error;
pub mod loop_fn;
pub mod sample;
pub mod train_config;
pub mod trainer;

pub use epoch_stats::EpochStats;
pub use error::TrainError;
pub use loop_fn::train_loop;
pub use sample::{xor_samples, Sample};
pub use train_config::TrainConfig;
pub use trainer::{evaluate, train_epoch};
