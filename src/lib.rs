pub mod math;
pub mod activation;
pub mod network;
pub mod loss;
pub mod train;
pub mod dump;
pub mod config;

// Convenience re-exports
pub use math::{Matrix, MatrixError};
pub use activation::{sigmoid, sigmoid_derivative};
pub use network::{Network, Topology};
pub use loss::MseLoss;
pub use train::{train_loop, Sample, TrainConfig, TrainError};
pub use dump::{DumpWriter, LayerKind, Timing};
pub use config::{ConfigError, RunConfig};
