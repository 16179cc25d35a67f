pub mod network;
pub mod topology;

pub use network::{Network, DEFAULT_LEARNING_RATE};
pub use topology::Topology;
