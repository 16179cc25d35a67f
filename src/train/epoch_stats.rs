use serde::{Serialize, Deserialize};

/// Loss snapshot recorded by `train_loop` every `log_every` epochs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Mean squared error over the whole training set after this epoch.
    pub loss: f64,
    /// Time spent in training passes since the previous snapshot, in milliseconds.
    /// Loss evaluation is not included.
    pub elapsed_ms: u64,
}
