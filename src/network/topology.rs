use serde::{Serialize, Deserialize};

/// Layer sizes of the fixed input → hidden → output architecture.
///
/// Loaded from the `topology` section of a run configuration; the network
/// shape cannot change after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
}

impl Topology {
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Topology {
        Topology { input_size, hidden_size, output_size }
    }

    /// Every layer needs at least one unit.
    pub fn is_valid(&self) -> bool {
        self.input_size > 0 && self.hidden_size > 0 && self.output_size > 0
    }
}

impl Default for Topology {
    fn default() -> Self {
        Topology::new(2, 2, 1)
    }
}
