pub mod error;
pub mod tags;
pub mod writer;

pub use error::DumpError;
pub use tags::{LayerKind, Timing};
pub use writer::DumpWriter;
