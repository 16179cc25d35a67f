use thiserror::Error;

/// Failures raised by `Matrix` operations.
///
/// Neither variant is recovered inside the crate; callers receive them
/// unchanged from whichever operation detected the fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("dimension mismatch in {op}: left is {}x{}, right is {}x{}", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
