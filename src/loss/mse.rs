use crate::math::MatrixError;

pub struct MseLoss;

impl MseLoss {
    /// Mean of the squared differences between `predicted` and `expected`.
    ///
    /// Both slices must have the same length; a target that is longer or
    /// shorter than the network output is a `DimensionMismatch`.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> Result<f64, MatrixError> {
        if predicted.len() != expected.len() {
            return Err(MatrixError::DimensionMismatch {
                op: "mse",
                left: (predicted.len(), 1),
                right: (expected.len(), 1),
            });
        }

        let n = predicted.len() as f64;
        let total: f64 = predicted.iter().zip(expected)
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        Ok(total / n)
    }
}
