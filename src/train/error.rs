use thiserror::Error;

use crate::math::MatrixError;

#[derive(Debug, Error)]
pub enum TrainError {
    #[error("training set is empty")]
    EmptyDataset,

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
