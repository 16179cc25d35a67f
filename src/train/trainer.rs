use rand::seq::SliceRandom;

use crate::{
    loss::mse::MseLoss,
    network::network::Network,
    train::{error::TrainError, sample::Sample},
};

/// One online pass: a single `Network::train` call per sample.
///
/// With `shuffle` the visiting order is drawn fresh from the thread RNG;
/// otherwise samples are visited in slice order.
pub fn train_epoch(
    network: &mut Network,
    samples: &[Sample],
    shuffle: bool,
) -> Result<(), TrainError> {
    if samples.is_empty() {
        return Err(TrainError::EmptyDataset);
    }

    let mut indices: Vec<usize> = (0..samples.len()).collect();
    if shuffle {
        indices.shuffle(&mut rand::thread_rng());
    }

    for idx in indices {
        let sample = &samples[idx];
        network.train(&sample.input, &sample.target)?;
    }

    Ok(())
}

/// Mean over `samples` of the per-sample MSE between prediction and target.
///
/// A target whose length differs from the output layer is a `DimensionMismatch`.
pub fn evaluate(network: &Network, samples: &[Sample]) -> Result<f64, TrainError> {
    if samples.is_empty() {
        return Err(TrainError::EmptyDataset);
    }

    let mut total = 0.0;
    for sample in samples {
        let output = network.predict(&sample.input)?;
        total += MseLoss::loss(&output, &sample.target)?;
    }

    Ok(total / samples.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::MatrixError;
    use crate::train::sample::xor_samples;

    #[test]
    fn empty_dataset_is_rejected() {
        let mut net = Network::new(2, 2, 1);
        assert!(matches!(train_epoch(&mut net, &[], false), Err(TrainError::EmptyDataset)));
        assert!(matches!(evaluate(&net, &[]), Err(TrainError::EmptyDataset)));
    }

    #[test]
    fn evaluate_rejects_oversized_target() {
        let net = Network::new(2, 2, 1);
        let samples = [Sample::new(vec![0.0, 1.0], vec![1.0, 0.0, 5.0])];

        assert!(matches!(
            evaluate(&net, &samples),
            Err(TrainError::Matrix(MatrixError::DimensionMismatch { op: "mse", .. }))
        ));
    }

    #[test]
    fn epoch_changes_weights() {
        let mut net = Network::new(2, 2, 1);
        let before = net.weights_ih().clone();

        train_epoch(&mut net, &xor_samples(), true).unwrap();

        assert_ne!(net.weights_ih(), &before);
    }

    #[test]
    fn mismatched_sample_surfaces_matrix_error() {
        let mut net = Network::new(2, 2, 1);
        let bad = vec![Sample::new(vec![1.0, 2.0, 3.0], vec![1.0])];
        assert!(matches!(train_epoch(&mut net, &bad, false), Err(TrainError::Matrix(_))));
    }
}
