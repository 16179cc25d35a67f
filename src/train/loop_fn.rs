use std::time::{Duration, Instant};

use log::{debug, info};

use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::error::TrainError;
use crate::train::sample::Sample;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::{evaluate, train_epoch};

/// Trains `network` for `config.epochs` online epochs and returns the loss
/// history sampled every `config.log_every` epochs.
///
/// The network's learning rate is overwritten with `config.learning_rate`
/// before the first epoch. The last epoch always appears in the history.
/// `EpochStats::elapsed_ms` counts training passes only; loss evaluation
/// for the snapshots is excluded.
pub fn train_loop(
    network: &mut Network,
    samples: &[Sample],
    config: &TrainConfig,
) -> Result<Vec<EpochStats>, TrainError> {
    if samples.is_empty() {
        return Err(TrainError::EmptyDataset);
    }

    network.set_learning_rate(config.learning_rate);
    let log_every = config.log_every.max(1);
    let mut history = Vec::new();
    let mut train_time = Duration::ZERO;

    debug!(
        "training {} samples for {} epochs (lr = {}, shuffle = {})",
        samples.len(),
        config.epochs,
        config.learning_rate,
        config.shuffle
    );

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        train_epoch(network, samples, config.shuffle)?;
        train_time += t_start.elapsed();

        if epoch % log_every == 0 || epoch == config.epochs {
            let loss = evaluate(network, samples)?;
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                loss,
                elapsed_ms: train_time.as_millis() as u64,
            };
            info!("epoch {}/{}: loss = {:.6}", stats.epoch, stats.total_epochs, stats.loss);
            history.push(stats);
            train_time = Duration::ZERO;
        }
    }

    Ok(history)
}
