use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use log::{info, LevelFilter};

use hidden_mlp::{
    train::xor_samples, train_loop, DumpWriter, Network, RunConfig,
};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("HIDDEN_MLP_LOG", "info"))
        .init();

    let matches = Command::new("hidden-mlp")
        .version(clap::crate_version!())
        .about("Trains a single-hidden-layer perceptron on the XOR patterns")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON run configuration")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("epochs")
                .short('e')
                .long("epochs")
                .help("Overrides the number of training epochs")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output-dir")
                .help("Overrides the directory dumps are written to")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("no_dump")
                .long("no-dump")
                .help("Skip writing weight dumps and input/output logs")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => RunConfig::load_json(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => RunConfig::default(),
    };
    if let Some(&epochs) = matches.get_one::<usize>("epochs") {
        config.train.epochs = epochs;
    }
    if let Some(dir) = matches.get_one::<PathBuf>("output_dir") {
        config.output_dir = dir.clone();
    }
    if matches.get_flag("no_dump") {
        config.dump = false;
    }
    config.validate()?;

    let samples = xor_samples();
    config
        .validate_samples(&samples)
        .context("topology does not fit the XOR training set")?;
    let mut network = Network::from_topology(&config.topology);

    let mut writer = if config.dump {
        let writer = DumpWriter::new(&config.output_dir)
            .with_context(|| format!("creating {}", config.output_dir.display()))?;
        writer.write_inputs(&samples)?;
        writer.write_network(&network, 'b')?;
        Some(writer)
    } else {
        None
    };

    let history = train_loop(&mut network, &samples, &config.train)?;
    if let Some(last) = history.last() {
        info!("final loss after {} epochs: {:.6}", last.epoch, last.loss);
    }

    if let Some(writer) = writer.as_ref() {
        writer.write_network(&network, 'a')?;
    }

    for sample in &samples {
        let output = network.predict(&sample.input)?;
        println!("Input: {:?} -> Output: {:.4?}", sample.input, output);
        if let Some(writer) = writer.as_mut() {
            writer.write_output(&output)?;
        }
    }

    if let Some(writer) = writer.as_mut() {
        writer.flush()?;
    }

    Ok(())
}
