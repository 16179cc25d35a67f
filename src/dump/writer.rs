use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::dump::error::DumpError;
use crate::dump::tags::{bias_file_name, weight_file_name, LayerKind, Timing};
use crate::math::Matrix;
use crate::network::Network;
use crate::train::Sample;

pub const OUTPUT_LOG: &str = "Output.txt";
pub const INPUT_LOG: &str = "Input.txt";

/// Writes human-readable dumps of network state into a single directory.
///
/// Weight and bias dumps and the input log overwrite their file on every
/// call. The output log is append-only: its handle is opened on the first
/// `write_output` and held until the writer is dropped.
pub struct DumpWriter {
    dir: PathBuf,
    output_log: Option<BufWriter<File>>,
}

impl DumpWriter {
    /// Creates `dir` (and parents) if it does not exist yet.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<DumpWriter, DumpError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(DumpWriter { dir, output_log: None })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn overwrite(&self, file_name: &str, contents: &str) -> Result<(), DumpError> {
        let path = self.dir.join(file_name);
        let mut writer = BufWriter::new(File::create(&path)?);
        writeln!(writer, "{contents}")?;
        writer.flush()?;
        debug!("wrote {}", path.display());
        Ok(())
    }

    pub fn write_bias(&self, bias: &Matrix, kind: LayerKind, timing: Timing) -> Result<(), DumpError> {
        self.overwrite(&bias_file_name(kind, timing), &bias.render())
    }

    pub fn write_weight(&self, weight: &Matrix, kind: LayerKind, timing: Timing) -> Result<(), DumpError> {
        self.overwrite(&weight_file_name(kind, timing), &weight.render())
    }

    /// Dumps all four weight and bias matrices of `network`.
    ///
    /// `timing` is the single-character tag `b` (before training) or `a`
    /// (after); the layer tags `h` and `o` select the input→hidden and
    /// hidden→output parameters.
    pub fn write_network(&self, network: &Network, timing: char) -> Result<(), DumpError> {
        let timing = Timing::try_from(timing)?;

        for tag in ['h', 'o'] {
            let kind = LayerKind::try_from(tag)?;
            let (weight, bias) = match kind {
                LayerKind::Hidden => (network.weights_ih(), network.bias_h()),
                LayerKind::Output => (network.weights_ho(), network.bias_o()),
            };
            self.write_weight(weight, kind, timing)?;
            self.write_bias(bias, kind, timing)?;
        }
        Ok(())
    }

    /// Appends `output` followed by a blank line to the output log.
    pub fn write_output(&mut self, output: &[f64]) -> Result<(), DumpError> {
        if self.output_log.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.dir.join(OUTPUT_LOG))?;
            self.output_log = Some(BufWriter::new(file));
        }

        if let Some(log) = self.output_log.as_mut() {
            writeln!(log, "{output:?}\n")?;
            log.flush()?;
        }
        Ok(())
    }

    /// Replaces the input log with the given samples.
    pub fn write_inputs(&self, samples: &[Sample]) -> Result<(), DumpError> {
        let listed: Vec<String> = samples.iter().map(|s| s.to_string()).collect();
        self.overwrite(INPUT_LOG, &format!("[{}]", listed.join(", ")))
    }

    pub fn flush(&mut self) -> Result<(), DumpError> {
        if let Some(log) = self.output_log.as_mut() {
            log.flush()?;
        }
        Ok(())
    }
}
