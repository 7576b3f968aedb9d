//! Telemetry forwarding
//!
//! When enabled, every observation the collector records is also forwarded to a
//! [`TelemetrySink`] as a `(name, value, step)` triple, where `step` is the
//! zero-based position of the value within its metric's stream. The bundled
//! [`CsvScalarWriter`] writes those triples to a per-run CSV file that can be
//! plotted or converted for TensorBoard.

use std::fs::{File, create_dir_all};
use std::io::{Write, BufWriter};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::debug;
use crate::error::Result;

/// Receiver for forwarded observations
pub trait TelemetrySink: Send {
    /// Record one observation; called in observation order
    fn log_value(&mut self, name: &str, value: f64, step: usize) -> Result<()>;

    /// Push buffered output to its destination
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes forwarded scalars to `<log_dir>/<run_name>/scalars.csv`
pub struct CsvScalarWriter {
    run_dir: PathBuf,
    started: Instant,
    writer: BufWriter<File>,
}

impl CsvScalarWriter {
    /// Create a writer for a named run
    ///
    /// # Arguments
    /// * `log_dir` - Directory holding all runs
    /// * `run_name` - Name of this run's subdirectory
    pub fn new<P: AsRef<Path>>(log_dir: P, run_name: &str) -> Result<Self> {
        let run_dir = log_dir.as_ref().join(run_name);
        create_dir_all(&run_dir)?;

        let file = File::create(run_dir.join("scalars.csv"))?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "step,tag,value,wall_time")?;

        debug!(run_dir = %run_dir.display(), "created telemetry run");

        Ok(Self {
            run_dir,
            started: Instant::now(),
            writer,
        })
    }

    /// Create a writer for a run named `run-<unix seconds>`
    pub fn for_new_run<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::new(log_dir, &format!("run-{}", secs))
    }

    /// Directory this run writes into
    pub fn run_dir(&self) -> &Path {
        &self.run_dir
    }

    /// Path of the scalar CSV file
    pub fn scalars_path(&self) -> PathBuf {
        self.run_dir.join("scalars.csv")
    }
}

impl TelemetrySink for CsvScalarWriter {
    fn log_value(&mut self, name: &str, value: f64, step: usize) -> Result<()> {
        let wall_time = self.started.elapsed().as_secs_f64();
        writeln!(self.writer, "{},{},{},{:.3}", step, csv_field(name), value, wall_time)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

// Quote tags that would otherwise break the row
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl Drop for CsvScalarWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
