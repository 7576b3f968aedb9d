//! Metric series collection and reporting
//!
//! [`MetricSeriesCollector`] keeps a rolling window of the last [`MAX_ENTRIES`]
//! observations per metric name, a lifetime observation count per name and a
//! correct/total accumulator per prediction stream. Reports list every metric in
//! sorted order with its window mean, the mean of its last 10 values and a sparkline.
//!
//! ```rust,no_run
//! use trendlog::collector::MetricSeriesCollector;
//! use trendlog::builders::CollectorConfigBuilder;
//! use std::time::Duration;
//!
//! let config = CollectorConfigBuilder::new()
//!     .title("cartpole")
//!     .epoch_length(500)
//!     .build()
//!     .unwrap();
//! let mut collector = MetricSeriesCollector::new(config);
//!
//! for step in 0..500 {
//!     collector.collect("loss", 1.0 / (step as f32 + 1.0));
//!     collector.print_every(Duration::from_secs(4));
//! }
//! ```

pub mod shared;

pub use shared::SharedCollector;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use ndarray::ArrayView2;
use tracing::{debug, info, warn};

use crate::coerce::{coerce_or_substitute, IntoScalar};
use crate::config::CollectorConfig;
use crate::error::Result;
use crate::series::{count_agreements, PredictionAccumulator, RollingWindow, MAX_ENTRIES};
use crate::telemetry::{CsvScalarWriter, TelemetrySink};
use crate::visualization::{
    format_meter, formatted_time, shorten, sparkline, DEFAULT_NAME_WIDTH, DEFAULT_NCOLS,
    DEFAULT_SPARKLINE_LENGTH,
};

/// Number of most recent values averaged in the "Last 10" column
pub const RECENT_WINDOW: usize = 10;

/// Rolling summaries, accuracy counters and text reports for one job
pub struct MetricSeriesCollector {
    config: CollectorConfig,
    series: BTreeMap<String, RollingWindow>,
    totals: BTreeMap<String, u64>,
    // Insertion order is the report order
    predictions: Vec<(String, PredictionAccumulator)>,
    start_time: Instant,
    last_printed_at: Instant,
    sink: Option<Box<dyn TelemetrySink>>,
}

impl MetricSeriesCollector {
    /// Create a collector
    ///
    /// When `enable_remote_telemetry` is set a CSV scalar sink is opened under
    /// `telemetry_dir`; if that fails a warning is logged and forwarding stays off.
    pub fn new(config: CollectorConfig) -> Self {
        let sink: Option<Box<dyn TelemetrySink>> = if config.enable_remote_telemetry {
            match CsvScalarWriter::for_new_run(&config.telemetry_dir) {
                Ok(writer) => Some(Box::new(writer)),
                Err(err) => {
                    warn!(error = %err, dir = %config.telemetry_dir.display(), "telemetry disabled");
                    None
                }
            }
        } else {
            None
        };

        Self::build(config, sink)
    }

    /// Create a validated collector, rejecting unusable configuration
    pub fn try_new(config: CollectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a collector that forwards every observation to `sink`
    pub fn with_sink(config: CollectorConfig, sink: Box<dyn TelemetrySink>) -> Self {
        Self::build(config, Some(sink))
    }

    fn build(config: CollectorConfig, sink: Option<Box<dyn TelemetrySink>>) -> Self {
        let now = Instant::now();
        MetricSeriesCollector {
            config,
            series: BTreeMap::new(),
            totals: BTreeMap::new(),
            predictions: Vec::new(),
            start_time: now,
            last_printed_at: now,
            sink,
        }
    }

    /// Record one observation of `name`
    ///
    /// Values that cannot be coerced to a finite scalar are recorded as 0 with a warning.
    pub fn collect<V: IntoScalar>(&mut self, name: &str, value: V) {
        if self.series.is_empty() {
            self.start_time = Instant::now();
        }

        let value = coerce_or_substitute(name, &value).value();

        let window = self.series.entry(name.to_string()).or_insert_with(|| {
            debug!(metric = name, "tracking new metric");
            RollingWindow::new(MAX_ENTRIES)
        });
        let total = self.totals.entry(name.to_string()).or_insert(0);

        if let Some(sink) = self.sink.as_mut() {
            // Lifetime count keeps the step monotonic once the window is full
            let step = *total as usize;
            if let Err(err) = sink.log_value(name, value, step) {
                warn!(metric = name, step, error = %err, "failed to forward observation");
            }
        }

        window.push(value);
        *total += 1;
    }

    /// Record one batch of classification results for the stream `name`
    ///
    /// `logits` and `onehot` are `(batch, classes)` arrays; a row counts as correct
    /// when both arg-maxes agree. Returns the number correct in this batch.
    pub fn collect_prediction(
        &mut self,
        name: &str,
        logits: ArrayView2<f32>,
        onehot: ArrayView2<f32>,
    ) -> Result<usize> {
        let idx = match self.predictions.iter().position(|(n, _)| n == name) {
            Some(idx) => idx,
            None => {
                debug!(stream = name, "tracking new prediction stream");
                self.predictions.push((name.to_string(), PredictionAccumulator::new()));
                self.predictions.len() - 1
            }
        };

        let correct = count_agreements(logits, onehot)?;
        self.predictions[idx].1.record(correct as u64, onehot.nrows() as u64);
        Ok(correct)
    }

    /// Print a report if more than `interval` has passed since the last one
    ///
    /// Returns whether a report was printed.
    pub fn print_every(&mut self, interval: Duration) -> bool {
        if self.last_printed_at.elapsed() > interval {
            println!("{}", self.format_all());
            self.last_printed_at = Instant::now();
            true
        } else {
            false
        }
    }

    /// [`print_every`](Self::print_every) with the configured interval
    pub fn print_periodically(&mut self) -> bool {
        let interval = Duration::try_from_secs_f64(self.config.print_interval_secs.max(0.0))
            .unwrap_or(Duration::MAX);
        self.print_every(interval)
    }

    /// Render the report and refresh the snapshot files
    ///
    /// Snapshot write failures are logged and never affect the returned text.
    pub fn format_all(&self) -> String {
        let text = self.render();
        if let Err(err) = self.persist_snapshots(&text) {
            warn!(error = %err, "failed to write summary snapshots");
        }
        text
    }

    /// Render the report text without touching the filesystem
    pub fn render(&self) -> String {
        let mut lines = vec![String::new()];

        if let Some(title) = &self.config.title {
            lines.push(title.clone());
        }

        let elapsed = self.elapsed();
        let secs = elapsed.as_secs_f64();
        lines.push(format!(
            "Collected {:.3} sec ending {}",
            secs,
            formatted_time(self.config.utc_offset_minutes)
        ));

        let points = self.max_total();
        match self.config.epoch_length {
            Some(epoch_length) => {
                lines.push(format_meter(points as usize, epoch_length, elapsed, DEFAULT_NCOLS));
            }
            None => {
                let rate = if secs > 0.0 { points as f64 / secs } else { 0.0 };
                lines.push(format!("Collected {:8} points ({:.2}/sec)", points, rate));
            }
        }

        lines.push(format!(
            "{:>32}{:>14}{:>16}",
            "Name",
            format!("Last {}", MAX_ENTRIES),
            format!("Last {}", RECENT_WINDOW)
        ));

        for (name, window) in &self.series {
            let values = window.to_vec();
            lines.push(format!(
                "{:>32}:      {:8.4}      {:8.4} {}",
                shorten(name, DEFAULT_NAME_WIDTH),
                window.mean().unwrap_or(0.0),
                window.tail_mean(RECENT_WINDOW).unwrap_or(0.0),
                sparkline(&values, DEFAULT_SPARKLINE_LENGTH)
            ));
        }

        if !self.predictions.is_empty() {
            lines.push("Predictions:".to_string());
        }
        for (name, acc) in &self.predictions {
            let shown = shorten(name, DEFAULT_NAME_WIDTH);
            let line = match acc.accuracy() {
                Some(accuracy) => format!(
                    "{:>32}:\t{:.2}% ({}/{})",
                    shown, 100.0 * accuracy, acc.correct, acc.total
                ),
                None => format!("{:>32}:\tN/A ({}/{})", shown, acc.correct, acc.total),
            };
            lines.push(line);
        }

        lines.push("\n".to_string());
        lines.join("\n")
    }

    /// Overwrite the report and latest-values snapshot files
    pub fn persist_snapshots(&self, text: &str) -> Result<()> {
        if let Some(path) = &self.config.report_path {
            std::fs::write(path, text)?;
            debug!(path = %path.display(), "wrote report snapshot");
        }

        if let Some(path) = &self.config.snapshot_path {
            let json = serde_json::to_string_pretty(&self.latest_values())?;
            std::fs::write(path, json)?;
            debug!(path = %path.display(), "wrote latest values snapshot");
        }

        Ok(())
    }

    /// Export every rolling window as JSON to `<dir>/timeseries.<unix secs>.json`
    pub fn write_to_file<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let path = dir.as_ref().join(format!("timeseries.{}.json", secs));

        let export: BTreeMap<&str, Vec<f64>> = self.series
            .iter()
            .map(|(name, window)| (name.as_str(), window.to_vec()))
            .collect();

        std::fs::write(&path, serde_json::to_string_pretty(&export)?)?;
        info!(path = %path.display(), metrics = export.len(), "exported time series");
        Ok(path)
    }

    /// Flush the telemetry sink, if any
    pub fn flush_telemetry(&mut self) -> Result<()> {
        match self.sink.as_mut() {
            Some(sink) => sink.flush(),
            None => Ok(()),
        }
    }

    /// Most recent value of every metric
    pub fn latest_values(&self) -> BTreeMap<String, f64> {
        self.series
            .iter()
            .filter_map(|(name, window)| window.last().map(|v| (name.clone(), v)))
            .collect()
    }

    /// Rolling window for a metric
    pub fn series(&self, name: &str) -> Option<&RollingWindow> {
        self.series.get(name)
    }

    /// Lifetime number of observations of a metric
    pub fn total(&self, name: &str) -> Option<u64> {
        self.totals.get(name).copied()
    }

    /// Accumulator for a prediction stream
    pub fn prediction(&self, name: &str) -> Option<PredictionAccumulator> {
        self.predictions
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, acc)| *acc)
    }

    /// Metric names in sorted order
    pub fn metric_names(&self) -> Vec<&str> {
        self.series.keys().map(|k| k.as_str()).collect()
    }

    /// Prediction stream names in insertion order
    pub fn prediction_names(&self) -> Vec<&str> {
        self.predictions.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Largest lifetime count across all metrics
    pub fn max_total(&self) -> u64 {
        self.totals.values().copied().max().unwrap_or(0)
    }

    /// Time since the first observation (or construction, before any)
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    pub fn has_telemetry(&self) -> bool {
        self.sink.is_some()
    }
}

impl Default for MetricSeriesCollector {
    fn default() -> Self {
        Self::new(CollectorConfig::default())
    }
}

impl fmt::Display for MetricSeriesCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
