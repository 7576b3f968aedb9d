//! Collector configuration
//!
//! A [`CollectorConfig`] is passed to the collector at construction time. It can be
//! built in code (see [`crate::builders::CollectorConfigBuilder`]) or loaded from a
//! JSON file; every field has a default so partial files are accepted.

use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use crate::error::{Result, TrendlogError};

/// Default report snapshot file, overwritten on every render
pub const DEFAULT_REPORT_PATH: &str = ".last_summary.log";

/// Default latest-values snapshot file, overwritten on every render
pub const DEFAULT_SNAPSHOT_PATH: &str = ".last_summary.json";

/// Default directory under which telemetry runs are created
pub const DEFAULT_TELEMETRY_DIR: &str = "runs";

/// Default throttle interval for periodic printing, in seconds
pub const DEFAULT_PRINT_INTERVAL_SECS: f64 = 4.0;

/// Default report timestamp offset: UTC, independent of the host zone
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 0;

// 14 hours either side of UTC covers every real zone
const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Configuration for a [`crate::collector::MetricSeriesCollector`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Optional label printed at the top of each report
    pub title: Option<String>,

    /// Expected iterations per epoch; enables the progress meter line
    pub epoch_length: Option<usize>,

    /// Forward every observation to a CSV scalar sink
    pub enable_remote_telemetry: bool,

    /// Directory under which the telemetry run directory is created
    pub telemetry_dir: PathBuf,

    /// Where the rendered report is written; `None` disables it
    pub report_path: Option<PathBuf>,

    /// Where the latest value of each metric is written; `None` disables it
    pub snapshot_path: Option<PathBuf>,

    /// Interval used by `print_periodically`
    pub print_interval_secs: f64,

    /// Fixed UTC offset for report timestamps, UTC by default
    ///
    /// `None` opts into the host's local zone, so reports differ between machines.
    pub utc_offset_minutes: Option<i32>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        CollectorConfig {
            title: None,
            epoch_length: None,
            enable_remote_telemetry: false,
            telemetry_dir: PathBuf::from(DEFAULT_TELEMETRY_DIR),
            report_path: Some(PathBuf::from(DEFAULT_REPORT_PATH)),
            snapshot_path: Some(PathBuf::from(DEFAULT_SNAPSHOT_PATH)),
            print_interval_secs: DEFAULT_PRINT_INTERVAL_SECS,
            utc_offset_minutes: Some(DEFAULT_UTC_OFFSET_MINUTES),
        }
    }
}

impl CollectorConfig {
    /// Parse a configuration from a JSON string and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CollectorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file and validate it
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Check that all values are usable
    pub fn validate(&self) -> Result<()> {
        if self.epoch_length == Some(0) {
            return Err(TrendlogError::invalid_parameter(
                "epoch_length",
                "Epoch length must be greater than 0",
            ));
        }

        if !self.print_interval_secs.is_finite() || self.print_interval_secs < 0.0 {
            return Err(TrendlogError::invalid_parameter(
                "print_interval_secs",
                "Print interval must be a non-negative number of seconds",
            ));
        }

        if let Some(offset) = self.utc_offset_minutes {
            if offset.abs() > MAX_UTC_OFFSET_MINUTES {
                return Err(TrendlogError::InvalidParameter {
                    name: "utc_offset_minutes".to_string(),
                    reason: format!("Offset {} is outside +/-{} minutes", offset, MAX_UTC_OFFSET_MINUTES),
                });
            }
        }

        Ok(())
    }
}
