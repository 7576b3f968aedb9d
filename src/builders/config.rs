use std::path::PathBuf;
use std::time::Duration;
use crate::config::CollectorConfig;
use crate::error::Result;

/// Builder for CollectorConfig
pub struct CollectorConfigBuilder {
    config: CollectorConfig,
}

impl CollectorConfigBuilder {
    /// Create a new builder starting from the default configuration
    pub fn new() -> Self {
        CollectorConfigBuilder {
            config: CollectorConfig::default(),
        }
    }

    /// Set the report title
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.config.title = Some(title.into());
        self
    }

    /// Set the expected iterations per epoch
    pub fn epoch_length(mut self, epoch_length: usize) -> Self {
        self.config.epoch_length = Some(epoch_length);
        self
    }

    /// Enable or disable forwarding to the telemetry sink
    pub fn remote_telemetry(mut self, enabled: bool) -> Self {
        self.config.enable_remote_telemetry = enabled;
        self
    }

    /// Set the directory telemetry runs are written under
    pub fn telemetry_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.telemetry_dir = dir.into();
        self
    }

    /// Set the report snapshot path
    pub fn report_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.report_path = Some(path.into());
        self
    }

    /// Set the latest-values snapshot path
    pub fn snapshot_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.snapshot_path = Some(path.into());
        self
    }

    /// Disable both snapshot files
    pub fn no_snapshots(mut self) -> Self {
        self.config.report_path = None;
        self.config.snapshot_path = None;
        self
    }

    /// Set the interval used by `print_periodically`
    pub fn print_interval(mut self, interval: Duration) -> Self {
        self.config.print_interval_secs = interval.as_secs_f64();
        self
    }

    /// Render timestamps at a fixed UTC offset (default 0)
    pub fn utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.config.utc_offset_minutes = Some(minutes);
        self
    }

    /// Render timestamps in the host's local zone
    pub fn local_time(mut self) -> Self {
        self.config.utc_offset_minutes = None;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<CollectorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for CollectorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
