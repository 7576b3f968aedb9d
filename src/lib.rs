//! # Trendlog - Rolling Metric Summaries for Iterative Jobs
//!
//! Trendlog is a small in-process aggregator for training loops and other
//! iterative computations. Callers push named scalar observations; the collector
//! keeps a rolling window per metric and renders periodic text reports with
//! window means and a sparkline of each metric's recent trend.
//!
//! ## Key Features
//!
//! - **Rolling windows**: the last 1000 observations per metric, plus lifetime counts
//! - **Accuracy streams**: arg-max agreement between logits and one-hot targets
//! - **Reports**: sorted per-metric rows, progress meter or throughput line, sparklines
//! - **Snapshots**: the latest report and latest values are rewritten on every render
//! - **Telemetry**: optional forwarding of every observation to a CSV scalar sink
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trendlog::collector::MetricSeriesCollector;
//! use trendlog::config::CollectorConfig;
//! use ndarray::array;
//! use std::time::Duration;
//!
//! let mut collector = MetricSeriesCollector::new(CollectorConfig::default());
//!
//! collector.collect("loss", 0.73_f32);
//! collector.collect("lr", "0.001");
//!
//! let logits = array![[0.1_f32, 0.9], [0.8, 0.2]];
//! let labels = array![[0.0_f32, 1.0], [0.0, 1.0]];
//! collector.collect_prediction("train", logits.view(), labels.view()).unwrap();
//!
//! collector.print_every(Duration::from_secs(4));
//! println!("{}", collector.format_all());
//! ```
//!
//! ## Module Organization
//!
//! - [`builders`] - Builder for collector configuration
//! - [`coerce`] - Conversion of observation values into scalars
//! - [`collector`] - The metric series collector and its shared handle
//! - [`config`] - Collector configuration and JSON loading
//! - [`error`] - Error types and result handling
//! - [`series`] - Rolling windows and prediction accumulators
//! - [`telemetry`] - Telemetry sinks for forwarded observations
//! - [`visualization`] - Sparklines, progress meter and text helpers

pub mod builders;
pub mod coerce;
pub mod collector;
pub mod config;
pub mod error;
pub mod series;
pub mod telemetry;
pub mod visualization;

pub use collector::{MetricSeriesCollector, SharedCollector};
pub use config::CollectorConfig;
pub use error::{Result, TrendlogError};

#[cfg(test)]
mod tests;
