use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use ndarray::ArrayView2;

use super::MetricSeriesCollector;
use crate::coerce::IntoScalar;
use crate::error::Result;

/// Cloneable handle for feeding one collector from several threads
///
/// Every call takes the single lock for its whole duration. A poisoned lock is
/// recovered rather than propagated so a panicking worker cannot silence reporting.
#[derive(Clone)]
pub struct SharedCollector {
    inner: Arc<Mutex<MetricSeriesCollector>>,
}

impl SharedCollector {
    pub fn new(collector: MetricSeriesCollector) -> Self {
        SharedCollector {
            inner: Arc::new(Mutex::new(collector)),
        }
    }

    /// Exclusive access to the underlying collector
    pub fn lock(&self) -> MutexGuard<'_, MetricSeriesCollector> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn collect<V: IntoScalar>(&self, name: &str, value: V) {
        self.lock().collect(name, value);
    }

    pub fn collect_prediction(
        &self,
        name: &str,
        logits: ArrayView2<f32>,
        onehot: ArrayView2<f32>,
    ) -> Result<usize> {
        self.lock().collect_prediction(name, logits, onehot)
    }

    pub fn print_every(&self, interval: Duration) -> bool {
        self.lock().print_every(interval)
    }

    pub fn format_all(&self) -> String {
        self.lock().format_all()
    }
}

impl From<MetricSeriesCollector> for SharedCollector {
    fn from(collector: MetricSeriesCollector) -> Self {
        Self::new(collector)
    }
}
