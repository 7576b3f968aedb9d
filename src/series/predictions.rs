use ndarray::ArrayView2;
use crate::error::{Result, TrendlogError};

/// Running correct/total counts for one prediction stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredictionAccumulator {
    pub correct: u64,
    pub total: u64,
}

impl PredictionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one batch of results
    pub fn record(&mut self, correct: u64, batch_size: u64) {
        let correct = correct.min(batch_size);
        self.correct += correct;
        self.total += batch_size;
    }

    /// Fraction of correct predictions, `None` before any batch was recorded
    pub fn accuracy(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.correct as f64 / self.total as f64)
        }
    }
}

/// Index of the largest entry in every row
///
/// Ties resolve to the first maximum. NaN entries never win; a row of only NaN maps to 0.
pub fn argmax_rows(values: ArrayView2<f32>) -> Vec<usize> {
    values
        .rows()
        .into_iter()
        .map(|row| {
            let mut best: Option<(usize, f32)> = None;
            for (idx, &v) in row.iter().enumerate() {
                if v.is_nan() {
                    continue;
                }
                match best {
                    Some((_, b)) if v <= b => {}
                    _ => best = Some((idx, v)),
                }
            }
            best.map(|(idx, _)| idx).unwrap_or(0)
        })
        .collect()
}

/// Number of rows whose predicted class matches the one-hot target
pub fn count_agreements(logits: ArrayView2<f32>, onehot: ArrayView2<f32>) -> Result<usize> {
    if logits.shape() != onehot.shape() {
        return Err(TrendlogError::dimension_mismatch(
            format!("{:?}", onehot.shape()),
            format!("{:?}", logits.shape()),
        ));
    }

    let predicted = argmax_rows(logits);
    let labels = argmax_rows(onehot);

    Ok(predicted.iter()
        .zip(labels.iter())
        .filter(|(p, t)| p == t)
        .count())
}
