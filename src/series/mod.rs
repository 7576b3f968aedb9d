pub mod window;
pub mod predictions;

pub use window::{RollingWindow, MAX_ENTRIES};
pub use predictions::{PredictionAccumulator, argmax_rows, count_agreements};
