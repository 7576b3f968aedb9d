//! Sparkline rendering
//!
//! A sparkline is a short row of bar glyphs summarising a series. Long series are
//! first reduced to the target length by piecewise averaging ([`downsample`]);
//! short ones are stretched by nearest-neighbour sampling. The samples are then
//! binned into [`BARS`] by their position between the minimum and maximum.

/// Glyphs from lowest to highest intensity
pub const BARS: [char; 6] = ['▁', '▂', '▃', '▅', '▆', '▇'];

/// Number of glyphs rendered per sparkline in reports
pub const DEFAULT_SPARKLINE_LENGTH: usize = 16;

/// Reduce `data` to `desired_length` values by averaging between evenly spaced breakpoints
///
/// Breakpoint `i` sits at `round(i * len / desired_length)`, so the output always has
/// exactly `desired_length` entries even when the input length is not a multiple.
pub fn downsample(data: &[f64], desired_length: usize) -> Vec<f64> {
    if data.is_empty() || desired_length == 0 {
        return Vec::new();
    }

    let len = data.len();
    let breakpoints: Vec<usize> = (0..=desired_length)
        .map(|i| {
            let at = (i as f64 * len as f64 / desired_length as f64).round_ties_even();
            (at as usize).min(len)
        })
        .collect();

    breakpoints
        .windows(2)
        .map(|pair| {
            let slice = &data[pair[0]..pair[1]];
            if slice.is_empty() {
                // Only reachable when upsampling; reuse the nearest input value
                data[pair[0].min(len - 1)]
            } else {
                slice.iter().sum::<f64>() / slice.len() as f64
            }
        })
        .collect()
}

// Nearest-neighbour stretch of a short series to `length` samples
fn stretch(data: &[f64], length: usize) -> Vec<f64> {
    (0..length)
        .map(|i| data[i * data.len() / length])
        .collect()
}

// Highest bin whose lower threshold the value reaches
fn bin_index(value: f64, min: f64, max: f64, width: f64) -> usize {
    if width <= 0.0 || !width.is_finite() {
        return 0;
    }
    if value >= max {
        return BARS.len() - 1;
    }
    (0..BARS.len())
        .rev()
        .find(|&i| value >= min + i as f64 * width)
        .unwrap_or(0)
}

/// Render `data` as a sparkline of exactly `length` glyphs
///
/// Returns an empty string for empty input or a zero length.
pub fn sparkline(data: &[f64], length: usize) -> String {
    if data.is_empty() || length == 0 {
        return String::new();
    }

    let samples = if data.len() > length {
        downsample(data, length)
    } else {
        stretch(data, length)
    };

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / (BARS.len() - 1) as f64;

    samples
        .iter()
        .map(|&v| BARS[bin_index(v, min, max, width)])
        .take(length)
        .collect()
}
