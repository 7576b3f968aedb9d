use std::time::Duration;

/// Terminal width the progress meter is fitted to
pub const DEFAULT_NCOLS: usize = 80;

/// Format a duration as `MM:SS`, or `H:MM:SS` past the hour
pub fn format_interval(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Render a progress meter for `n` of `total` iterations done in `elapsed`
///
/// ```text
///  45%|=====================                          | 450/1000 [00:10<00:12, 45.00it/s]
/// ```
///
/// The bar fills whatever width remains of `ncols`; the percentage is not clamped,
/// so iterations past the end of an epoch show above 100%.
pub fn format_meter(n: usize, total: usize, elapsed: Duration, ncols: usize) -> String {
    let secs = elapsed.as_secs_f64();
    let rate = if secs > 0.0 { n as f64 / secs } else { 0.0 };

    let remaining = if n >= total {
        format_interval(Duration::ZERO)
    } else if rate > 0.0 {
        Duration::try_from_secs_f64((total - n) as f64 / rate)
            .map(format_interval)
            .unwrap_or_else(|_| "?".to_string())
    } else {
        "?".to_string()
    };

    let fraction = if total > 0 { n as f64 / total as f64 } else { 0.0 };

    let l_bar = format!("{:3.0}%|", fraction * 100.0);
    let r_bar = format!(
        "| {}/{} [{}<{}, {:.2}it/s]",
        n, total, format_interval(elapsed), remaining, rate
    );

    let bar_width = ncols.saturating_sub(l_bar.chars().count() + r_bar.chars().count());
    let filled = ((fraction.min(1.0) * bar_width as f64) as usize).min(bar_width);
    let bar = format!("{}{}", "=".repeat(filled), " ".repeat(bar_width - filled));

    format!("{}{}{}", l_bar, bar, r_bar)
}
