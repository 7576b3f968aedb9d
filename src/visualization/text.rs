use chrono::{FixedOffset, Local, Utc};

/// Widest metric name shown in a report row
pub const DEFAULT_NAME_WIDTH: usize = 30;

const TIME_FORMAT: &str = "%I:%M:%S %p, %a %b %d %Y";

// Characters kept from the end of a shortened name
const KEEP_TAIL: usize = 7;
const ELLIPSIS: &str = "...";

/// Shorten a name to at most `max_len` characters
///
/// Names that fit are returned unchanged. Longer names keep their first
/// `max_len - 10` characters, an ellipsis and their last 7 characters.
pub fn shorten(name: &str, max_len: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_len {
        return name.to_string();
    }

    let head = max_len.saturating_sub(KEEP_TAIL + ELLIPSIS.len());
    if head == 0 {
        return chars[..max_len].iter().collect();
    }

    let mut out: String = chars[..head].iter().collect();
    out.push_str(ELLIPSIS);
    out.extend(&chars[chars.len() - KEEP_TAIL..]);
    out
}

/// Current wall-clock time, e.g. `03:04:05 PM, Tue Oct 20 2026`
///
/// `Some(minutes)` renders at that fixed UTC offset; `None` uses the host's local zone.
pub fn formatted_time(utc_offset_minutes: Option<i32>) -> String {
    match utc_offset_minutes.and_then(|m| FixedOffset::east_opt(m * 60)) {
        Some(zone) => Utc::now().with_timezone(&zone).format(TIME_FORMAT).to_string(),
        None => Local::now().format(TIME_FORMAT).to_string(),
    }
}
