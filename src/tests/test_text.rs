use std::time::Duration;
use chrono::{NaiveDateTime, Utc};
use crate::config::CollectorConfig;
use crate::visualization::{format_interval, format_meter, formatted_time, shorten, DEFAULT_NAME_WIDTH};

#[test]
fn test_shorten_long_name() {
    let name = "abcdefghijklmnopqrstuvwxyz0123456789ABCD";
    assert_eq!(name.len(), 40);

    let short = shorten(name, DEFAULT_NAME_WIDTH);
    assert_eq!(short, "abcdefghijklmnopqrst...789ABCD");
    assert_eq!(short.chars().count(), 30);
}

#[test]
fn test_shorten_keeps_short_names() {
    assert_eq!(shorten("train_loss", DEFAULT_NAME_WIDTH), "train_loss");
    let exact = "x".repeat(30);
    assert_eq!(shorten(&exact, DEFAULT_NAME_WIDTH), exact);
}

#[test]
fn test_shorten_multibyte() {
    let name = "é".repeat(40);
    let short = shorten(&name, DEFAULT_NAME_WIDTH);
    assert_eq!(short.chars().count(), 30);
}

#[test]
fn test_shorten_tiny_width() {
    assert_eq!(shorten("abcdefghijkl", 5), "abcde");
}

#[test]
fn test_format_interval() {
    assert_eq!(format_interval(Duration::from_secs(0)), "00:00");
    assert_eq!(format_interval(Duration::from_secs(75)), "01:15");
    assert_eq!(format_interval(Duration::from_secs(3725)), "1:02:05");
}

#[test]
fn test_format_meter() {
    let line = format_meter(450, 1000, Duration::from_secs(10), 80);
    assert_eq!(line.chars().count(), 80);
    assert!(line.starts_with(" 45%|"));
    assert!(line.ends_with("| 450/1000 [00:10<00:12, 45.00it/s]"));
}

#[test]
fn test_format_meter_without_rate() {
    let line = format_meter(0, 10, Duration::ZERO, 80);
    assert!(line.contains("0/10 [00:00<?, 0.00it/s]"));
}

#[test]
fn test_format_meter_past_end() {
    let line = format_meter(15, 10, Duration::from_secs(3), 80);
    assert!(line.starts_with("150%|"));
    assert!(line.contains("15/10 [00:03<00:00"));
}

#[test]
fn test_formatted_time_fixed_offset() {
    let text = formatted_time(Some(0));
    // e.g. "03:04:05 PM, Tue Oct 20 2026"
    assert!(text.contains("AM, ") || text.contains("PM, "));
    assert_eq!(text.split(", ").count(), 2);
}

#[test]
fn test_default_timestamps_are_utc() {
    let config = CollectorConfig::default();
    assert_eq!(config.utc_offset_minutes, Some(0));

    let before = Utc::now().naive_utc();
    let text = formatted_time(config.utc_offset_minutes);
    let after = Utc::now().naive_utc();

    let shown = NaiveDateTime::parse_from_str(&text, "%I:%M:%S %p, %a %b %d %Y").unwrap();
    let slack = chrono::Duration::seconds(1);
    assert!(shown >= before - slack && shown <= after + slack);
}

#[test]
fn test_fixed_offset_shifts_timestamp() {
    let utc = NaiveDateTime::parse_from_str(&formatted_time(Some(0)), "%I:%M:%S %p, %a %b %d %Y").unwrap();
    let ahead = NaiveDateTime::parse_from_str(&formatted_time(Some(120)), "%I:%M:%S %p, %a %b %d %Y").unwrap();
    let shift = ahead - utc;
    assert!(shift >= chrono::Duration::seconds(7199) && shift <= chrono::Duration::seconds(7201));
}
