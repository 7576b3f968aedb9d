use crate::series::{RollingWindow, MAX_ENTRIES};

#[test]
fn test_window_push_and_last() {
    let mut window = RollingWindow::new(5);
    assert!(window.is_empty());
    assert_eq!(window.last(), None);

    window.push(1.0);
    window.push(2.0);
    assert_eq!(window.len(), 2);
    assert_eq!(window.last(), Some(2.0));
}

#[test]
fn test_window_keeps_newest() {
    let mut window = RollingWindow::default();
    for i in 0..1500 {
        window.push(i as f64);
    }

    // Only the last MAX_ENTRIES values survive, oldest first
    assert_eq!(window.len(), MAX_ENTRIES);
    let values = window.to_vec();
    assert_eq!(values[0], 500.0);
    assert_eq!(values[999], 1499.0);
    assert!(values.windows(2).all(|w| w[1] == w[0] + 1.0));
}

#[test]
fn test_window_means() {
    let mut window = RollingWindow::new(100);
    for i in 0..20 {
        window.push(i as f64);
    }

    assert!((window.mean().unwrap() - 9.5).abs() < 1e-6);
    // 10..=19
    assert!((window.tail_mean(10).unwrap() - 14.5).abs() < 1e-6);
    // Asking for more than is held averages everything
    assert!((window.tail_mean(50).unwrap() - 9.5).abs() < 1e-6);
    assert_eq!(window.tail_mean(0), None);
}

#[test]
fn test_empty_window_has_no_mean() {
    let window = RollingWindow::new(10);
    assert_eq!(window.mean(), None);
    assert_eq!(window.tail_mean(10), None);
}

#[test]
fn test_zero_capacity_window() {
    let mut window = RollingWindow::new(0);
    window.push(3.0);
    assert!(window.is_empty());
}
