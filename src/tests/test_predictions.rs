use ndarray::array;
use crate::series::{argmax_rows, count_agreements, PredictionAccumulator};

#[test]
fn test_argmax_rows() {
    let values = array![[0.1, 0.7, 0.2], [3.0, -1.0, 2.0], [0.0, 0.0, 5.0]];
    assert_eq!(argmax_rows(values.view()), vec![1, 0, 2]);
}

#[test]
fn test_argmax_ties_pick_first() {
    let values = array![[0.5, 0.5, 0.1], [1.0, 1.0, 1.0]];
    assert_eq!(argmax_rows(values.view()), vec![0, 0]);
}

#[test]
fn test_argmax_skips_nan() {
    let values = array![[f32::NAN, 0.2, 0.9], [f32::NAN, f32::NAN, f32::NAN]];
    assert_eq!(argmax_rows(values.view()), vec![2, 0]);
}

#[test]
fn test_count_agreements() {
    let logits = array![[0.9, 0.1], [0.2, 0.8], [0.6, 0.4], [0.3, 0.7]];
    let onehot = array![[1.0, 0.0], [0.0, 1.0], [0.0, 1.0], [0.0, 1.0]];
    assert_eq!(count_agreements(logits.view(), onehot.view()).unwrap(), 3);
}

#[test]
fn test_count_agreements_shape_mismatch() {
    let logits = array![[0.9, 0.1, 0.0]];
    let onehot = array![[1.0, 0.0]];
    assert!(count_agreements(logits.view(), onehot.view()).is_err());
}

#[test]
fn test_accumulator() {
    let mut acc = PredictionAccumulator::new();
    assert_eq!(acc.accuracy(), None);

    acc.record(3, 4);
    acc.record(1, 4);
    assert_eq!(acc.correct, 4);
    assert_eq!(acc.total, 8);
    assert!((acc.accuracy().unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn test_accumulator_never_exceeds_total() {
    let mut acc = PredictionAccumulator::new();
    acc.record(10, 4);
    assert_eq!(acc.correct, 4);
    assert!(acc.correct <= acc.total);
}
