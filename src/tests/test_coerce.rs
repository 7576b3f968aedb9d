use ndarray::{arr0, array};
use crate::coerce::{coerce_or_substitute, Coerced, IntoScalar, SUBSTITUTE_VALUE};

#[test]
fn test_plain_numbers() {
    assert_eq!(2.5_f64.try_coerce().unwrap(), 2.5);
    assert_eq!(7_i32.try_coerce().unwrap(), 7.0);
    assert_eq!(42_usize.try_coerce().unwrap(), 42.0);
    assert_eq!(true.try_coerce().unwrap(), 1.0);
}

#[test]
fn test_strings() {
    assert_eq!("3.25".try_coerce().unwrap(), 3.25);
    assert_eq!(" -1 ".to_string().try_coerce().unwrap(), -1.0);
    assert!("loss".try_coerce().is_err());
    assert!("inf".try_coerce().is_err());
}

#[test]
fn test_non_finite_rejected() {
    assert!(f32::NAN.try_coerce().is_err());
    assert!(f64::INFINITY.try_coerce().is_err());
    assert!("1e400".try_coerce().is_err());
}

#[test]
fn test_wide_values_keep_their_magnitude() {
    assert_eq!(1e39_f64.try_coerce().unwrap(), 1e39);
    assert_eq!(1e300_f64.try_coerce().unwrap(), 1e300);
    assert_eq!("1e39".try_coerce().unwrap(), 1e39);
    assert_eq!(16_777_217_u64.try_coerce().unwrap(), 16_777_217.0);
    assert_eq!(0.1_f64.try_coerce().unwrap(), 0.1);
}

#[test]
fn test_single_element_containers() {
    assert_eq!(vec![1.5_f32].try_coerce().unwrap(), 1.5);
    assert_eq!([9_u8].try_coerce().unwrap(), 9.0);
    assert!(vec![1.0_f32, 2.0].try_coerce().is_err());
    assert!(Vec::<f32>::new().try_coerce().is_err());
}

#[test]
fn test_single_element_tensors() {
    assert_eq!(arr0(4.0_f32).try_coerce().unwrap(), 4.0);
    assert_eq!(array![[7.0_f64]].try_coerce().unwrap(), 7.0);
    assert_eq!(array![[7.0_f32]].view().try_coerce().unwrap(), 7.0);
    assert!(array![1.0_f32, 2.0].try_coerce().is_err());
}

#[test]
fn test_options() {
    assert_eq!(Some(0.25_f32).try_coerce().unwrap(), 0.25);
    assert!(None::<f32>.try_coerce().is_err());
}

#[test]
fn test_warn_and_substitute() {
    let coerced = coerce_or_substitute("loss", &"not a number");
    assert!(coerced.is_substituted());
    assert_eq!(coerced.value(), SUBSTITUTE_VALUE);

    let coerced = coerce_or_substitute("loss", &0.5_f32);
    assert_eq!(coerced, Coerced::Exact(0.5));
}
