//! Scalar coercion
//!
//! Observations arrive as many different value shapes: plain numbers, strings read
//! from logs, single-element vectors and single-element `ndarray` tensors. Each shape
//! implements [`IntoScalar`]; the collector calls [`coerce_or_substitute`], which
//! applies the warn-and-substitute policy when a value cannot be converted.

use ndarray::{ArrayBase, Data, Dimension};
use tracing::warn;
use crate::error::{Result, TrendlogError};

/// Value substituted when coercion fails
pub const SUBSTITUTE_VALUE: f64 = 0.0;

/// A value that can be converted into a finite `f64` observation
pub trait IntoScalar {
    fn try_coerce(&self) -> Result<f64>;
}

/// Outcome of coercing an observation
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    /// The value converted cleanly
    Exact(f64),
    /// Conversion failed and `value` was recorded instead
    Substituted { value: f64, reason: String },
}

impl Coerced {
    /// The scalar that gets recorded
    pub fn value(&self) -> f64 {
        match self {
            Coerced::Exact(v) => *v,
            Coerced::Substituted { value, .. } => *value,
        }
    }

    pub fn is_substituted(&self) -> bool {
        matches!(self, Coerced::Substituted { .. })
    }
}

/// Coerce an observation of `metric`, substituting [`SUBSTITUTE_VALUE`] and logging a
/// warning on failure
pub fn coerce_or_substitute<V: IntoScalar + ?Sized>(metric: &str, value: &V) -> Coerced {
    match value.try_coerce() {
        Ok(v) => Coerced::Exact(v),
        Err(err) => {
            warn!(metric, error = %err, substitute = SUBSTITUTE_VALUE, "failed to convert observation to a scalar");
            Coerced::Substituted {
                value: SUBSTITUTE_VALUE,
                reason: err.to_string(),
            }
        }
    }
}

fn finite(value: f64, source: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TrendlogError::Coercion(format!("{} is not a finite number ({})", value, source)))
    }
}

macro_rules! impl_into_scalar_numeric {
    ($($t:ty),*) => {
        $(
            impl IntoScalar for $t {
                fn try_coerce(&self) -> Result<f64> {
                    finite(*self as f64, stringify!($t))
                }
            }
        )*
    };
}

impl_into_scalar_numeric!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IntoScalar for bool {
    fn try_coerce(&self) -> Result<f64> {
        Ok(if *self { 1.0 } else { 0.0 })
    }
}

impl IntoScalar for str {
    fn try_coerce(&self) -> Result<f64> {
        let parsed: f64 = self.trim().parse().map_err(|_| {
            TrendlogError::Coercion(format!("cannot parse {:?} as a number", self))
        })?;
        finite(parsed, "str")
    }
}

impl IntoScalar for String {
    fn try_coerce(&self) -> Result<f64> {
        self.as_str().try_coerce()
    }
}

impl<T: IntoScalar> IntoScalar for Option<T> {
    fn try_coerce(&self) -> Result<f64> {
        match self {
            Some(v) => v.try_coerce(),
            None => Err(TrendlogError::Coercion("value is None".to_string())),
        }
    }
}

impl<T: IntoScalar + ?Sized> IntoScalar for &T {
    fn try_coerce(&self) -> Result<f64> {
        (**self).try_coerce()
    }
}

impl<T: IntoScalar> IntoScalar for [T] {
    fn try_coerce(&self) -> Result<f64> {
        match self {
            [single] => single.try_coerce(),
            _ => Err(TrendlogError::Coercion(format!(
                "expected exactly one element, found {}",
                self.len()
            ))),
        }
    }
}

impl<T: IntoScalar> IntoScalar for Vec<T> {
    fn try_coerce(&self) -> Result<f64> {
        self.as_slice().try_coerce()
    }
}

impl<T: IntoScalar, const N: usize> IntoScalar for [T; N] {
    fn try_coerce(&self) -> Result<f64> {
        self.as_slice().try_coerce()
    }
}

// Tensors of any rank are accepted as long as they hold a single element
impl<A, S, D> IntoScalar for ArrayBase<S, D>
where
    A: IntoScalar,
    S: Data<Elem = A>,
    D: Dimension,
{
    fn try_coerce(&self) -> Result<f64> {
        if self.len() != 1 {
            return Err(TrendlogError::Coercion(format!(
                "expected a single-element array, found shape {:?}",
                self.shape()
            )));
        }
        match self.iter().next() {
            Some(v) => v.try_coerce(),
            None => Err(TrendlogError::Coercion("empty array".to_string())),
        }
    }
}
