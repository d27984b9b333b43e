use std::{fmt, rc::Rc};

use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to exactly one of the two variants. Cloning an
/// array only bumps a reference count.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double precision number.
    Scalar(f64),
    /// An ordered list of values. Nested arrays represent matrices.
    Array(Rc<Vec<Self>>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl FromIterator<f64> for Value {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self::from(iter.into_iter().map(Self::Scalar).collect::<Vec<_>>())
    }
}

impl Value {
    /// Returns `true` for [`Value::Scalar`].
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Returns `true` for [`Value::Array`].
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns the scalar, or `ArrayToScalar` for an array.
    ///
    /// # Example
    /// ```
    /// use calq::{error::RuntimeError, interpreter::value::Value};
    ///
    /// assert_eq!(Value::Scalar(2.5).as_scalar(), Ok(2.5));
    ///
    /// let v: Value = [1.0, 2.0].into_iter().collect();
    /// assert_eq!(v.as_scalar(), Err(RuntimeError::ArrayToScalar));
    /// ```
    pub const fn as_scalar(&self) -> EvalResult<f64> {
        match self {
            Self::Scalar(v) => Ok(*v),
            Self::Array(_) => Err(RuntimeError::ArrayToScalar),
        }
    }

    /// Returns the elements of an array, or `ScalarToArray` for a scalar.
    pub fn as_array(&self) -> EvalResult<&[Self]> {
        match self {
            Self::Array(items) => Ok(items),
            Self::Scalar(_) => Err(RuntimeError::ScalarToArray),
        }
    }

    /// Appends every scalar reachable from this value, depth first, to `out`.
    ///
    /// This is how scalar functions see their arguments: `sum(1, [2, [3]])`
    /// receives `[1, 2, 3]`.
    ///
    /// # Example
    /// ```
    /// use calq::interpreter::value::Value;
    ///
    /// let nested = Value::from(vec![Value::Scalar(1.0),
    ///                               Value::from(vec![Value::Scalar(2.0), Value::Scalar(3.0)])]);
    /// let mut out = Vec::new();
    /// nested.collect_scalars(&mut out);
    /// assert_eq!(out, vec![1.0, 2.0, 3.0]);
    /// ```
    pub fn collect_scalars(&self, out: &mut Vec<f64>) {
        match self {
            Self::Scalar(v) => out.push(*v),
            Self::Array(items) => {
                for item in items.iter() {
                    item.collect_scalars(out);
                }
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::format::format_value(self))
    }
}
