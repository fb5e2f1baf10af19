//! The [`Scalar`] trait for writing AD-generic numeric code.
//!
//! A function written as `fn f<T: Scalar>(x: &[T]) -> T` runs unchanged
//! under plain `f64` arithmetic and under [`Dual`] propagation, which is
//! exactly the contract the evaluation engine asks of user functions.

use std::fmt::{Debug, Display};

use num_traits::FromPrimitive;

use crate::dual::Dual;
use crate::float::Float;

/// Scalar capability: primal/tangent projections plus constant lifting.
///
/// Implemented for `f32`, `f64`, and [`Dual`]. Container libraries can also
/// use the relative cost constants when planning over generic scalars; a
/// dual multiply touches both components three times, a plain one once.
pub trait Scalar:
    num_traits::Float
    + num_traits::FloatConst
    + FromPrimitive
    + Copy
    + Default
    + Debug
    + Display
    + Send
    + 'static
{
    /// The underlying primitive float type.
    type Float: Float;

    /// Relative cost of reading one scalar.
    const READ_COST: u32 = 1;
    /// Relative cost of one addition.
    const ADD_COST: u32 = 1;
    /// Relative cost of one multiplication.
    const MUL_COST: u32 = 1;

    /// Lift a plain float to this scalar as a constant (zero tangent).
    fn from_f(val: Self::Float) -> Self;

    /// Primal projection.
    fn value(&self) -> Self::Float;

    /// Tangent projection; identically zero for plain floats.
    fn tangent(&self) -> Self::Float;
}

impl Scalar for f32 {
    type Float = f32;

    #[inline]
    fn from_f(val: f32) -> Self {
        val
    }

    #[inline]
    fn value(&self) -> f32 {
        *self
    }

    #[inline]
    fn tangent(&self) -> f32 {
        0.0
    }
}

impl Scalar for f64 {
    type Float = f64;

    #[inline]
    fn from_f(val: f64) -> Self {
        val
    }

    #[inline]
    fn value(&self) -> f64 {
        *self
    }

    #[inline]
    fn tangent(&self) -> f64 {
        0.0
    }
}

impl<F: Float> Scalar for Dual<F> {
    type Float = F;

    const READ_COST: u32 = 1;
    const ADD_COST: u32 = 3;
    const MUL_COST: u32 = 3;

    #[inline]
    fn from_f(val: F) -> Self {
        Dual::constant(val)
    }

    #[inline]
    fn value(&self) -> F {
        self.val
    }

    #[inline]
    fn tangent(&self) -> F {
        self.dot
    }
}
