use std::fmt::{Debug, Display};

use num_traits::{Float as NumFloat, FloatConst, FromPrimitive};

/// Marker trait for the base floating-point types (`f32`, `f64`).
///
/// Bundles the numeric and utility traits the rest of the crate needs.
/// Only primitive floats implement this; [`Dual`](crate::Dual) does not,
/// which keeps dual-of-dual out of the type system.
pub trait Float:
    NumFloat + FloatConst + FromPrimitive + Copy + Send + Sync + Default + Debug + Display + 'static
{
}

impl Float for f32 {}
impl Float for f64 {}
