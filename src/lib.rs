//! Forward-mode automatic differentiation over dual numbers.
//!
//! A [`Dual`] carries a primal value and a tangent; arithmetic and the
//! elementary functions propagate both through the chain rule, so seeding
//! one input with a unit tangent exposes that input's exact partial
//! derivative in the output. [`derivative`], [`gradient`], and [`jacobian`]
//! drive a user function through the required seeds.

pub mod api;
pub mod dual;
pub mod float;
pub mod scalar;
mod traits;

#[cfg(feature = "nalgebra")]
pub mod nalgebra_support;

pub use api::{derivative, evaluate, gradient, gradient_val, jacobian, jacobian_rows, jvp};
#[cfg(feature = "parallel")]
pub use api::{gradient_par, jacobian_par};
pub use dual::Dual;
pub use float::Float;
pub use scalar::Scalar;

/// Type alias for dual numbers over `f64`.
pub type Dual64 = Dual<f64>;
/// Type alias for dual numbers over `f32`.
pub type Dual32 = Dual<f32>;
