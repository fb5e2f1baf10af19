//! Operator overloads for [`Dual`]: dual ⊗ dual and dual ⊗ scalar in both
//! orders, value-returning and in-place. A bare scalar behaves as a dual
//! with zero tangent.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use num_traits::Float as NumFloat;

use crate::dual::Dual;
use crate::float::Float;

impl<F: Float> Add for Dual<F> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Dual {
            val: self.val + rhs.val,
            dot: self.dot + rhs.dot,
        }
    }
}

impl<F: Float> Sub for Dual<F> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Dual {
            val: self.val - rhs.val,
            dot: self.dot - rhs.dot,
        }
    }
}

impl<F: Float> Mul for Dual<F> {
    type Output = Self;
    /// Product rule: `d(uv) = u·dv + du·v`.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Dual {
            val: self.val * rhs.val,
            dot: self.val * rhs.dot + self.dot * rhs.val,
        }
    }
}

impl<F: Float> Div for Dual<F> {
    type Output = Self;
    /// Quotient rule: `d(u/v) = (du·v - u·dv) / v²`. A zero divisor primal
    /// degrades to ±Inf/NaN per IEEE-754 rather than erroring.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Dual {
            val: self.val / rhs.val,
            dot: (self.dot * rhs.val - self.val * rhs.dot) / (rhs.val * rhs.val),
        }
    }
}

impl<F: Float> Neg for Dual<F> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Dual {
            val: -self.val,
            dot: -self.dot,
        }
    }
}

impl<F: Float> Rem for Dual<F> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Dual {
            val: self.val % rhs.val,
            dot: self.dot,
        }
    }
}

impl<F: Float> AddAssign for Dual<F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> SubAssign for Dual<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> MulAssign for Dual<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<F: Float> DivAssign for Dual<F> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<F: Float> RemAssign for Dual<F> {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

// Mixed ops against the primitive float, generated for f32 and f64.
macro_rules! impl_dual_scalar_ops {
    ($f:ty) => {
        impl Add<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn add(self, rhs: $f) -> Dual<$f> {
                Dual {
                    val: self.val + rhs,
                    dot: self.dot,
                }
            }
        }

        impl Add<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn add(self, rhs: Dual<$f>) -> Dual<$f> {
                rhs + self
            }
        }

        impl Sub<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn sub(self, rhs: $f) -> Dual<$f> {
                Dual {
                    val: self.val - rhs,
                    dot: self.dot,
                }
            }
        }

        impl Sub<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn sub(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual {
                    val: self - rhs.val,
                    dot: -rhs.dot,
                }
            }
        }

        impl Mul<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn mul(self, rhs: $f) -> Dual<$f> {
                Dual {
                    val: self.val * rhs,
                    dot: self.dot * rhs,
                }
            }
        }

        impl Mul<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn mul(self, rhs: Dual<$f>) -> Dual<$f> {
                rhs * self
            }
        }

        impl Div<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn div(self, rhs: $f) -> Dual<$f> {
                Dual {
                    val: self.val / rhs,
                    dot: self.dot / rhs,
                }
            }
        }

        impl Div<Dual<$f>> for $f {
            type Output = Dual<$f>;
            /// `scalar / dual` delegates to the reciprocal power rule so it
            /// agrees exactly with `powf(-1)`.
            #[inline]
            fn div(self, rhs: Dual<$f>) -> Dual<$f> {
                rhs.recip() * self
            }
        }

        impl Rem<$f> for Dual<$f> {
            type Output = Dual<$f>;
            #[inline]
            fn rem(self, rhs: $f) -> Dual<$f> {
                Dual {
                    val: self.val % rhs,
                    dot: self.dot,
                }
            }
        }

        impl Rem<Dual<$f>> for $f {
            type Output = Dual<$f>;
            #[inline]
            fn rem(self, rhs: Dual<$f>) -> Dual<$f> {
                Dual::constant(self % rhs.val)
            }
        }

        impl AddAssign<$f> for Dual<$f> {
            #[inline]
            fn add_assign(&mut self, rhs: $f) {
                self.val = self.val + rhs;
            }
        }

        impl SubAssign<$f> for Dual<$f> {
            #[inline]
            fn sub_assign(&mut self, rhs: $f) {
                self.val = self.val - rhs;
            }
        }

        impl MulAssign<$f> for Dual<$f> {
            #[inline]
            fn mul_assign(&mut self, rhs: $f) {
                *self = *self * rhs;
            }
        }

        impl DivAssign<$f> for Dual<$f> {
            #[inline]
            fn div_assign(&mut self, rhs: $f) {
                *self = *self / rhs;
            }
        }
    };
}

impl_dual_scalar_ops!(f32);
impl_dual_scalar_ops!(f64);

/// Approximate equality: both components within machine epsilon.
///
/// Two arithmetically equivalent expressions may reach the same dual number
/// through different floating-point paths, so bitwise comparison would
/// reject results that are equal for every practical purpose. Tolerance is
/// applied here and nowhere else — arithmetic itself is exact IEEE-754.
impl<F: Float> PartialEq for Dual<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        NumFloat::abs(self.val - other.val) < F::epsilon()
            && NumFloat::abs(self.dot - other.dot) < F::epsilon()
    }
}

/// Ordering compares primals only, so user-code branches (`if x > t`)
/// behave exactly as they would over plain floats.
impl<F: Float> PartialOrd for Dual<F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.val.partial_cmp(&other.val)
    }
}
