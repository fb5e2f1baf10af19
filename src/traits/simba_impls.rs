//! simba trait implementations registering [`Dual`] as a scalar for
//! nalgebra containers — the promotion, projection, and field structure a
//! generic numeric-container library needs to host dual-valued vectors and
//! matrices. Registration is static trait wiring; nothing here carries
//! run-time state.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::{FloatConst, Zero};
use simba::scalar::{ComplexField, Field, RealField, SubsetOf};
use simba::simd::{PrimitiveSimdValue, SimdValue};

use crate::dual::Dual;
use crate::float::Float;

// ══════════════════════════════════════════════
//  SimdValue — trivial scalar lane (LANES=1)
// ══════════════════════════════════════════════

impl<F: Float> SimdValue for Dual<F> {
    const LANES: usize = 1;
    type Element = Self;
    type SimdBool = bool;

    #[inline(always)]
    fn splat(val: Self::Element) -> Self {
        val
    }
    #[inline(always)]
    fn extract(&self, _: usize) -> Self::Element {
        *self
    }
    #[inline(always)]
    unsafe fn extract_unchecked(&self, _: usize) -> Self::Element {
        *self
    }
    #[inline(always)]
    fn replace(&mut self, _: usize, val: Self::Element) {
        *self = val;
    }
    #[inline(always)]
    unsafe fn replace_unchecked(&mut self, _: usize, val: Self::Element) {
        *self = val;
    }
    #[inline(always)]
    fn select(self, cond: Self::SimdBool, other: Self) -> Self {
        if cond {
            self
        } else {
            other
        }
    }
}

impl<F: Float> PrimitiveSimdValue for Dual<F> {}

// ══════════════════════════════════════════════
//  Field (no blanket impl — must be explicit)
// ══════════════════════════════════════════════

impl<F: Float> Field for Dual<F> {}

// ══════════════════════════════════════════════
//  SubsetOf promotions: plain scalar ⊂ dual
// ══════════════════════════════════════════════

// Identity: Dual<F> ⊂ Dual<F>
impl<F: Float> SubsetOf<Dual<F>> for Dual<F> {
    #[inline]
    fn to_superset(&self) -> Dual<F> {
        *self
    }
    #[inline]
    fn from_superset_unchecked(element: &Dual<F>) -> Self {
        *element
    }
    #[inline]
    fn is_in_subset(_: &Dual<F>) -> bool {
        true
    }
}

// A plain scalar promotes to a constant dual (zero tangent); a dual falls
// back to a plain scalar only when its tangent is zero.
macro_rules! impl_scalar_subset_of_dual {
    ($sub:ty, $f:ty) => {
        impl SubsetOf<Dual<$f>> for $sub {
            #[inline]
            fn to_superset(&self) -> Dual<$f> {
                Dual::constant(*self as $f)
            }
            #[inline]
            fn from_superset_unchecked(element: &Dual<$f>) -> Self {
                element.val as $sub
            }
            #[inline]
            fn is_in_subset(element: &Dual<$f>) -> bool {
                element.dot == 0.0
            }
        }
    };
}

impl_scalar_subset_of_dual!(f32, f32);
impl_scalar_subset_of_dual!(f64, f64);
// Cross-width promotions required by ComplexField: SupersetOf<f64>.
impl_scalar_subset_of_dual!(f32, f64);
impl_scalar_subset_of_dual!(f64, f32);

// ══════════════════════════════════════════════
//  AbsDiffEq / RelativeEq / UlpsEq
//  (required by RealField; compare primals)
// ══════════════════════════════════════════════

impl<F: Float> AbsDiffEq for Dual<F>
where
    F: AbsDiffEq<Epsilon = F>,
{
    type Epsilon = Self;

    #[inline]
    fn default_epsilon() -> Self {
        Dual::constant(F::default_epsilon())
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self) -> bool {
        self.val.abs_diff_eq(&other.val, epsilon.val)
    }
}

impl<F: Float> RelativeEq for Dual<F>
where
    F: RelativeEq<Epsilon = F>,
{
    #[inline]
    fn default_max_relative() -> Self {
        Dual::constant(F::default_max_relative())
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Self, max_relative: Self) -> bool {
        self.val.relative_eq(&other.val, epsilon.val, max_relative.val)
    }
}

impl<F: Float> UlpsEq for Dual<F>
where
    F: UlpsEq<Epsilon = F>,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        F::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self, max_ulps: u32) -> bool {
        self.val.ulps_eq(&other.val, epsilon.val, max_ulps)
    }
}

// ══════════════════════════════════════════════
//  ComplexField / RealField
// ══════════════════════════════════════════════

// Implemented concretely for f32/f64 (the SubsetOf bounds want concrete
// types); a macro keeps the two in lockstep.

macro_rules! impl_complex_field_dual {
    ($f:ty) => {
        impl ComplexField for Dual<$f> {
            type RealField = Self;

            #[inline]
            fn from_real(re: Self::RealField) -> Self {
                re
            }
            /// Real-part projection: the value itself (duals are not complex;
            /// the primal rides in the value).
            #[inline]
            fn real(self) -> Self::RealField {
                self
            }
            /// Imaginary-part projection: the tangent, as a constant. The
            /// dual component plays the ε-coefficient role that the
            /// imaginary part plays for complex scalars.
            #[inline]
            fn imaginary(self) -> Self::RealField {
                Dual::constant(self.dot)
            }
            #[inline]
            fn modulus(self) -> Self::RealField {
                Dual::abs(self)
            }
            #[inline]
            fn modulus_squared(self) -> Self::RealField {
                Dual::abs2(self)
            }
            #[inline]
            fn argument(self) -> Self::RealField {
                if self.val >= <$f>::zero() {
                    Self::zero()
                } else {
                    Self::pi()
                }
            }
            #[inline]
            fn norm1(self) -> Self::RealField {
                Dual::abs(self)
            }
            #[inline]
            fn scale(self, factor: Self::RealField) -> Self {
                self * factor
            }
            #[inline]
            fn unscale(self, factor: Self::RealField) -> Self {
                self / factor
            }
            #[inline]
            fn floor(self) -> Self {
                Dual::floor(self)
            }
            #[inline]
            fn ceil(self) -> Self {
                Dual::ceil(self)
            }
            #[inline]
            fn round(self) -> Self {
                Dual::round(self)
            }
            #[inline]
            fn trunc(self) -> Self {
                Dual::trunc(self)
            }
            #[inline]
            fn fract(self) -> Self {
                Dual::fract(self)
            }
            #[inline]
            fn mul_add(self, a: Self, b: Self) -> Self {
                Dual::mul_add(self, a, b)
            }
            #[inline]
            fn abs(self) -> Self::RealField {
                Dual::abs(self)
            }
            #[inline]
            fn hypot(self, other: Self) -> Self::RealField {
                Dual::hypot(self, other)
            }
            #[inline]
            fn recip(self) -> Self {
                Dual::recip(self)
            }
            // Identity, not `Dual::conj`: the container treats duals as a
            // real scalar, and `dotc`/adjoint paths must not cancel
            // tangents of shared seeds.
            #[inline]
            fn conjugate(self) -> Self {
                self
            }
            #[inline]
            fn sin(self) -> Self {
                Dual::sin(self)
            }
            #[inline]
            fn cos(self) -> Self {
                Dual::cos(self)
            }
            #[inline]
            fn sin_cos(self) -> (Self, Self) {
                Dual::sin_cos(self)
            }
            #[inline]
            fn tan(self) -> Self {
                Dual::tan(self)
            }
            #[inline]
            fn asin(self) -> Self {
                Dual::asin(self)
            }
            #[inline]
            fn acos(self) -> Self {
                Dual::acos(self)
            }
            #[inline]
            fn atan(self) -> Self {
                Dual::atan(self)
            }
            #[inline]
            fn sinh(self) -> Self {
                Dual::sinh(self)
            }
            #[inline]
            fn cosh(self) -> Self {
                Dual::cosh(self)
            }
            #[inline]
            fn tanh(self) -> Self {
                Dual::tanh(self)
            }
            #[inline]
            fn asinh(self) -> Self {
                Dual::asinh(self)
            }
            #[inline]
            fn acosh(self) -> Self {
                Dual::acosh(self)
            }
            #[inline]
            fn atanh(self) -> Self {
                Dual::atanh(self)
            }
            #[inline]
            fn log(self, base: Self::RealField) -> Self {
                Dual::ln(self) / Dual::ln(base)
            }
            #[inline]
            fn log2(self) -> Self {
                Dual::log2(self)
            }
            #[inline]
            fn log10(self) -> Self {
                Dual::log10(self)
            }
            #[inline]
            fn ln(self) -> Self {
                Dual::ln(self)
            }
            #[inline]
            fn ln_1p(self) -> Self {
                Dual::ln_1p(self)
            }
            #[inline]
            fn sqrt(self) -> Self {
                Dual::sqrt(self)
            }
            #[inline]
            fn exp(self) -> Self {
                Dual::exp(self)
            }
            #[inline]
            fn exp2(self) -> Self {
                Dual::exp2(self)
            }
            #[inline]
            fn exp_m1(self) -> Self {
                Dual::exp_m1(self)
            }
            #[inline]
            fn powi(self, n: i32) -> Self {
                Dual::powi(self, n)
            }
            #[inline]
            fn powf(self, n: Self::RealField) -> Self {
                Dual::pow(self, n)
            }
            #[inline]
            fn powc(self, n: Self) -> Self {
                Dual::pow(self, n)
            }
            #[inline]
            fn cbrt(self) -> Self {
                Dual::cbrt(self)
            }
            #[inline]
            fn is_finite(&self) -> bool {
                self.val.is_finite()
            }
            #[inline]
            fn try_sqrt(self) -> Option<Self> {
                if self.val >= <$f>::zero() {
                    Some(Dual::sqrt(self))
                } else {
                    None
                }
            }
        }
    };
}

impl_complex_field_dual!(f32);
impl_complex_field_dual!(f64);

macro_rules! impl_real_field_dual {
    ($f:ty) => {
        impl RealField for Dual<$f> {
            #[inline]
            fn is_sign_positive(&self) -> bool {
                self.val.is_sign_positive()
            }
            #[inline]
            fn is_sign_negative(&self) -> bool {
                self.val.is_sign_negative()
            }
            #[inline]
            fn copysign(self, sign: Self) -> Self {
                Dual::abs(self) * Dual::signum(sign)
            }
            #[inline]
            fn max(self, other: Self) -> Self {
                Dual::max(self, other)
            }
            #[inline]
            fn min(self, other: Self) -> Self {
                Dual::min(self, other)
            }
            #[inline]
            fn clamp(self, min: Self, max: Self) -> Self {
                Dual::max(Dual::min(self, max), min)
            }
            #[inline]
            fn atan2(self, other: Self) -> Self {
                Dual::atan2(self, other)
            }
            #[inline]
            fn min_value() -> Option<Self> {
                Some(Dual::constant(<$f>::MIN))
            }
            #[inline]
            fn max_value() -> Option<Self> {
                Some(Dual::constant(<$f>::MAX))
            }

            // ── Constants ──
            #[inline]
            fn pi() -> Self {
                Dual::constant(<$f>::PI())
            }
            #[inline]
            fn two_pi() -> Self {
                Dual::constant(<$f>::TAU())
            }
            #[inline]
            fn frac_pi_2() -> Self {
                Dual::constant(<$f>::FRAC_PI_2())
            }
            #[inline]
            fn frac_pi_3() -> Self {
                Dual::constant(<$f>::FRAC_PI_3())
            }
            #[inline]
            fn frac_pi_4() -> Self {
                Dual::constant(<$f>::FRAC_PI_4())
            }
            #[inline]
            fn frac_pi_6() -> Self {
                Dual::constant(<$f>::FRAC_PI_6())
            }
            #[inline]
            fn frac_pi_8() -> Self {
                Dual::constant(<$f>::FRAC_PI_8())
            }
            #[inline]
            fn frac_1_pi() -> Self {
                Dual::constant(<$f>::FRAC_1_PI())
            }
            #[inline]
            fn frac_2_pi() -> Self {
                Dual::constant(<$f>::FRAC_2_PI())
            }
            #[inline]
            fn frac_2_sqrt_pi() -> Self {
                Dual::constant(<$f>::FRAC_2_SQRT_PI())
            }
            #[inline]
            fn e() -> Self {
                Dual::constant(<$f>::E())
            }
            #[inline]
            fn log2_e() -> Self {
                Dual::constant(<$f>::LOG2_E())
            }
            #[inline]
            fn log10_e() -> Self {
                Dual::constant(<$f>::LOG10_E())
            }
            #[inline]
            fn ln_2() -> Self {
                Dual::constant(<$f>::LN_2())
            }
            #[inline]
            fn ln_10() -> Self {
                Dual::constant(<$f>::LN_10())
            }
        }
    };
}

impl_real_field_dual!(f32);
impl_real_field_dual!(f64);
