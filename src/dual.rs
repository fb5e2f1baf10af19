//! The dual-number value type and its elementary-function catalogue.

use std::fmt::{self, Display};

use crate::Float;

/// A dual number: primal value paired with a first-order tangent.
///
/// `Dual { val, dot }` represents `val + dot·ε` with `ε² = 0`. Arithmetic
/// carries the product/quotient/chain rules exactly under IEEE-754, so the
/// tangent of a seeded input reaches the output at machine precision —
/// no finite-difference step, no symbolic pass.
///
/// Inputs outside a function's real domain are not checked: NaN/Inf from the
/// underlying scalar math flow through both components, and nothing here
/// ever panics on a domain violation.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dual<F: Float> {
    /// Primal component: the value a plain real computation would produce.
    pub val: F,
    /// Tangent component: the accumulated derivative w.r.t. the seeded input.
    pub dot: F,
}

impl<F: Float> Display for Dual<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.val, self.dot)
    }
}

impl<F: Float> Dual<F> {
    /// Create a dual number from both components.
    #[inline]
    pub fn new(val: F, dot: F) -> Self {
        Dual { val, dot }
    }

    /// Lift a plain value to a constant (zero tangent).
    #[inline]
    pub fn constant(val: F) -> Self {
        Dual { val, dot: F::zero() }
    }

    /// Seed a value as the differentiation variable (unit tangent).
    #[inline]
    pub fn variable(val: F) -> Self {
        Dual { val, dot: F::one() }
    }

    /// Chain rule: given `f(val)` and `f'(val)`, build the propagated result.
    #[inline]
    fn chain(self, f_val: F, f_deriv: F) -> Self {
        Dual {
            val: f_val,
            dot: self.dot * f_deriv,
        }
    }

    // ── Conjugation and norms ──

    /// Dual conjugate `(val, -dot)`.
    #[inline]
    pub fn conj(self) -> Self {
        Dual {
            val: self.val,
            dot: -self.dot,
        }
    }

    /// Squared magnitude, `self * self` under the product rule.
    #[inline]
    pub fn abs2(self) -> Self {
        self * self
    }

    /// Alias for [`abs2`](Self::abs2), matching the complex-number vocabulary
    /// container libraries expect of a scalar.
    #[inline]
    pub fn norm(self) -> Self {
        self.abs2()
    }

    // ── Powers ──

    /// Reciprocal, delegated to `powf(-1)` so both spell the identical pair.
    #[inline]
    pub fn recip(self) -> Self {
        self.powf(-F::one())
    }

    /// Square root, delegated to `powf(1/2)`.
    #[inline]
    pub fn sqrt(self) -> Self {
        self.powf(F::from(0.5).unwrap())
    }

    #[inline]
    pub fn cbrt(self) -> Self {
        let c = self.val.cbrt();
        let three = F::from(3.0).unwrap();
        self.chain(c, F::one() / (three * c * c))
    }

    /// Integer power, `n·x^(n-1)` rule.
    #[inline]
    pub fn powi(self, n: i32) -> Self {
        self.chain(self.val.powi(n), F::from(n).unwrap() * self.val.powi(n - 1))
    }

    /// Scalar power: `d/dx x^e = e·x^(e-1)`.
    #[inline]
    pub fn powf(self, e: F) -> Self {
        self.chain(self.val.powf(e), e * self.val.powf(e - F::one()))
    }

    /// Dual power `x^y` via log-differentiation:
    /// `d(x^y) = x^y · (y·dx/x + ln(x)·dy)`.
    #[inline]
    pub fn pow(self, e: Self) -> Self {
        let v = self.val.powf(e.val);
        Dual {
            val: v,
            dot: v * (e.val * self.dot / self.val + e.dot * self.val.ln()),
        }
    }

    // ── Exponentials ──

    #[inline]
    pub fn exp(self) -> Self {
        let e = self.val.exp();
        self.chain(e, e)
    }

    /// `2^x`, delegated to `exp(ln2·x)`.
    #[inline]
    pub fn exp2(self) -> Self {
        (self * Dual::constant(F::LN_2())).exp()
    }

    #[inline]
    pub fn exp_m1(self) -> Self {
        self.chain(self.val.exp_m1(), self.val.exp())
    }

    // ── Logarithms ──

    #[inline]
    pub fn ln(self) -> Self {
        self.chain(self.val.ln(), F::one() / self.val)
    }

    #[inline]
    pub fn log2(self) -> Self {
        self.chain(self.val.log2(), F::one() / (self.val * F::LN_2()))
    }

    #[inline]
    pub fn log10(self) -> Self {
        self.chain(self.val.log10(), F::one() / (self.val * F::LN_10()))
    }

    /// Logarithm in an arbitrary scalar base: `d/dx log_b(x) = 1/(x·ln b)`.
    #[inline]
    pub fn log(self, base: F) -> Self {
        self.chain(self.val.log(base), F::one() / (self.val * base.ln()))
    }

    #[inline]
    pub fn ln_1p(self) -> Self {
        self.chain(self.val.ln_1p(), F::one() / (F::one() + self.val))
    }

    // ── Trigonometry ──

    #[inline]
    pub fn sin(self) -> Self {
        self.chain(self.val.sin(), self.val.cos())
    }

    #[inline]
    pub fn cos(self) -> Self {
        self.chain(self.val.cos(), -self.val.sin())
    }

    #[inline]
    pub fn tan(self) -> Self {
        let c = self.val.cos();
        self.chain(self.val.tan(), F::one() / (c * c))
    }

    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        let (s, c) = self.val.sin_cos();
        (self.chain(s, c), self.chain(c, -s))
    }

    #[inline]
    pub fn asin(self) -> Self {
        self.chain(
            self.val.asin(),
            F::one() / (F::one() - self.val * self.val).sqrt(),
        )
    }

    #[inline]
    pub fn acos(self) -> Self {
        self.chain(
            self.val.acos(),
            -F::one() / (F::one() - self.val * self.val).sqrt(),
        )
    }

    #[inline]
    pub fn atan(self) -> Self {
        self.chain(self.val.atan(), F::one() / (F::one() + self.val * self.val))
    }

    /// `d atan2(y, x) = (x·dy - y·dx) / (x² + y²)`.
    #[inline]
    pub fn atan2(self, other: Self) -> Self {
        let denom = self.val * self.val + other.val * other.val;
        Dual {
            val: self.val.atan2(other.val),
            dot: (other.val * self.dot - self.val * other.dot) / denom,
        }
    }

    // ── Hyperbolics ──

    #[inline]
    pub fn sinh(self) -> Self {
        self.chain(self.val.sinh(), self.val.cosh())
    }

    #[inline]
    pub fn cosh(self) -> Self {
        self.chain(self.val.cosh(), self.val.sinh())
    }

    #[inline]
    pub fn tanh(self) -> Self {
        let c = self.val.cosh();
        self.chain(self.val.tanh(), F::one() / (c * c))
    }

    #[inline]
    pub fn asinh(self) -> Self {
        self.chain(
            self.val.asinh(),
            F::one() / (self.val * self.val + F::one()).sqrt(),
        )
    }

    #[inline]
    pub fn acosh(self) -> Self {
        self.chain(
            self.val.acosh(),
            F::one() / (self.val * self.val - F::one()).sqrt(),
        )
    }

    #[inline]
    pub fn atanh(self) -> Self {
        self.chain(self.val.atanh(), F::one() / (F::one() - self.val * self.val))
    }

    // ── Piecewise and misc ──

    /// Absolute value, `d|x| = dx·x/|x|`. The tangent is NaN at `x == 0`;
    /// the discontinuity is left as-is rather than patched with a subgradient.
    #[inline]
    pub fn abs(self) -> Self {
        let a = self.val.abs();
        self.chain(a, self.val / a)
    }

    #[inline]
    pub fn signum(self) -> Self {
        Dual::constant(self.val.signum())
    }

    #[inline]
    pub fn floor(self) -> Self {
        Dual::constant(self.val.floor())
    }

    #[inline]
    pub fn ceil(self) -> Self {
        Dual::constant(self.val.ceil())
    }

    #[inline]
    pub fn round(self) -> Self {
        Dual::constant(self.val.round())
    }

    #[inline]
    pub fn trunc(self) -> Self {
        Dual::constant(self.val.trunc())
    }

    #[inline]
    pub fn fract(self) -> Self {
        Dual {
            val: self.val.fract(),
            dot: self.dot,
        }
    }

    /// `d(x·a + b) = a·dx + x·da + db`.
    #[inline]
    pub fn mul_add(self, a: Self, b: Self) -> Self {
        Dual {
            val: self.val.mul_add(a.val, b.val),
            dot: self.dot * a.val + self.val * a.dot + b.dot,
        }
    }

    #[inline]
    pub fn hypot(self, other: Self) -> Self {
        let h = self.val.hypot(other.val);
        Dual {
            val: h,
            dot: (self.val * self.dot + other.val * other.dot) / h,
        }
    }

    /// Selects by primal; the winner's tangent rides along.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.val >= other.val {
            self
        } else {
            other
        }
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.val <= other.val {
            self
        } else {
            other
        }
    }
}
