use approx::assert_relative_eq;
use tangent::{Dual, Dual64};

/// Central finite difference: (f(x+h) - f(x-h)) / 2h
fn finite_diff(f: impl Fn(f64) -> f64, x: f64) -> f64 {
    let h = 1e-7;
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Check an elemental's primal against plain arithmetic and its tangent
/// against finite differences.
fn check_elemental(
    f_dual: impl Fn(Dual64) -> Dual64,
    f_f64: impl Fn(f64) -> f64,
    x: f64,
    tol: f64,
) {
    let d = f_dual(Dual::variable(x));
    assert_relative_eq!(d.val, f_f64(x), max_relative = 1e-12);
    assert_relative_eq!(d.dot, finite_diff(&f_f64, x), max_relative = tol);
}

// ── Powers ──

#[test]
fn recip() { check_elemental(|x| x.recip(), |x| x.recip(), 2.5, 1e-5); }

#[test]
fn sqrt() { check_elemental(|x| x.sqrt(), |x| x.sqrt(), 4.0, 1e-5); }

#[test]
fn cbrt() { check_elemental(|x| x.cbrt(), |x| x.cbrt(), 8.0, 1e-5); }

#[test]
fn powi() { check_elemental(|x| x.powi(3), |x| x.powi(3), 2.0, 1e-5); }

#[test]
fn powf_scalar() {
    check_elemental(|x| x.powf(3.5), |x| x.powf(3.5), 2.0, 1e-5);
    // d/dx x^e = e·x^(e-1), exact form
    let y = Dual::variable(2.0).powf(3.5);
    assert_relative_eq!(y.dot, 3.5 * 2.0_f64.powf(2.5), max_relative = 1e-14);
}

#[test]
fn pow_dual_exponent_constant_base() {
    // d/dy a^y = a^y · ln a, seed on the exponent
    let a = Dual::constant(2.0);
    let y = a.pow(Dual::variable(3.0));
    assert_relative_eq!(y.val, 8.0, max_relative = 1e-12);
    assert_relative_eq!(y.dot, 8.0 * 2.0_f64.ln(), max_relative = 1e-12);
}

#[test]
fn pow_dual_exponent_both_seeded() {
    // d/dx x^x = x^x (ln x + 1)
    let x = Dual::variable(1.7);
    let y = x.pow(x);
    let expected = 1.7_f64.powf(1.7) * (1.7_f64.ln() + 1.0);
    assert_relative_eq!(y.dot, expected, max_relative = 1e-12);
}

// ── Exp/Log ──

#[test]
fn exp() { check_elemental(|x| x.exp(), |x| x.exp(), 1.0, 1e-5); }

#[test]
fn exp2() { check_elemental(|x| x.exp2(), |x| x.exp2(), 1.5, 1e-5); }

#[test]
fn exp_m1() { check_elemental(|x| x.exp_m1(), |x| x.exp_m1(), 0.5, 1e-5); }

#[test]
fn ln() { check_elemental(|x| x.ln(), |x| x.ln(), 2.0, 1e-5); }

#[test]
fn log2() { check_elemental(|x| x.log2(), |x| x.log2(), 2.0, 1e-5); }

#[test]
fn log10() { check_elemental(|x| x.log10(), |x| x.log10(), 2.0, 1e-5); }

#[test]
fn log_arbitrary_base() {
    check_elemental(|x| x.log(7.0), |x| x.log(7.0), 3.0, 1e-5);
    // d/dx log_b(x) = 1/(x ln b)
    let y = Dual::variable(3.0).log(7.0);
    assert_relative_eq!(y.dot, 1.0 / (3.0 * 7.0_f64.ln()), max_relative = 1e-14);
}

#[test]
fn ln_1p() { check_elemental(|x| x.ln_1p(), |x| x.ln_1p(), 0.5, 1e-5); }

// ── Trig ──

#[test]
fn sin() { check_elemental(|x| x.sin(), |x| x.sin(), 1.0, 1e-5); }

#[test]
fn cos() { check_elemental(|x| x.cos(), |x| x.cos(), 1.0, 1e-5); }

#[test]
fn tan() { check_elemental(|x| x.tan(), |x| x.tan(), 0.5, 1e-5); }

#[test]
fn asin() { check_elemental(|x| x.asin(), |x| x.asin(), 0.5, 1e-5); }

#[test]
fn acos() { check_elemental(|x| x.acos(), |x| x.acos(), 0.5, 1e-5); }

#[test]
fn atan() { check_elemental(|x| x.atan(), |x| x.atan(), 1.0, 1e-5); }

#[test]
fn atan2() {
    let y = Dual::<f64>::variable(3.0);
    let x = Dual::constant(4.0);
    let a = y.atan2(x);
    assert_relative_eq!(a.val, 3.0_f64.atan2(4.0), max_relative = 1e-12);
    assert_relative_eq!(a.dot, finite_diff(|v| v.atan2(4.0), 3.0), max_relative = 1e-5);
}

// ── Hyperbolic ──

#[test]
fn sinh() { check_elemental(|x| x.sinh(), |x| x.sinh(), 1.0, 1e-5); }

#[test]
fn cosh() { check_elemental(|x| x.cosh(), |x| x.cosh(), 1.0, 1e-5); }

#[test]
fn tanh() { check_elemental(|x| x.tanh(), |x| x.tanh(), 1.0, 1e-5); }

#[test]
fn asinh() { check_elemental(|x| x.asinh(), |x| x.asinh(), 1.0, 1e-5); }

#[test]
fn acosh() { check_elemental(|x| x.acosh(), |x| x.acosh(), 2.0, 1e-5); }

#[test]
fn atanh() { check_elemental(|x| x.atanh(), |x| x.atanh(), 0.5, 1e-5); }

// ── Abs and friends ──

#[test]
fn abs_positive() {
    let y = Dual::<f64>::variable(3.0).abs();
    assert_relative_eq!(y.val, 3.0);
    assert_relative_eq!(y.dot, 1.0);
}

#[test]
fn abs_negative() {
    let y = Dual::<f64>::variable(-3.0).abs();
    assert_relative_eq!(y.val, 3.0);
    assert_relative_eq!(y.dot, -1.0);
}

#[test]
fn abs_at_zero_tangent_is_nan() {
    // d|x| = x/|x| is 0/0 at the kink; kept as NaN, no subgradient.
    let y = Dual::<f64>::variable(0.0).abs();
    assert_relative_eq!(y.val, 0.0);
    assert!(y.dot.is_nan());
}

#[test]
fn hypot() {
    let x = Dual::<f64>::variable(3.0);
    let y = Dual::constant(4.0);
    let h = x.hypot(y);
    assert_relative_eq!(h.val, 5.0, max_relative = 1e-12);
    assert_relative_eq!(h.dot, 3.0 / 5.0, max_relative = 1e-12);
}

#[test]
fn zero_tangent_step_functions() {
    let x = Dual::<f64>::variable(2.7);
    assert_relative_eq!(x.floor().dot, 0.0);
    assert_relative_eq!(x.ceil().dot, 0.0);
    assert_relative_eq!(x.round().dot, 0.0);
    assert_relative_eq!(x.trunc().dot, 0.0);
    assert_relative_eq!(x.signum().dot, 0.0);
}

// ── Delegations ──

#[test]
fn recip_equals_powf_minus_one() {
    for &v in &[0.3f64, 1.0, 2.5, -4.0, 1e6] {
        let a = Dual::new(v, 0.7);
        let r = a.recip();
        let p = a.powf(-1.0);
        assert_eq!(r.val.to_bits(), p.val.to_bits());
        assert_eq!(r.dot.to_bits(), p.dot.to_bits());
    }
}

#[test]
fn sqrt_delegates_to_half_power() {
    let a = Dual::<f64>::new(4.0, 1.0);
    let s = a.sqrt();
    let p = a.powf(0.5);
    assert_eq!(s.val.to_bits(), p.val.to_bits());
    assert_eq!(s.dot.to_bits(), p.dot.to_bits());
}

// ── Compositions ──

#[test]
fn sin_of_exp() {
    // d/dx sin(exp(x)) = cos(exp(x)) · exp(x)
    let x_val = 0.5;
    let y = Dual::<f64>::variable(x_val).exp().sin();
    assert_relative_eq!(
        y.dot,
        x_val.exp().cos() * x_val.exp(),
        max_relative = 1e-12
    );
}

#[test]
fn mixed_composition() {
    // f(x) = x·sin(x) + cos(x²), f'(x) = sin x + x·cos x − 2x·sin(x²)
    let x_val = 1.5_f64;
    let x = Dual::<f64>::variable(x_val);
    let y = x * x.sin() + (x * x).cos();
    let expected = x_val.sin() + x_val * x_val.cos() - 2.0 * x_val * (x_val * x_val).sin();
    assert_relative_eq!(y.dot, expected, max_relative = 1e-12);
}

// ── num-traits surface ──

#[test]
fn float_trait_dispatch() {
    use num_traits::Float;
    let x = Dual64::variable(2.0);
    let y = Float::sin(x);
    assert_relative_eq!(y.val, 2.0_f64.sin(), max_relative = 1e-12);
    assert_relative_eq!(y.dot, 2.0_f64.cos(), max_relative = 1e-12);
}

#[test]
fn from_primitive_lifts_constant() {
    use num_traits::FromPrimitive;
    let x = Dual64::from_f64(3.14).unwrap();
    assert_relative_eq!(x.val, 3.14);
    assert_relative_eq!(x.dot, 0.0);
}
