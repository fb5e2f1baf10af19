use approx::assert_relative_eq;
use tangent::{Dual, Dual64};

// ── Arithmetic contract ──

#[test]
fn add_sub_componentwise() {
    let a = Dual::new(3.0, 1.5);
    let b = Dual::new(4.0, -0.5);
    let s = a + b;
    assert_relative_eq!(s.val, 7.0);
    assert_relative_eq!(s.dot, 1.0);
    let d = a - b;
    assert_relative_eq!(d.val, -1.0);
    assert_relative_eq!(d.dot, 2.0);
}

#[test]
fn product_rule() {
    // (3 + ε)(4 + ε) = 12 + 7ε
    let a = Dual::new(3.0, 1.0);
    let b = Dual::new(4.0, 1.0);
    let c = a * b;
    assert_relative_eq!(c.val, 12.0);
    assert_relative_eq!(c.dot, 7.0);
}

#[test]
fn product_rule_general() {
    // (a*b).dot == a.val*b.dot + a.dot*b.val
    let a = Dual::new(2.5, 0.7);
    let b = Dual::new(-1.25, 3.0);
    let c = a * b;
    assert_relative_eq!(c.dot, a.val * b.dot + a.dot * b.val, max_relative = 1e-15);
}

#[test]
fn quotient_rule_general() {
    // (a/b).dot == (a.dot*b.val - a.val*b.dot) / b.val²
    let a = Dual::new(2.5, 0.7);
    let b = Dual::new(-1.25, 3.0);
    let q = a / b;
    assert_relative_eq!(
        q.dot,
        (a.dot * b.val - a.val * b.dot) / (b.val * b.val),
        max_relative = 1e-15
    );
}

#[test]
fn negation() {
    let a = Dual::new(3.0, -2.0);
    let n = -a;
    assert_relative_eq!(n.val, -3.0);
    assert_relative_eq!(n.dot, 2.0);
}

#[test]
fn in_place_ops() {
    let mut a = Dual::new(3.0, 1.0);
    a += Dual::new(1.0, 2.0);
    assert_relative_eq!(a.val, 4.0);
    assert_relative_eq!(a.dot, 3.0);

    a -= Dual::new(2.0, 1.0);
    assert_relative_eq!(a.val, 2.0);
    assert_relative_eq!(a.dot, 2.0);

    a *= Dual::new(3.0, 0.0);
    assert_relative_eq!(a.val, 6.0);
    assert_relative_eq!(a.dot, 6.0);

    a /= Dual::new(2.0, 0.0);
    assert_relative_eq!(a.val, 3.0);
    assert_relative_eq!(a.dot, 3.0);
}

#[test]
fn in_place_scalar_ops() {
    let mut a = Dual64::variable(3.0);
    a += 2.0;
    assert_relative_eq!(a.val, 5.0);
    assert_relative_eq!(a.dot, 1.0);

    a *= 4.0;
    assert_relative_eq!(a.val, 20.0);
    assert_relative_eq!(a.dot, 4.0);

    a -= 10.0;
    assert_relative_eq!(a.val, 10.0);
    assert_relative_eq!(a.dot, 4.0);

    a /= 2.0;
    assert_relative_eq!(a.val, 5.0);
    assert_relative_eq!(a.dot, 2.0);
}

#[test]
fn mixed_scalar_ops() {
    let x = Dual::<f64>::variable(3.0);

    let y = x * 2.0;
    assert_relative_eq!(y.val, 6.0);
    assert_relative_eq!(y.dot, 2.0);

    let z = 2.0 * x;
    assert_relative_eq!(z.val, 6.0);
    assert_relative_eq!(z.dot, 2.0);

    let w = 5.0 - x;
    assert_relative_eq!(w.val, 2.0);
    assert_relative_eq!(w.dot, -1.0);

    // scalar / dual = scalar * inverse(dual)
    let r = 1.0 / x;
    assert_relative_eq!(r.val, 1.0 / 3.0, max_relative = 1e-12);
    assert_relative_eq!(r.dot, -1.0 / 9.0, max_relative = 1e-12);
}

// ── Approximate equality ──

#[test]
fn equality_tolerates_fp_path_differences() {
    // Same quantity reached via two different round-off paths.
    let a = Dual::<f64>::new(0.1 + 0.2, 1.0);
    let b = Dual::<f64>::new(0.3, 1.0);
    assert_ne!(a.val.to_bits(), b.val.to_bits());
    assert_eq!(a, b);
}

#[test]
fn equality_checks_both_components() {
    let a = Dual::new(1.0, 1.0);
    assert_ne!(a, Dual::new(1.0, 2.0));
    assert_ne!(a, Dual::new(2.0, 1.0));
    assert_eq!(a, Dual::new(1.0, 1.0));
}

#[test]
fn ordering_compares_primals() {
    let a = Dual::new(1.0, 100.0);
    let b = Dual::new(2.0, -100.0);
    assert!(a < b);
    assert!(b > a);
}

// ── Conjugation and norms ──

#[test]
fn conj_flips_tangent() {
    let a = Dual::new(2.0, 3.0);
    let c = a.conj();
    assert_relative_eq!(c.val, 2.0);
    assert_relative_eq!(c.dot, -3.0);
}

#[test]
fn abs2_is_self_product() {
    let a = Dual::new(2.0, 3.0);
    let n = a.abs2();
    assert_relative_eq!(n.val, 4.0);
    assert_relative_eq!(n.dot, 12.0); // 2·v·d
    assert_eq!(a.norm(), a.abs2());
}

// ── IEEE degradation, never-throws contract ──

#[test]
fn division_by_zero_primal_degrades() {
    let a = Dual::<f64>::new(1.0, 1.0);
    let b = Dual::new(0.0, 1.0);
    let q = a / b;
    assert!(q.val.is_infinite());
    assert!(q.dot.is_infinite() || q.dot.is_nan());
}

#[test]
fn zero_over_zero_is_nan() {
    let q = Dual::<f64>::new(0.0, 1.0) / Dual::new(0.0, 0.0);
    assert!(q.val.is_nan());
}

#[test]
fn ln_of_negative_primal_is_nan() {
    let y = Dual::<f64>::variable(-1.0).ln();
    assert!(y.val.is_nan());
}

#[test]
fn asin_outside_domain_is_nan() {
    let y = Dual::<f64>::variable(1.5).asin();
    assert!(y.val.is_nan());
    assert!(y.dot.is_nan());
}

#[test]
fn display_renders_epsilon_form() {
    let a = Dual::new(1.5, -2.0);
    assert_eq!(format!("{}", a), "1.5 + -2ε");
}
