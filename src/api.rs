//! Seeding and evaluation: derivatives, gradients, and Jacobians.
//!
//! Every entry point is a stateless pipeline over the same seeding step:
//! build one input vector per seed index with exactly one unit tangent,
//! run the user function, and harvest tangents from the result. There is
//! no engine state, no caching, and no error channel — a function taken
//! outside its domain degrades to NaN/Inf instead of failing.

use crate::dual::Dual;
use crate::float::Float;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Seeded copy of `x`: entry `seed` carries a unit tangent, the rest zero.
#[inline]
fn seeded<F: Float>(x: &[F], seed: usize) -> Vec<Dual<F>> {
    x.iter()
        .enumerate()
        .map(|(k, &xk)| {
            if k == seed {
                Dual::variable(xk)
            } else {
                Dual::constant(xk)
            }
        })
        .collect()
}

/// Evaluate `f` at `u` with a unit seed: the result carries `f(u)` in the
/// primal and `f'(u)` in the tangent.
///
/// ```
/// let d = tangent::evaluate(|x: tangent::Dual64| x * x * x, 2.5);
/// assert!((d.val - 15.625).abs() < 1e-12);
/// assert!((d.dot - 18.75).abs() < 1e-12);
/// ```
pub fn evaluate<F: Float>(f: impl FnOnce(Dual<F>) -> Dual<F>, u: F) -> Dual<F> {
    f(Dual::variable(u))
}

/// The derivative of `f : R → R` at `u`. One evaluation of `f`.
pub fn derivative<F: Float>(f: impl FnOnce(Dual<F>) -> Dual<F>, u: F) -> F {
    evaluate(f, u).dot
}

/// The gradient of `f : R^n → R` at `u`, one seeded pass per input.
///
/// Forward-mode cost law: exactly `n` evaluations of `f`, independent of
/// anything about the output. Each pass rebuilds its own seeded inputs from
/// the unmodified primals.
///
/// ```
/// let g = tangent::gradient(
///     |x: &[tangent::Dual64]| x[0] * x[0] + x[1] * x[1],
///     &[3.0, 4.0],
/// );
/// assert!((g[0] - 6.0).abs() < 1e-12);
/// assert!((g[1] - 8.0).abs() < 1e-12);
/// ```
pub fn gradient<F: Float>(f: impl Fn(&[Dual<F>]) -> Dual<F>, u: &[F]) -> Vec<F> {
    (0..u.len()).map(|i| f(&seeded(u, i)).dot).collect()
}

/// Value and gradient together: `(f(u), ∇f(u))`.
///
/// The primal is unaffected by seeding, so the value comes from the first
/// pass; the call count stays at `n` (or one constant pass when `n == 0`).
pub fn gradient_val<F: Float>(f: impl Fn(&[Dual<F>]) -> Dual<F>, u: &[F]) -> (F, Vec<F>) {
    if u.is_empty() {
        return (f(&[]).val, Vec::new());
    }
    let mut value = F::zero();
    let grad = (0..u.len())
        .map(|i| {
            let out = f(&seeded(u, i));
            if i == 0 {
                value = out.val;
            }
            out.dot
        })
        .collect();
    (value, grad)
}

/// The Jacobian of a single vector-valued `f : R^n → R^m` at `u`.
///
/// Returns `(f(u), J)` with `J` row-major: `J[i][j] = ∂f_i/∂x_j`.
///
/// One seeded pass fills one Jacobian *column* — the propagated tangent
/// reaches every output of the shared evaluation at once — so the cost is
/// exactly `n` evaluations of `f` regardless of `m`. The output arity is
/// read off the first pass rather than probed with an extra constant pass.
pub fn jacobian<F: Float>(
    f: impl Fn(&[Dual<F>]) -> Vec<Dual<F>>,
    u: &[F],
) -> (Vec<F>, Vec<Vec<F>>) {
    let n = u.len();
    let mut values = Vec::new();
    let mut jac: Vec<Vec<F>> = Vec::new();

    for j in 0..n {
        let outputs = f(&seeded(u, j));
        if j == 0 {
            values = outputs.iter().map(|d| d.val).collect();
            jac = vec![vec![F::zero(); n]; outputs.len()];
        }
        for (row, out) in jac.iter_mut().zip(outputs.iter()) {
            row[j] = out.dot;
        }
    }

    (values, jac)
}

/// The Jacobian of `m` separate scalar functions over the same input,
/// stacked as rows: one [`gradient`] per function, `m·n` evaluations total.
pub fn jacobian_rows<F: Float, G>(fs: &[G], u: &[F]) -> Vec<Vec<F>>
where
    G: Fn(&[Dual<F>]) -> Dual<F>,
{
    fs.iter().map(|f| gradient(f, u)).collect()
}

/// Jacobian-vector product: `(f(x), J·v)` in a single pass.
///
/// Seeds every input with the matching component of `v` instead of a unit
/// basis vector; the harvested tangents are the directional derivative.
pub fn jvp<F: Float>(f: impl Fn(&[Dual<F>]) -> Vec<Dual<F>>, x: &[F], v: &[F]) -> (Vec<F>, Vec<F>) {
    assert_eq!(x.len(), v.len(), "x and v must have the same length");
    let inputs: Vec<Dual<F>> = x
        .iter()
        .zip(v.iter())
        .map(|(&xi, &vi)| Dual::new(xi, vi))
        .collect();
    let outputs = f(&inputs);
    let values = outputs.iter().map(|d| d.val).collect();
    let tangents = outputs.iter().map(|d| d.dot).collect();
    (values, tangents)
}

/// Parallel [`gradient`]: the `n` seeded passes are independent, so they
/// fan out across the rayon pool. Each worker builds its own seeded inputs
/// from the shared primals; per-seed results are bit-identical to serial.
#[cfg(feature = "parallel")]
pub fn gradient_par<F: Float>(f: impl Fn(&[Dual<F>]) -> Dual<F> + Sync, u: &[F]) -> Vec<F> {
    (0..u.len())
        .into_par_iter()
        .map(|i| f(&seeded(u, i)).dot)
        .collect()
}

/// Parallel [`jacobian`]: seeds dispatch across the rayon pool, each
/// producing one column into a disjoint output slot.
#[cfg(feature = "parallel")]
pub fn jacobian_par<F: Float>(
    f: impl Fn(&[Dual<F>]) -> Vec<Dual<F>> + Sync,
    u: &[F],
) -> (Vec<F>, Vec<Vec<F>>) {
    let n = u.len();
    let cols: Vec<Vec<Dual<F>>> = (0..n).into_par_iter().map(|j| f(&seeded(u, j))).collect();

    let Some(first) = cols.first() else {
        return (Vec::new(), Vec::new());
    };
    let values = first.iter().map(|d| d.val).collect();
    let m = first.len();
    let mut jac = vec![vec![F::zero(); n]; m];
    for (j, col) in cols.iter().enumerate() {
        for (i, out) in col.iter().enumerate() {
            jac[i][j] = out.dot;
        }
    }
    (values, jac)
}
