//! nalgebra entry points: gradients as `DVector`, Jacobians as `DMatrix`.
//!
//! The user function takes a `DVector<Dual<F>>` — duals live inside the
//! container as ordinary scalars via the simba registration — and the
//! seeding loop is the same one the slice API uses.

use nalgebra::{DMatrix, DVector};

use crate::dual::Dual;
use crate::float::Float;

/// Seeded copy of `u` as a dual vector, unit tangent at `seed`.
#[inline]
fn seeded_dv<F: Float>(u: &DVector<F>, seed: usize) -> DVector<Dual<F>> {
    DVector::from_iterator(
        u.len(),
        u.iter().enumerate().map(|(k, &xk)| {
            if k == seed {
                Dual::variable(xk)
            } else {
                Dual::constant(xk)
            }
        }),
    )
}

/// Gradient of `f : R^n → R` at `u`, one seeded pass per input dimension.
pub fn gradient_nalgebra<F: Float>(
    f: impl Fn(&DVector<Dual<F>>) -> Dual<F>,
    u: &DVector<F>,
) -> DVector<F> {
    DVector::from_iterator(u.len(), (0..u.len()).map(|i| f(&seeded_dv(u, i)).dot))
}

/// Jacobian of a vector-valued `f : R^n → R^m` at `u`, returned row-major:
/// entry `(i, j)` is `∂f_i/∂x_j`.
///
/// One evaluation per input dimension; each pass fills one column. An empty
/// input yields a `0 × 0` matrix since the output arity is never probed.
pub fn jacobian_nalgebra<F: Float>(
    f: impl Fn(&DVector<Dual<F>>) -> DVector<Dual<F>>,
    u: &DVector<F>,
) -> DMatrix<F> {
    let n = u.len();
    let mut jac = DMatrix::zeros(0, 0);
    for j in 0..n {
        let outputs = f(&seeded_dv(u, j));
        if j == 0 {
            jac = DMatrix::zeros(outputs.len(), n);
        }
        for (i, out) in outputs.iter().enumerate() {
            jac[(i, j)] = out.dot;
        }
    }
    jac
}
