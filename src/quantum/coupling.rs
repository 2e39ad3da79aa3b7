use crate::defaults::DEGENERACY_THRESHOLD;
use log::warn;
use ndarray::prelude::*;

/// Matrix element <left| operator |right>, the common building block of all
/// coupling evaluations.
pub fn integral(left: ArrayView1<f64>, operator: ArrayView2<f64>, right: ArrayView1<f64>) -> f64 {
    assert_eq!(
        operator.dim(),
        (left.len(), right.len()),
        "operator dimension mismatch"
    );
    let tmp: Array1<f64> = operator.dot(&right);
    left.dot(&tmp)
}

/// Nonadiabatic coupling between two adiabatic states,
/// <i| dH/dx |j> / (e_j - e_i). The denominator is not guarded: degenerate
/// states produce an unbounded result that the caller has to handle.
pub fn scalar_coupling(
    gradient: ArrayView2<f64>,
    state_i: ArrayView1<f64>,
    state_j: ArrayView1<f64>,
    energy_i: f64,
    energy_j: f64,
) -> f64 {
    let gap: f64 = energy_j - energy_i;
    if gap.abs() < DEGENERACY_THRESHOLD {
        warn!("near-degenerate energy gap {:e} in coupling evaluation", gap);
    }
    integral(state_i, gradient, state_j) / gap
}

/// Assemble the full antisymmetric coupling matrix. The diagonal is zero and
/// every unordered state pair is evaluated once, (j, i) = -(i, j) by
/// construction.
pub fn coupling_matrix(
    gradient: ArrayView2<f64>,
    eigenvectors: &[Array1<f64>],
    energies: ArrayView1<f64>,
) -> Array2<f64> {
    let n_states: usize = eigenvectors.len();
    assert_eq!(energies.len(), n_states, "energy count mismatch");
    let mut nac: Array2<f64> = Array2::zeros((n_states, n_states));
    for i in 0..n_states {
        for j in 0..i {
            let value: f64 = scalar_coupling(
                gradient,
                eigenvectors[i].view(),
                eigenvectors[j].view(),
                energies[i],
                energies[j],
            );
            nac[[i, j]] = value;
            nac[[j, i]] = -value;
        }
    }
    return nac;
}
