use crate::models::PotentialModel;
use crate::quantum::coupling::coupling_matrix;
use crate::quantum::diagonalization::AdiabaticTracker;
use anyhow::Result;
use log::debug;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};

/// One sampled coordinate of a scan: position, both adiabatic energies and
/// the coupling between the two states.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ScanRecord {
    pub x: f64,
    pub e0: f64,
    pub e1: f64,
    pub nac01: f64,
}

/// Sweep the model domain with `n_points` equally spaced samples. Per sample
/// the Hamiltonian is diagonalized, the eigenvector signs are aligned with
/// the previous sample and the coupling matrix is assembled from the
/// derivative Hamiltonian. The grid spans [left, right), matching
/// x = (right - left) / n * k + left. The single scratch matrix holds H(x)
/// first and is overwritten with H'(x) once the adiabatic basis is stored.
pub fn scan_model(model: &dyn PotentialModel, n_points: usize) -> Result<Vec<ScanRecord>> {
    let n_states: usize = model.n_states();
    let mut tracker: AdiabaticTracker = AdiabaticTracker::new(n_states);
    let mut scratch: Array2<f64> = Array2::zeros((n_states, n_states));
    let mut records: Vec<ScanRecord> = Vec::with_capacity(n_points);

    for k in 0..n_points {
        let x: f64 = (model.right() - model.left()) / n_points as f64 * k as f64 + model.left();
        model.hamiltonian(x, scratch.view_mut());
        let (energies, mut eigenvectors) = tracker.diagonalize(scratch.view())?;
        tracker.advance(&mut eigenvectors);

        model.gradient(x, scratch.view_mut());
        let nac: Array2<f64> = coupling_matrix(scratch.view(), &eigenvectors, energies.view());
        debug!(
            "x = {:.5e}: e0 = {:.5e}, e1 = {:.5e}, nac01 = {:.5e}",
            x,
            energies[0],
            energies[1],
            nac[[0, 1]]
        );
        records.push(ScanRecord {
            x: x,
            e0: energies[0],
            e1: energies[1],
            nac01: nac[[0, 1]],
        });
    }
    Ok(records)
}
