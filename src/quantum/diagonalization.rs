use anyhow::{Context, Result};
use ndarray::prelude::*;
use ndarray_linalg::{Eigh, UPLO};

/// Flip `candidate` as a whole if any component changed sign relative to the
/// reference eigenvector of the previous coordinate step. Eigensolvers return
/// phase-arbitrary eigenvectors; between adjacent samples of a continuously
/// varying Hamiltonian the only expected change of this kind is a global sign
/// flip.
pub fn correct_sign(reference: ArrayView1<f64>, mut candidate: ArrayViewMut1<f64>) {
    assert_eq!(
        reference.len(),
        candidate.len(),
        "eigenvector length mismatch"
    );
    let mut flip: bool = false;
    for (re, now) in reference.iter().zip(candidate.iter()) {
        if re * now < 0.0 {
            flip = true;
        }
    }
    if flip {
        candidate.mapv_inplace(|value| -value);
    }
}

/// Produces the adiabatic basis of a real-symmetric Hamiltonian and keeps the
/// eigenvector signs continuous along a coordinate scan. Owns the previous
/// generation of eigenvectors as the sign reference.
pub struct AdiabaticTracker {
    n_states: usize,
    reference: Option<Vec<Array1<f64>>>,
}

impl AdiabaticTracker {
    pub fn new(n_states: usize) -> AdiabaticTracker {
        AdiabaticTracker {
            n_states: n_states,
            reference: None,
        }
    }

    /// Eigen-decomposition of a real-symmetric matrix, sorted ascending by
    /// eigenvalue. Solver failures propagate, they are never retried.
    pub fn diagonalize(
        &self,
        hamiltonian: ArrayView2<f64>,
    ) -> Result<(Array1<f64>, Vec<Array1<f64>>)> {
        assert_eq!(
            hamiltonian.dim(),
            (self.n_states, self.n_states),
            "Hamiltonian dimension mismatch"
        );
        let (values, vectors) = hamiltonian
            .eigh(UPLO::Lower)
            .context("symmetric eigendecomposition did not converge")?;

        let mut order: Vec<usize> = (0..self.n_states).collect();
        order.sort_by(|&i, &j| values[i].partial_cmp(&values[j]).unwrap());

        let energies: Array1<f64> = order.iter().map(|&i| values[i]).collect();
        let eigenvectors: Vec<Array1<f64>> = order
            .iter()
            .map(|&i| vectors.column(i).to_owned())
            .collect();
        Ok((energies, eigenvectors))
    }

    /// Correct the signs of freshly computed eigenvectors against the stored
    /// reference and commit them as the reference for the next step. The
    /// first sample of a scan has no reference and is committed unchanged.
    pub fn advance(&mut self, eigenvectors: &mut [Array1<f64>]) {
        assert_eq!(
            eigenvectors.len(),
            self.n_states,
            "eigenvector count mismatch"
        );
        if let Some(reference) = &self.reference {
            for (re, now) in reference.iter().zip(eigenvectors.iter_mut()) {
                correct_sign(re.view(), now.view_mut());
            }
        }
        self.reference = Some(eigenvectors.to_vec());
    }

    /// Drop the sign reference so the tracker can start a new scan.
    pub fn reset(&mut self) {
        self.reference = None;
    }

    pub fn n_states(&self) -> usize {
        self.n_states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModelKind, PotentialModel};
    use approx::assert_relative_eq;
    use ndarray::{array, Array2};

    #[test]
    fn eigenvalues_are_sorted_ascending() {
        let tracker: AdiabaticTracker = AdiabaticTracker::new(2);
        let mut h: Array2<f64> = Array2::zeros((2, 2));
        for kind in ModelKind::all().iter() {
            let model = kind.build();
            for k in 0..100 {
                let x: f64 =
                    (model.right() - model.left()) / 100.0 * k as f64 + model.left();
                model.hamiltonian(x, h.view_mut());
                let (energies, _) = tracker.diagonalize(h.view()).unwrap();
                assert!(
                    energies[0] <= energies[1],
                    "{} eigenvalues out of order at x = {}",
                    kind.name(),
                    x
                );
            }
        }
    }

    #[test]
    fn diagonalization_reproduces_analytic_two_level_energies() {
        let tracker: AdiabaticTracker = AdiabaticTracker::new(2);
        let h: Array2<f64> = array![[1.0, 0.5], [0.5, -1.0]];
        let (energies, eigenvectors) = tracker.diagonalize(h.view()).unwrap();
        let gap: f64 = (1.0_f64 + 0.25).sqrt();
        assert_relative_eq!(energies[0], -gap, max_relative = 1.0e-12);
        assert_relative_eq!(energies[1], gap, max_relative = 1.0e-12);
        for vector in eigenvectors.iter() {
            assert_relative_eq!(vector.dot(vector), 1.0, max_relative = 1.0e-12);
        }
        assert_relative_eq!(
            eigenvectors[0].dot(&eigenvectors[1]),
            0.0,
            epsilon = 1.0e-12
        );
    }

    #[test]
    fn sign_correction_flips_inverted_vectors() {
        let reference = array![0.6, 0.8];
        let mut candidate = array![-0.6, -0.8];
        correct_sign(reference.view(), candidate.view_mut());
        assert_eq!(candidate, array![0.6, 0.8]);
    }

    #[test]
    fn sign_correction_is_idempotent() {
        let reference = array![0.6, 0.8];
        let mut candidate = array![-0.6, -0.8];
        correct_sign(reference.view(), candidate.view_mut());
        let once = candidate.clone();
        correct_sign(reference.view(), candidate.view_mut());
        assert_eq!(candidate, once);
    }

    #[test]
    fn advance_commits_corrected_vectors_as_reference() {
        let mut tracker: AdiabaticTracker = AdiabaticTracker::new(2);
        // first generation passes through uncorrected
        let mut first = vec![array![0.6, 0.8], array![-0.8, 0.6]];
        tracker.advance(&mut first);
        assert_eq!(first[0], array![0.6, 0.8]);
        // a flipped second generation is aligned with the first
        let mut second = vec![array![-0.6, -0.8], array![-0.8, 0.6]];
        tracker.advance(&mut second);
        assert_eq!(second[0], array![0.6, 0.8]);
        assert_eq!(second[1], array![-0.8, 0.6]);
    }

    #[test]
    fn reset_drops_the_sign_reference() {
        let mut tracker: AdiabaticTracker = AdiabaticTracker::new(2);
        let mut first = [array![0.6, 0.8], array![-0.8, 0.6]];
        tracker.advance(&mut first);

        // after a reset the next generation starts a new scan and is
        // committed as-is, even though it is inverted against `first`
        tracker.reset();
        let mut second = [array![-0.6, -0.8], array![0.8, -0.6]];
        tracker.advance(&mut second);
        assert_eq!(second[0], array![-0.6, -0.8]);
        assert_eq!(second[1], array![0.8, -0.6]);

        // and the committed generation is the correction reference again
        let mut third = [array![0.6, 0.8], array![0.8, -0.6]];
        tracker.advance(&mut third);
        assert_eq!(third[0], array![-0.6, -0.8]);
        assert_eq!(third[1], array![0.8, -0.6]);
    }
}
