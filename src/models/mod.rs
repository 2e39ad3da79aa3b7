pub use subotnik::*;
pub use tully::*;

pub mod subotnik;
pub mod tully;

use ndarray::prelude::*;
use serde::{Deserialize, Serialize};

/// Two-level diabatic model potential. Every variant writes a real-symmetric
/// `n_states x n_states` Hamiltonian (or its coordinate derivative) into a
/// caller-supplied matrix and keeps no state between evaluations.
pub trait PotentialModel {
    /// Write the diabatic Hamiltonian H(x) into `h`.
    fn hamiltonian(&self, x: f64, h: ArrayViewMut2<f64>);
    /// Write the coordinate derivative H'(x) into `dh`.
    fn gradient(&self, x: f64, dh: ArrayViewMut2<f64>);
    /// Position spread of the initial wavepacket for mean momentum `k`.
    fn sigma_x(&self, k: f64) -> f64;
    /// Momentum spread of the initial wavepacket for mean momentum `k`.
    fn sigma_p(&self, k: f64) -> f64;
    fn x0(&self) -> f64;
    fn left(&self) -> f64;
    fn right(&self) -> f64;
    fn n_states(&self) -> usize {
        2
    }
}

/// Scratch matrices must match the model dimension exactly; writing into a
/// larger buffer would leave stale entries in place.
pub(crate) fn check_scratch_dim(n_states: usize, out: &ArrayViewMut2<f64>) {
    assert_eq!(
        out.dim(),
        (n_states, n_states),
        "scratch matrix dimension mismatch"
    );
}

/// The closed set of model potentials. The abbreviations follow the
/// nonadiabatic-dynamics literature: the three Tully scattering models and
/// the dumbbell, double-arch and double Rosen-Zener extensions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelKind {
    SAC,
    DAC,
    ECR,
    DBG,
    DAG,
    DRN,
}

impl ModelKind {
    pub fn all() -> [ModelKind; 6] {
        [
            ModelKind::SAC,
            ModelKind::DAC,
            ModelKind::ECR,
            ModelKind::DBG,
            ModelKind::DAG,
            ModelKind::DRN,
        ]
    }

    pub fn from_name(name: &str) -> Option<ModelKind> {
        match name.to_uppercase().as_str() {
            "SAC" => Some(ModelKind::SAC),
            "DAC" => Some(ModelKind::DAC),
            "ECR" => Some(ModelKind::ECR),
            "DBG" => Some(ModelKind::DBG),
            "DAG" => Some(ModelKind::DAG),
            "DRN" => Some(ModelKind::DRN),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::SAC => "SAC",
            ModelKind::DAC => "DAC",
            ModelKind::ECR => "ECR",
            ModelKind::DBG => "DBG",
            ModelKind::DAG => "DAG",
            ModelKind::DRN => "DRN",
        }
    }

    pub fn build(&self) -> Box<dyn PotentialModel> {
        match self {
            ModelKind::SAC => Box::new(SingleAvoidedCrossing::new()),
            ModelKind::DAC => Box::new(DualAvoidedCrossing::new()),
            ModelKind::ECR => Box::new(ExtendedCouplingReflection::new()),
            ModelKind::DBG => Box::new(DumbbellGeometry::new()),
            ModelKind::DAG => Box::new(DoubleArchGeometry::new()),
            ModelKind::DRN => Box::new(DoubleRosenZener::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array2;

    #[test]
    fn hamiltonian_and_gradient_are_symmetric() {
        let n_samples: usize = 201;
        for kind in ModelKind::all().iter() {
            let model = kind.build();
            let mut h: Array2<f64> = Array2::zeros((2, 2));
            let mut dh: Array2<f64> = Array2::zeros((2, 2));
            for k in 0..n_samples {
                let x: f64 = model.left()
                    + (model.right() - model.left()) / (n_samples - 1) as f64 * k as f64;
                model.hamiltonian(x, h.view_mut());
                model.gradient(x, dh.view_mut());
                assert_eq!(h[[0, 1]], h[[1, 0]], "{} H(x) asymmetric at x = {}", kind.name(), x);
                assert_eq!(
                    dh[[0, 1]],
                    dh[[1, 0]],
                    "{} H'(x) asymmetric at x = {}",
                    kind.name(),
                    x
                );
            }
        }
    }

    #[test]
    fn ecr_left_boundary_values() {
        let model = ExtendedCouplingReflection::new();
        let mut h: Array2<f64> = Array2::zeros((2, 2));
        model.hamiltonian(-15.0, h.view_mut());
        assert_eq!(h[[0, 0]], 6.0e-4);
        assert_eq!(h[[1, 1]], -6.0e-4);
        assert_relative_eq!(h[[0, 1]], 0.1 * (0.9 * -15.0_f64).exp(), max_relative = 1.0e-14);
        assert_eq!(h[[0, 1]], h[[1, 0]]);
        assert!(h[[0, 1]] > 0.0 && h[[0, 1]] < 1.0e-6);
    }

    #[test]
    fn piecewise_branches_are_continuous() {
        // DBG and DAG switch formulas at +-z; the coupling must not jump there.
        let cases: [(ModelKind, f64); 2] = [(ModelKind::DBG, 10.0), (ModelKind::DAG, 4.0)];
        let eps: f64 = 1.0e-8;
        for (kind, z) in cases.iter() {
            let model = kind.build();
            let mut h: Array2<f64> = Array2::zeros((2, 2));
            for boundary in [-z, *z].iter() {
                model.hamiltonian(boundary - eps, h.view_mut());
                let below: f64 = h[[0, 1]];
                model.hamiltonian(boundary + eps, h.view_mut());
                let above: f64 = h[[0, 1]];
                assert_relative_eq!(below, above, max_relative = 1.0e-6);
            }
        }
    }

    #[test]
    fn model_kind_round_trip() {
        for kind in ModelKind::all().iter() {
            assert_eq!(ModelKind::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(ModelKind::from_name("drn"), Some(ModelKind::DRN));
        assert_eq!(ModelKind::from_name("XYZ"), None);
    }

    #[test]
    #[should_panic(expected = "scratch matrix dimension mismatch")]
    fn oversized_scratch_matrix_is_rejected() {
        // a 3x3 buffer would silently keep stale entries outside the 2x2
        // block; the evaluator has to refuse it up front
        let model = ExtendedCouplingReflection::new();
        let mut h: Array2<f64> = Array2::from_elem((3, 3), 42.0);
        model.hamiltonian(-15.0, h.view_mut());
    }

    #[test]
    #[should_panic(expected = "scratch matrix dimension mismatch")]
    fn undersized_scratch_matrix_is_rejected() {
        let model = SingleAvoidedCrossing::new();
        let mut dh: Array2<f64> = Array2::zeros((1, 1));
        model.gradient(0.0, dh.view_mut());
    }

    #[test]
    fn domains_are_ordered() {
        for kind in ModelKind::all().iter() {
            let model = kind.build();
            assert!(model.left() < model.right());
            assert_eq!(model.n_states(), 2);
        }
    }
}
