use crate::models::{check_scratch_dim, PotentialModel};
use ndarray::prelude::*;

/// Tully model I: a single avoided crossing between two diabatic surfaces
/// that swap character at x = 0.
pub struct SingleAvoidedCrossing {
    pub x0: f64,
    pub left: f64,
    pub right: f64,
}

impl SingleAvoidedCrossing {
    pub fn new() -> SingleAvoidedCrossing {
        SingleAvoidedCrossing {
            x0: -17.5,
            left: -10.0,
            right: 10.0,
        }
    }
}

impl PotentialModel for SingleAvoidedCrossing {
    fn hamiltonian(&self, x: f64, mut h: ArrayViewMut2<f64>) {
        check_scratch_dim(self.n_states(), &h);
        let flag: f64 = if x > 0.0 { 1.0 } else { -1.0 };
        let h11: f64 = flag * 0.01 * (1.0 - (-flag * 1.6 * x).exp());
        let h12: f64 = 0.005 * (-x * x).exp();
        h[[0, 0]] = h11;
        h[[1, 1]] = -h11;
        h[[0, 1]] = h12;
        h[[1, 0]] = h12;
    }

    fn gradient(&self, x: f64, mut dh: ArrayViewMut2<f64>) {
        check_scratch_dim(self.n_states(), &dh);
        let d11: f64 = 0.01 * 1.6 * ((if x < 0.0 { 1.0 } else { -1.0 }) * 1.6 * x).exp();
        let d12: f64 = -2.0 * 0.005 * x * (-x * x).exp();
        dh[[0, 0]] = d11;
        dh[[1, 1]] = -d11;
        dh[[1, 0]] = d12;
        dh[[0, 1]] = d12;
    }

    fn sigma_x(&self, k: f64) -> f64 {
        10.0 / k
    }

    fn sigma_p(&self, k: f64) -> f64 {
        k / 20.0
    }

    fn x0(&self) -> f64 {
        self.x0
    }

    fn left(&self) -> f64 {
        self.left
    }

    fn right(&self) -> f64 {
        self.right
    }
}

/// Tully model II: two avoided crossings produced by a Gaussian well in the
/// upper diabatic surface.
pub struct DualAvoidedCrossing {
    pub x0: f64,
    pub left: f64,
    pub right: f64,
}

impl DualAvoidedCrossing {
    pub fn new() -> DualAvoidedCrossing {
        DualAvoidedCrossing {
            x0: -17.5,
            left: -15.0,
            right: 15.0,
        }
    }
}

impl PotentialModel for DualAvoidedCrossing {
    fn hamiltonian(&self, x: f64, mut h: ArrayViewMut2<f64>) {
        check_scratch_dim(self.n_states(), &h);
        let h12: f64 = 0.015 * (-0.06 * x * x).exp();
        h[[0, 0]] = 0.0;
        h[[1, 1]] = -0.1 * (-0.28 * x * x).exp() + 0.05;
        h[[0, 1]] = h12;
        h[[1, 0]] = h12;
    }

    fn gradient(&self, x: f64, mut dh: ArrayViewMut2<f64>) {
        check_scratch_dim(self.n_states(), &dh);
        let d12: f64 = -2.0 * 0.015 * 0.06 * x * (-0.06 * x * x).exp();
        dh[[0, 0]] = 0.0;
        dh[[1, 1]] = 2.0 * 0.1 * 0.28 * x * (-0.28 * x * x).exp();
        dh[[1, 0]] = d12;
        dh[[0, 1]] = d12;
    }

    fn sigma_x(&self, k: f64) -> f64 {
        10.0 / k
    }

    fn sigma_p(&self, k: f64) -> f64 {
        k / 20.0
    }

    fn x0(&self) -> f64 {
        self.x0
    }

    fn left(&self) -> f64 {
        self.left
    }

    fn right(&self) -> f64 {
        self.right
    }
}

/// Tully model III: extended coupling with reflection. The coupling grows
/// exponentially up to x = 0 and saturates beyond it.
pub struct ExtendedCouplingReflection {
    pub x0: f64,
    pub left: f64,
    pub right: f64,
}

impl ExtendedCouplingReflection {
    pub fn new() -> ExtendedCouplingReflection {
        ExtendedCouplingReflection {
            x0: -17.5,
            left: -15.0,
            right: 15.0,
        }
    }
}

impl PotentialModel for ExtendedCouplingReflection {
    fn hamiltonian(&self, x: f64, mut h: ArrayViewMut2<f64>) {
        check_scratch_dim(self.n_states(), &h);
        let h12: f64 = if x < 0.0 {
            0.1 * (0.9 * x).exp()
        } else {
            0.1 * (2.0 - (-0.9 * x).exp())
        };
        h[[0, 0]] = 6.0e-4;
        h[[1, 1]] = -6.0e-4;
        h[[0, 1]] = h12;
        h[[1, 0]] = h12;
    }

    fn gradient(&self, x: f64, mut dh: ArrayViewMut2<f64>) {
        check_scratch_dim(self.n_states(), &dh);
        let d12: f64 = 0.1 * 0.9 * ((if x > 0.0 { -1.0 } else { 1.0 }) * 0.9 * x).exp();
        dh[[0, 0]] = 0.0;
        dh[[1, 1]] = 0.0;
        dh[[1, 0]] = d12;
        dh[[0, 1]] = d12;
    }

    fn sigma_x(&self, k: f64) -> f64 {
        10.0 / k
    }

    fn sigma_p(&self, k: f64) -> f64 {
        k / 20.0
    }

    fn x0(&self) -> f64 {
        self.x0
    }

    fn left(&self) -> f64 {
        self.left
    }

    fn right(&self) -> f64 {
        self.right
    }
}
