use crate::models::{check_scratch_dim, PotentialModel};
use ndarray::prelude::*;

/// Dumbbell geometry: two extended-coupling regions glued back to back at
/// x = +-z, so a wavepacket meets strong coupling twice.
pub struct DumbbellGeometry {
    pub x0: f64,
    pub left: f64,
    pub right: f64,
}

impl DumbbellGeometry {
    pub fn new() -> DumbbellGeometry {
        DumbbellGeometry {
            x0: -22.5,
            left: -20.0,
            right: 20.0,
        }
    }
}

impl PotentialModel for DumbbellGeometry {
    fn hamiltonian(&self, x: f64, mut h: ArrayViewMut2<f64>) {
        check_scratch_dim(self.n_states(), &h);
        h[[0, 0]] = 6.0e-4;
        h[[1, 1]] = -6.0e-4;
        let (b, c, z): (f64, f64, f64) = (0.1, 0.9, 10.0);
        let h12: f64 = if x < -z {
            b * (c * (x - z)).exp() + b * (2.0 - (c * (x + z)).exp())
        } else if x < z {
            b * (c * (x - z)).exp() + b * (-c * (x + z)).exp()
        } else {
            b * (-c * (x + z)).exp() + b * (2.0 - (-c * (x - z)).exp())
        };
        h[[1, 0]] = h12;
        h[[0, 1]] = h12;
    }

    fn gradient(&self, x: f64, mut dh: ArrayViewMut2<f64>) {
        check_scratch_dim(self.n_states(), &dh);
        dh[[0, 0]] = 0.0;
        dh[[1, 1]] = 0.0;
        let (b, c, z): (f64, f64, f64) = (0.1, 0.9, 10.0);
        let d12: f64 = if x < -z {
            b * c * (c * (x - z)).exp() - b * c * (c * (x + z)).exp()
        } else if x < z {
            b * c * (c * (x - z)).exp() - b * c * (-c * (x + z)).exp()
        } else {
            -b * c * (-c * (x + z)).exp() + b * c * (-c * (x - z)).exp()
        };
        dh[[0, 1]] = d12;
        dh[[1, 0]] = d12;
    }

    fn sigma_x(&self, _k: f64) -> f64 {
        3.0 * 2.0_f64.sqrt() / 2.0
    }

    fn sigma_p(&self, _k: f64) -> f64 {
        1.0 / 3.0 / 2.0_f64.sqrt()
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

/// Double arch geometry: the coupling rises to a plateau between x = +-z and
/// falls off again, forming an arch on both sides.
pub struct DoubleArchGeometry {
    pub x0: f64,
    pub left: f64,
    pub right: f64,
}

impl DoubleArchGeometry {
    pub fn new() -> DoubleArchGeometry {
        DoubleArchGeometry {
            x0: -27.5,
            left: -20.0,
            right: 20.0,
        }
    }
}

impl PotentialModel for DoubleArchGeometry {
    fn hamiltonian(&self, x: f64, mut h: ArrayViewMut2<f64>) {
        check_scratch_dim(self.n_states(), &h);
        h[[0, 0]] = 6.0e-4;
        h[[1, 1]] = -6.0e-4;
        let (b, c, z): (f64, f64, f64) = (0.1, 0.9, 4.0);
        let h12: f64 = if x < -z {
            -b * (c * (x - z)).exp() + b * (c * (x + z)).exp()
        } else if x < z {
            -b * (c * (x - z)).exp() - b * (-c * (x + z)).exp() + 2.0 * b
        } else {
            b * (-c * (x - z)).exp() - b * (-c * (x + z)).exp()
        };
        h[[0, 1]] = h12;
        h[[1, 0]] = h12;
    }

    fn gradient(&self, x: f64, mut dh: ArrayViewMut2<f64>) {
        check_scratch_dim(self.n_states(), &dh);
        dh[[0, 0]] = 0.0;
        dh[[1, 1]] = 0.0;
        let (b, c, z): (f64, f64, f64) = (0.1, 0.9, 4.0);
        let d12: f64 = if x < -z {
            -b * c * (c * (x - z)).exp() + b * c * (c * (x + z)).exp()
        } else if x < z {
            -b * c * (c * (x - z)).exp() + b * c * (-c * (x + z)).exp()
        } else {
            -b * c * (-c * (x - z)).exp() + b * c * (-c * (x + z)).exp()
        };
        dh[[0, 1]] = d12;
        dh[[1, 0]] = d12;
    }

    fn sigma_x(&self, _k: f64) -> f64 {
        2.0
    }

    fn sigma_p(&self, _k: f64) -> f64 {
        0.25
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

/// Double Rosen-Zener model: two Gaussian coupling bumps at x = +-2 between
/// two flat diabatic surfaces.
pub struct DoubleRosenZener {
    pub x0: f64,
    pub left: f64,
    pub right: f64,
}

impl DoubleRosenZener {
    pub fn new() -> DoubleRosenZener {
        DoubleRosenZener {
            x0: -12.5,
            left: -10.0,
            right: 10.0,
        }
    }
}

impl PotentialModel for DoubleRosenZener {
    fn hamiltonian(&self, x: f64, mut h: ArrayViewMut2<f64>) {
        check_scratch_dim(self.n_states(), &h);
        h[[0, 0]] = 0.0;
        h[[1, 1]] = 0.01;
        let h12: f64 =
            0.03 * ((-3.2 * (x - 2.0) * (x - 2.0)).exp() + (-3.2 * (x + 2.0) * (x + 2.0)).exp());
        h[[0, 1]] = h12;
        h[[1, 0]] = h12;
    }

    fn gradient(&self, x: f64, mut dh: ArrayViewMut2<f64>) {
        check_scratch_dim(self.n_states(), &dh);
        dh[[0, 0]] = 0.0;
        dh[[1, 1]] = 0.0;
        let d12: f64 = 0.03
            * (-2.0
                * 3.2
                * ((x - 2.0) * (-3.2 * (x - 2.0) * (x - 2.0)).exp()
                    + (x + 2.0) * (-3.2 * (x + 2.0) * (x + 2.0)).exp()));
        dh[[0, 1]] = d12;
        dh[[1, 0]] = d12;
    }

    fn sigma_x(&self, _k: f64) -> f64 {
        0.5
    }

    fn sigma_p(&self, _k: f64) -> f64 {
        1.0
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
