use crate::dynamics::runge_kutta::{rk4_step, ScaledAccumulate};
use crate::models::PotentialModel;
use crate::quantum::coupling::integral;
use crate::quantum::diagonalization::AdiabaticTracker;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};

/// Classical phase-space point of a one-dimensional nuclear coordinate.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct PhasePoint {
    pub x: f64,
    pub p: f64,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PhaseDerivative {
    pub dx: f64,
    pub dp: f64,
}

impl ScaledAccumulate<PhaseDerivative> for PhasePoint {
    fn accumulate(&mut self, derived: &PhaseDerivative, coeff: f64) {
        self.x += coeff * derived.dx;
        self.p += coeff * derived.dp;
    }
}

/// Classical trajectory propagated on a single adiabatic surface. The force
/// is the Hellmann-Feynman gradient -<s| dH/dx |s> of the occupied state.
pub struct SurfaceTrajectory<'a> {
    model: &'a dyn PotentialModel,
    tracker: AdiabaticTracker,
    state: usize,
    mass: f64,
    hamiltonian: Array2<f64>,
    gradient: Array2<f64>,
}

impl<'a> SurfaceTrajectory<'a> {
    pub fn new(model: &'a dyn PotentialModel, state: usize, mass: f64) -> SurfaceTrajectory<'a> {
        let n_states: usize = model.n_states();
        assert!(state < n_states, "surface index out of range");
        SurfaceTrajectory {
            model: model,
            tracker: AdiabaticTracker::new(n_states),
            state: state,
            mass: mass,
            hamiltonian: Array2::zeros((n_states, n_states)),
            gradient: Array2::zeros((n_states, n_states)),
        }
    }

    /// Slope of the occupied adiabatic surface at `x`. The eigenvector sign
    /// cancels in the expectation value, so no sign tracking is needed here.
    fn surface_gradient(&mut self, x: f64) -> f64 {
        self.model.hamiltonian(x, self.hamiltonian.view_mut());
        let (_, eigenvectors) = self
            .tracker
            .diagonalize(self.hamiltonian.view())
            .expect("eigendecomposition failed during propagation");
        self.model.gradient(x, self.gradient.view_mut());
        integral(
            eigenvectors[self.state].view(),
            self.gradient.view(),
            eigenvectors[self.state].view(),
        )
    }

    /// Potential plus kinetic energy at a phase-space point.
    pub fn total_energy(&mut self, point: PhasePoint) -> f64 {
        self.model.hamiltonian(point.x, self.hamiltonian.view_mut());
        let (energies, _) = self
            .tracker
            .diagonalize(self.hamiltonian.view())
            .expect("eigendecomposition failed during propagation");
        energies[self.state] + point.p * point.p / (2.0 * self.mass)
    }

    /// Propagate `start` for `n_steps` steps of size `dt` and return the full
    /// path including the starting point.
    pub fn propagate(&mut self, start: PhasePoint, dt: f64, n_steps: usize) -> Vec<PhasePoint> {
        let mut stages: [PhaseDerivative; 4] = [PhaseDerivative::default(); 4];
        let mut point: PhasePoint = start;
        let mut path: Vec<PhasePoint> = Vec::with_capacity(n_steps + 1);
        path.push(point);

        let mass: f64 = self.mass;
        for _ in 0..n_steps {
            let mut derivative = |state: &PhasePoint, out: &mut PhaseDerivative| {
                out.dx = state.p / mass;
                out.dp = -self.surface_gradient(state.x);
            };
            rk4_step(&mut point, &mut stages, &mut derivative, dt);
            path.push(point);
        }
        return path;
    }
}
