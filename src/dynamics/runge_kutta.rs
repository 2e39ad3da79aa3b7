use ndarray::prelude::*;

/// Accumulate a scaled derived state into a state, state += coeff * derived.
/// Together with `Clone` this is the whole contract a type needs to be
/// advanced by the integrator.
pub trait ScaledAccumulate<D> {
    fn accumulate(&mut self, derived: &D, coeff: f64);
}

impl ScaledAccumulate<Array1<f64>> for Array1<f64> {
    fn accumulate(&mut self, derived: &Array1<f64>, coeff: f64) {
        self.scaled_add(coeff, derived);
    }
}

/// One step of the classical 4th order Runge-Kutta method. The derivative
/// callable may capture context; `stages` holds the four scratch slots the
/// caller allocates once and reuses across steps.
pub fn rk4_step<S, D, F>(state: &mut S, stages: &mut [D; 4], derivative: &mut F, dt: f64)
where
    S: Clone + ScaledAccumulate<D>,
    D: Clone,
    F: FnMut(&S, &mut D),
{
    derivative(state, &mut stages[0]);

    let mut probe: S = state.clone();
    probe.accumulate(&stages[0], dt / 2.0);
    derivative(&probe, &mut stages[1]);

    probe = state.clone();
    probe.accumulate(&stages[1], dt / 2.0);
    derivative(&probe, &mut stages[2]);

    probe = state.clone();
    probe.accumulate(&stages[2], dt);
    derivative(&probe, &mut stages[3]);

    let weights: [f64; 4] = [dt / 6.0, dt / 3.0, dt / 3.0, dt / 6.0];
    for (stage, weight) in stages.iter().zip(weights.iter()) {
        state.accumulate(stage, *weight);
    }
}
