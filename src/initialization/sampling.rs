use crate::dynamics::trajectory::PhasePoint;
use crate::models::PotentialModel;
use rand_distr::{Distribution, Normal};

/// Initial conditions drawn from the Gaussian phase-space density of a
/// wavepacket centered at (x0, k) with the model's position and momentum
/// spreads.
pub struct WavepacketSampler {
    position: Normal<f64>,
    momentum: Normal<f64>,
}

impl WavepacketSampler {
    pub fn new(model: &dyn PotentialModel, k: f64) -> WavepacketSampler {
        let position = Normal::new(model.x0(), model.sigma_x(k))
            .expect("Error regarding the distribution!");
        let momentum =
            Normal::new(k, model.sigma_p(k)).expect("Error regarding the distribution!");
        WavepacketSampler {
            position: position,
            momentum: momentum,
        }
    }

    pub fn sample(&self, n: usize) -> Vec<PhasePoint> {
        let mut points: Vec<PhasePoint> = Vec::with_capacity(n);
        for _ in 0..n {
            points.push(PhasePoint {
                x: self.position.sample(&mut rand::thread_rng()),
                p: self.momentum.sample(&mut rand::thread_rng()),
            });
        }
        return points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DoubleRosenZener;

    #[test]
    fn samples_cluster_around_wavepacket_center() {
        // DRN has fixed spreads sigma_x = 0.5 and sigma_p = 1.0
        let model = DoubleRosenZener::new();
        let sampler = WavepacketSampler::new(&model, 20.0);
        let points: Vec<PhasePoint> = sampler.sample(2000);
        assert_eq!(points.len(), 2000);

        let mean_x: f64 = points.iter().map(|point| point.x).sum::<f64>() / 2000.0;
        let mean_p: f64 = points.iter().map(|point| point.p).sum::<f64>() / 2000.0;
        // 2000 samples put the standard error well below these bounds
        assert!((mean_x - model.x0).abs() < 0.1);
        assert!((mean_p - 20.0).abs() < 0.2);
    }
}
