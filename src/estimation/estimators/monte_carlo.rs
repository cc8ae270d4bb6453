use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::estimation::{Method, PiEstimator};

/// Dart throwing on the unit square.
///
/// Points are drawn uniformly from `[0, 1) x [0, 1)`; the share landing
/// inside the quarter circle of radius 1 approximates `pi / 4`.
///
/// The random source is owned by the estimator, so a seeded generator makes
/// runs reproducible and independent estimators never share state.
#[derive(Debug)]
pub struct MonteCarloEstimator<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> MonteCarloEstimator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl MonteCarloEstimator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Unseeded generator backed by OS entropy.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> PiEstimator for MonteCarloEstimator<R> {
    fn method(&self) -> Method {
        Method::MonteCarlo
    }

    fn approximate(&mut self, points: u64) -> f64 {
        let mut inside: u64 = 0;
        for _ in 0..points {
            let x: f64 = self.rng.random();
            let y: f64 = self.rng.random();

            if (x * x + y * y).sqrt() <= 1.0 {
                inside += 1;
            }
        }
        inside as f64 / points as f64 * 4.0
    }
}
