use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, StandardNormal};

pub struct NoiseGenerator {
    rng: ChaCha20Rng,
}

impl NoiseGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Seed from the operating system entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// One independent draw from N(0, 1).
    pub fn standard_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }

    /// One Wiener increment dW ~ N(0, dt), realized as sqrt(dt) * N(0, 1).
    pub fn generate_dw(&mut self, sqrt_dt: f64) -> f64 {
        let sample: f64 = self.standard_normal();
        sample * sqrt_dt
    }
}
