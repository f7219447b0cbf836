use crate::Q_VARIANCE_LIMIT;
use qnoise_core::{Diffusion, Drift, F};

/// Tsallis q-generalized colored noise:
///   dX_t = -(1/τ) X_t / (1 + (q-1)/(2D) X_t²) dt + √(2D/τ) dW_t
/// where D is the noise intensity. The stationary density is the
/// q-Gaussian P(x) ∝ [1 + (q-1)/(2D) x²]^(-1/(q-1)): bounded support for
/// q < 1, Gaussian at q = 1, heavy tails for q > 1. At q = 1 the process
/// is exactly the Ornstein-Uhlenbeck process dX = -X/τ dt + √(2D/τ) dW.
#[derive(Clone, Debug)]
pub struct QGeneralizedNoise {
    pub tau: f64,       // Correlation time
    pub q: f64,         // Nonlinearity exponent
    pub intensity: f64, // Noise intensity D
}

impl QGeneralizedNoise {
    /// Raw process with unit noise intensity.
    pub fn new(tau: f64, q: f64) -> Self {
        Self::with_intensity(tau, q, 1.0)
    }

    /// Process rescaled to unit stationary variance for every q < 5/3.
    /// Stationary variance is 2D/(5-3q), so D = (5-3q)/2 pins it at 1.
    pub fn normalized(tau: f64, q: f64) -> Self {
        assert!(
            q < Q_VARIANCE_LIMIT,
            "Stationary variance diverges for q >= 5/3, cannot normalize"
        );
        Self::with_intensity(tau, q, (5.0 - 3.0 * q) / 2.0)
    }

    pub fn with_intensity(tau: f64, q: f64, intensity: f64) -> Self {
        assert!(tau > 0.0, "Correlation time must be positive");
        assert!(intensity > 0.0, "Noise intensity must be positive");

        Self { tau, q, intensity }
    }

    /// Stationary variance 2D/(5-3q); diverges for q >= 5/3.
    pub fn stationary_variance(&self) -> f64 {
        if self.q < Q_VARIANCE_LIMIT {
            2.0 * self.intensity / (5.0 - 3.0 * self.q)
        } else {
            f64::INFINITY
        }
    }

    /// Edge of the reachable range for q < 1: |x| < √(2D/(1-q)).
    /// None for q >= 1 (unbounded support).
    pub fn support_bound(&self) -> Option<f64> {
        if self.q < 1.0 {
            Some((2.0 * self.intensity / (1.0 - self.q)).sqrt())
        } else {
            None
        }
    }

    /// Diffusion amplitude √(2D/τ).
    pub fn noise_amplitude(&self) -> f64 {
        (2.0 * self.intensity / self.tau).sqrt()
    }
}

impl Drift for QGeneralizedNoise {
    fn mu(&self, x: F) -> F {
        let denom = 1.0 + (self.q - 1.0) / (2.0 * self.intensity) * x * x;
        -x / (self.tau * denom)
    }
}

impl Diffusion for QGeneralizedNoise {
    fn sigma(&self, _x: F) -> F {
        self.noise_amplitude()
    }
}
