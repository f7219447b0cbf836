use qnoise_core::{Diffusion, Drift, F};

/// Ornstein-Uhlenbeck process in the correlation-time parametrization:
///   dX_t = -X_t/τ dt + √(2/τ) dW_t
/// The stationary variance is 1 regardless of τ, and the autocorrelation
/// decays as exp(-lag/τ).
#[derive(Clone, Debug)]
pub struct OrnsteinUhlenbeck {
    pub tau: f64, // Correlation time
}

impl OrnsteinUhlenbeck {
    pub fn new(tau: f64) -> Self {
        assert!(tau > 0.0, "Correlation time must be positive");
        Self { tau }
    }

    /// Exact conditional mean: E[X_t | X_0] = X_0 exp(-t/τ)
    pub fn exact_mean(&self, x0: f64, t: f64) -> f64 {
        x0 * (-t / self.tau).exp()
    }

    /// Exact conditional variance: Var[X_t | X_0] = 1 - exp(-2t/τ)
    pub fn exact_variance(&self, t: f64) -> f64 {
        1.0 - (-2.0 * t / self.tau).exp()
    }

    /// Stationary variance (t → ∞)
    pub fn stationary_variance(&self) -> f64 {
        1.0
    }

    /// Stationary autocorrelation at the given lag: exp(-lag/τ)
    pub fn autocorrelation(&self, lag: f64) -> f64 {
        (-lag / self.tau).exp()
    }
}

impl Drift for OrnsteinUhlenbeck {
    fn mu(&self, x: F) -> F {
        -x / self.tau
    }
}

impl Diffusion for OrnsteinUhlenbeck {
    fn sigma(&self, _x: F) -> F {
        (2.0 / self.tau).sqrt()
    }
}
