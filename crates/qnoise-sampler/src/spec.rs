use serde::{Deserialize, Serialize};

/// Parameters for a q-generalized noise series.
///
/// Defaults: 10 samples, step 0.01, auto-derived transient, variance
/// normalization on.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QNoiseSpec {
    /// Correlation time; the sign is ignored and 0 is treated as `dt`.
    pub tau: f64,
    /// Nonlinearity exponent; 1 is the linear (Gaussian) case.
    pub q: f64,
    /// Number of recorded samples.
    pub n: usize,
    /// Integration step size.
    pub dt: f64,
    /// Discarded warm-up steps; `None` derives `2 * tau / dt`.
    pub transient: Option<usize>,
    /// Rescale so the stationary variance is 1 regardless of q.
    pub normalize: bool,
}

impl QNoiseSpec {
    pub fn new(tau: f64, q: f64) -> Self {
        Self {
            tau,
            q,
            n: 10,
            dt: 0.01,
            transient: None,
            normalize: true,
        }
    }

    pub fn with_samples(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn with_step(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_transient(mut self, steps: usize) -> Self {
        self.transient = Some(steps);
        self
    }

    pub fn without_normalization(mut self) -> Self {
        self.normalize = false;
        self
    }
}

/// Parameters for an Ornstein-Uhlenbeck series.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OuSpec {
    /// Correlation time; the sign is ignored and 0 collapses the process
    /// to white noise.
    pub tau: f64,
    /// Number of recorded samples.
    pub n: usize,
    /// Integration step size.
    pub dt: f64,
    /// Discarded warm-up steps; `None` derives `2 * tau / dt`.
    pub transient: Option<usize>,
    /// Bypass the SDE and emit independent Gaussian samples.
    pub white_noise: bool,
    /// Starting value, honored only with an explicit transient.
    pub initial: f64,
}

impl OuSpec {
    pub fn new(tau: f64) -> Self {
        Self {
            tau,
            n: 10,
            dt: 0.01,
            transient: None,
            white_noise: false,
            initial: 0.0,
        }
    }

    pub fn with_samples(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn with_step(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_transient(mut self, steps: usize) -> Self {
        self.transient = Some(steps);
        self
    }

    pub fn with_initial(mut self, x0: f64) -> Self {
        self.initial = x0;
        self
    }

    pub fn as_white_noise(mut self) -> Self {
        self.white_noise = true;
        self
    }
}
