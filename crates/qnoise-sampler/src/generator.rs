use qnoise_core::{Diffusion, Drift, Heun, NoiseGenerator, SdeIntegrator, F};
use qnoise_models::{OrnsteinUhlenbeck, QGeneralizedNoise, Q_VARIANCE_LIMIT};

use crate::error::{SpecError, SpecResult};
use crate::spec::{OuSpec, QNoiseSpec};

/// Stateful series generator: owns the random engine and the current
/// process value, and is reusable across calls. Not shareable between
/// threads without external synchronization; concurrent callers should
/// each own an instance.
pub struct Generator {
    noise: NoiseGenerator,
    integrator: Heun,
    x: F,
}

impl Generator {
    pub fn new(seed: u64) -> Self {
        Self {
            noise: NoiseGenerator::new(seed),
            integrator: Heun,
            x: 0.0,
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            noise: NoiseGenerator::from_entropy(),
            integrator: Heun,
            x: 0.0,
        }
    }

    /// Generate `spec.n` samples of q-generalized colored noise.
    pub fn q_noise(&mut self, spec: &QNoiseSpec) -> SpecResult<Vec<F>> {
        validate_step(spec.dt)?;
        validate_finite("tau", spec.tau)?;
        validate_finite("q", spec.q)?;
        if spec.normalize && spec.q >= Q_VARIANCE_LIMIT {
            return Err(SpecError::DivergentVariance(spec.q));
        }

        let mut tau = spec.tau.abs();
        if tau == 0.0 {
            tau = spec.dt;
        }

        let model = if spec.normalize {
            QGeneralizedNoise::normalized(tau, spec.q)
        } else {
            QGeneralizedNoise::new(tau, spec.q)
        };

        let transient = spec
            .transient
            .unwrap_or_else(|| auto_transient(tau, spec.dt));
        tracing::debug!(tau, q = spec.q, transient, "generating q-noise series");

        // Small perturbation around zero; the transient forgets it.
        self.x = self.noise.standard_normal() / 100.0;

        Ok(self.run(&model, transient, spec.n, spec.dt))
    }

    /// Generate `spec.n` samples of Ornstein-Uhlenbeck noise, or of pure
    /// white noise when requested (or forced by `tau = 0`).
    pub fn ornstein_uhlenbeck(&mut self, spec: &OuSpec) -> SpecResult<Vec<F>> {
        validate_step(spec.dt)?;
        validate_finite("tau", spec.tau)?;

        let tau = spec.tau.abs();
        if spec.white_noise || tau == 0.0 {
            tracing::debug!(n = spec.n, "emitting independent Gaussian samples");
            return Ok((0..spec.n).map(|_| self.noise.standard_normal()).collect());
        }

        let model = OrnsteinUhlenbeck::new(tau);
        let transient = match spec.transient {
            Some(steps) => {
                self.x = spec.initial;
                steps
            }
            None => {
                self.x = self.noise.standard_normal() / 100.0;
                auto_transient(tau, spec.dt)
            }
        };
        tracing::debug!(tau, transient, "generating Ornstein-Uhlenbeck series");

        Ok(self.run(&model, transient, spec.n, spec.dt))
    }

    /// Burn-in then record: `transient` discarded steps followed by `n`
    /// recorded ones, one Wiener increment per step.
    fn run<M: Drift + Diffusion>(&mut self, model: &M, transient: usize, n: usize, dt: F) -> Vec<F> {
        let sqrt_dt = dt.sqrt();

        for _ in 0..transient {
            let dw = self.noise.generate_dw(sqrt_dt);
            self.x = self.integrator.step(self.x, dt, dw, model, model);
        }

        let mut series = Vec::with_capacity(n);
        for _ in 0..n {
            let dw = self.noise.generate_dw(sqrt_dt);
            self.x = self.integrator.step(self.x, dt, dw, model, model);
            series.push(self.x);
        }

        series
    }
}

/// Default burn-in: two correlation times, so the recorded series starts
/// from the stationary regime rather than from the seed value.
fn auto_transient(tau: F, dt: F) -> usize {
    (2.0 * tau / dt) as usize
}

fn validate_step(dt: f64) -> SpecResult<()> {
    if dt > 0.0 && dt.is_finite() {
        Ok(())
    } else {
        Err(SpecError::InvalidStepSize(dt))
    }
}

fn validate_finite(name: &'static str, value: f64) -> SpecResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SpecError::NonFinite { name, value })
    }
}
