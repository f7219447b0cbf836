use super::SdeIntegrator;
use crate::diffusion::Diffusion;
use crate::drift::Drift;
use crate::F;

/// Stochastic Heun method (second-order predictor-corrector)
#[derive(Clone, Copy, Debug)]
pub struct Heun;

impl SdeIntegrator for Heun {
    fn step(&self, x: F, dt: F, dw: F, drift: &impl Drift, diffusion: &impl Diffusion) -> F {
        // Predictor step
        let mu0 = drift.mu(x);
        let sigma0 = diffusion.sigma(x);
        let x_tilde = x + mu0 * dt + sigma0 * dw;

        // Corrector step: re-evaluate at the trial point and average.
        // The increment is the same one the predictor consumed.
        let mu1 = drift.mu(x_tilde);
        let sigma1 = diffusion.sigma(x_tilde);

        x + 0.5 * (mu0 + mu1) * dt + 0.5 * (sigma0 + sigma1) * dw
    }
}
