pub mod heun;

use crate::diffusion::Diffusion;
use crate::drift::Drift;
use crate::F;

pub use heun::Heun;

pub trait SdeIntegrator: Send + Sync {
    /// Advance the state one step of size `dt`, consuming the Wiener
    /// increment `dw` (already scaled by sqrt(dt)).
    fn step(&self, x: F, dt: F, dw: F, drift: &impl Drift, diffusion: &impl Diffusion) -> F;
}
