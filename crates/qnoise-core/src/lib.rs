pub mod noise;
pub mod drift;
pub mod diffusion;
pub mod integrators;

// Core types
pub type F = f64;
pub use noise::NoiseGenerator;

// SDE traits
pub use drift::Drift;
pub use diffusion::Diffusion;

// Integrators
pub use integrators::{SdeIntegrator, Heun};
