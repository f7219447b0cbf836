pub mod error;
pub mod generator;
pub mod spec;

pub use error::{SpecError, SpecResult};
pub use generator::Generator;
pub use spec::{OuSpec, QNoiseSpec};
