pub mod qgen;
pub mod ou;

pub use qgen::QGeneralizedNoise;
pub use ou::OrnsteinUhlenbeck;

/// Upper limit of `q` for which the q-generalized stationary variance is
/// finite; normalization is only defined below it.
pub const Q_VARIANCE_LIMIT: f64 = 5.0 / 3.0;
