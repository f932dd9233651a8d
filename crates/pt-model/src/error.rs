//! Error types for trajectory model construction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    /// The radial motion is not confined: omega_c^2 - 2*omega_z^2 <= 0,
    /// or the axial restoring force is absent (q*U0 <= 0). Reported to the
    /// user; the animation must not start.
    #[error("Ion motion is not bounded (discriminant = {discriminant:.6e} rad^2/s^2); adjust trap parameters")]
    UnboundedMotion { discriminant: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ModelResult<T> = Result<T, ModelError>;
