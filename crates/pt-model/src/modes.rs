//! Eigenfrequency derivation.

use crate::error::{ModelError, ModelResult};
use pt_core::Real;
use pt_trap::{Ion, PenningTrap};

/// The three characteristic frequencies of bounded motion, in rad/s.
///
/// A constructed value implies the motion is bounded; construction is the
/// only place the discriminant is checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModeFrequencies {
    /// Free-space cyclotron frequency, q*B0/m.
    pub cyclotron: Real,
    /// Axial oscillation frequency, sqrt(q*U0/(m*d^2)).
    pub axial: Real,
    /// Radial splitting, sqrt(cyclotron^2 - 2*axial^2).
    pub reduced_cyclotron: Real,
    /// Modified (fast) cyclotron frequency, (cyclotron + reduced)/2.
    pub modified_cyclotron: Real,
    /// Magnetron (slow drift) frequency, (cyclotron - reduced)/2.
    pub magnetron: Real,
}

impl ModeFrequencies {
    pub fn derive(trap: &PenningTrap, ion: &Ion) -> ModelResult<Self> {
        let m = ion.mass_kg();
        let q = ion.charge_c();
        let b0 = trap.field_t();
        let u0 = trap.voltage_v();
        let d = trap.dimension_m();

        // Axial confinement needs q*U0 > 0, otherwise omega_z is imaginary
        // and the ion escapes along the field axis.
        let axial_sq = q * u0 / (m * d * d);
        if axial_sq <= 0.0 {
            return Err(ModelError::UnboundedMotion {
                discriminant: axial_sq,
            });
        }

        let cyclotron = q * b0 / m;
        let axial = axial_sq.sqrt();

        let discriminant = cyclotron * cyclotron - 2.0 * axial_sq;
        if discriminant <= 0.0 {
            return Err(ModelError::UnboundedMotion { discriminant });
        }
        let reduced_cyclotron = discriminant.sqrt();

        Ok(Self {
            cyclotron,
            axial,
            reduced_cyclotron,
            modified_cyclotron: 0.5 * (cyclotron + reduced_cyclotron),
            magnetron: 0.5 * (cyclotron - reduced_cyclotron),
        })
    }
}
