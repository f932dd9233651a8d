//! Charged particle description.

use crate::error::{TrapError, TrapResult};
use pt_core::units::{Charge, Mass};
use pt_core::Real;
use uom::si::electric_charge::coulomb;
use uom::si::mass::kilogram;

/// An ion (or any charged particle) held in the trap.
///
/// Immutable after creation. Mass and charge are stored as raw SI values so
/// the math core never touches unit types.
#[derive(Clone, Debug, PartialEq)]
pub struct Ion {
    mass_kg: Real,
    charge_c: Real,
    // +1 or -1, fixed at construction since charge never changes
    polarity: Real,
    label: String,
}

impl Ion {
    pub fn new(mass: Mass, charge: Charge, label: impl Into<String>) -> TrapResult<Self> {
        let mass_kg = mass.get::<kilogram>();
        let charge_c = charge.get::<coulomb>();
        if !mass_kg.is_finite() {
            return Err(TrapError::NonFinite { what: "ion mass" });
        }
        if !charge_c.is_finite() {
            return Err(TrapError::NonFinite { what: "ion charge" });
        }
        if mass_kg <= 0.0 {
            return Err(TrapError::InvalidArg {
                what: "ion mass must be positive",
            });
        }
        if charge_c == 0.0 {
            return Err(TrapError::InvalidArg {
                what: "ion charge must be nonzero",
            });
        }
        Ok(Self {
            mass_kg,
            charge_c,
            polarity: charge_c.signum(),
            label: label.into(),
        })
    }

    /// Mass in kilograms.
    pub fn mass_kg(&self) -> Real {
        self.mass_kg
    }

    /// Signed charge in coulombs.
    pub fn charge_c(&self) -> Real {
        self.charge_c
    }

    /// Sign of the charge: +1.0 or -1.0.
    pub fn polarity(&self) -> Real {
        self.polarity
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
