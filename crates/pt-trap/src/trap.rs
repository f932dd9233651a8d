//! Penning trap configuration.

use crate::error::{TrapError, TrapResult};
use pt_core::units::{Length, MagneticFlux, Voltage};
use pt_core::Real;
use uom::si::electric_potential::volt;
use uom::si::length::meter;
use uom::si::magnetic_flux_density::tesla;

/// How the characteristic trap dimension d is supplied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrapGeometry {
    /// d given directly.
    CharacteristicDimension(Length),
    /// d derived from the electrode half-axes:
    /// d = sqrt(0.5 * (z0^2 + 0.5 * rho0^2))
    HalfAxes { z0: Length, rho0: Length },
}

impl TrapGeometry {
    /// Characteristic dimension in meters.
    pub fn dimension_m(&self) -> Real {
        match *self {
            TrapGeometry::CharacteristicDimension(d) => d.get::<meter>(),
            TrapGeometry::HalfAxes { z0, rho0 } => {
                let z0 = z0.get::<meter>();
                let rho0 = rho0.get::<meter>();
                (0.5 * (z0 * z0 + 0.5 * rho0 * rho0)).sqrt()
            }
        }
    }
}

/// Static trap configuration: uniform axial magnetic field plus a
/// quadrupole electrostatic potential. Immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct PenningTrap {
    b0_t: Real,
    u0_v: Real,
    d_m: Real,
    label: String,
}

impl PenningTrap {
    pub fn new(
        b0: MagneticFlux,
        u0: Voltage,
        geometry: TrapGeometry,
        label: impl Into<String>,
    ) -> TrapResult<Self> {
        let b0_t = b0.get::<tesla>();
        let u0_v = u0.get::<volt>();
        let d_m = geometry.dimension_m();
        if !b0_t.is_finite() || !u0_v.is_finite() || !d_m.is_finite() {
            return Err(TrapError::NonFinite {
                what: "trap parameter",
            });
        }
        if d_m <= 0.0 {
            return Err(TrapError::InvalidArg {
                what: "characteristic dimension must be positive",
            });
        }
        Ok(Self {
            b0_t,
            u0_v,
            d_m,
            label: label.into(),
        })
    }

    /// Magnetic field magnitude in tesla.
    pub fn field_t(&self) -> Real {
        self.b0_t
    }

    /// Static ring voltage in volts.
    pub fn voltage_v(&self) -> Real {
        self.u0_v
    }

    /// Characteristic dimension in meters.
    pub fn dimension_m(&self) -> Real {
        self.d_m
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Copy of this trap with a different ring voltage.
    pub fn with_voltage(&self, u0: Voltage) -> Self {
        Self {
            u0_v: u0.get::<volt>(),
            ..self.clone()
        }
    }

    /// Copy of this trap with a different magnetic field.
    pub fn with_magnetic_field(&self, b0: MagneticFlux) -> Self {
        Self {
            b0_t: b0.get::<tesla>(),
            ..self.clone()
        }
    }
}
